mod templates;

pub use templates::*;
