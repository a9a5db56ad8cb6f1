mod newsletter;

pub use newsletter::*;
