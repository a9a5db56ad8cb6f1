mod health_check;
mod newsletter;
mod templates;

pub use health_check::*;
pub use newsletter::*;
pub use templates::*;
