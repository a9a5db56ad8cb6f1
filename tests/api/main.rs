mod health_check;
mod helpers;
mod newsletter;
mod templates;
