mod health;
mod url;

pub use health::health_handler;
pub use url::{create_url_handler, missing_short_code_handler, redirect_handler};
