//! HTTP gateway for the snip URL shortener.
//!
//! Exposes `POST /` to shorten a URL and `GET /{short_code}` to follow a
//! short link, on top of any [`UrlStore`](snip_core::UrlStore).

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use config::GatewaySettings;
pub use error::AppError;
pub use state::AppState;
