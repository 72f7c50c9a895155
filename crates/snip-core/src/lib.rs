//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the identifier type, the store contract and the
//! error taxonomy shared by the storage backend and the HTTP gateway.

pub mod error;
pub mod shortcode;
pub mod store;

pub use error::{GenerationError, Result, StoreError};
pub use shortcode::ShortCode;
pub use store::UrlStore;
