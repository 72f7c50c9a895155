use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateUrlResponse {
    pub short_url: String,
}

/// Wire format of a create request; the response uses the same format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// The raw body is the URL, the response is the bare short URL.
    PlainText,
    /// `{"url": ...}` in, `{"short_url": ...}` out.
    Json,
}

impl BodyFormat {
    /// Picks the format from the request `Content-Type`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let is_json = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"));

        if is_json {
            BodyFormat::Json
        } else {
            BodyFormat::PlainText
        }
    }
}
