use crate::error::{AppError, Result};
use crate::model::{BodyFormat, CreateUrlRequest, CreateUrlResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, info};

/// Shortens the URL carried in the request body.
///
/// A JSON request (`Content-Type: application/json`) gets a JSON response;
/// any other request is treated as a raw URL and answered in plain text.
pub async fn create_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    let format = BodyFormat::from_headers(&headers);
    let original_url = parse_original_url(format, &body)?;

    let code = state.store().save(original_url)?;
    let short_url = code.to_url(state.base_url());
    info!(code = %code, "created short url");

    let response = match format {
        BodyFormat::Json => {
            (StatusCode::CREATED, Json(CreateUrlResponse { short_url })).into_response()
        }
        BodyFormat::PlainText => (StatusCode::CREATED, short_url).into_response(),
    };

    Ok(response)
}

/// Redirects to the URL stored under `short_code`.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let original_url = state.store().get(&short_code)?;

    let location = HeaderValue::from_bytes(original_url.as_bytes()).map_err(|e| {
        AppError::Internal(format!("stored url for {short_code} is not a valid header: {e}"))
    })?;
    debug!(code = %short_code, url = %original_url, "redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response())
}

pub async fn missing_short_code_handler() -> AppError {
    AppError::MissingShortCode
}

fn parse_original_url(format: BodyFormat, body: &[u8]) -> Result<String> {
    let raw = match format {
        BodyFormat::Json => {
            serde_json::from_slice::<CreateUrlRequest>(body)
                .map_err(|e| AppError::MalformedBody(e.to_string()))?
                .url
        }
        BodyFormat::PlainText => std::str::from_utf8(body)
            .map_err(|_| AppError::MalformedBody("body is not valid UTF-8".to_string()))?
            .to_owned(),
    };

    let url = raw.trim();
    if url.is_empty() {
        return Err(AppError::EmptyUrl);
    }
    // The URL ends up in a `Location` header, so it must be a legal header value.
    if HeaderValue::from_bytes(url.as_bytes()).is_err() {
        return Err(AppError::MalformedBody(
            "url contains control characters".to_string(),
        ));
    }

    Ok(url.to_owned())
}
