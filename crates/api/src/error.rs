use std::any::Any;

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::Full;
use salesdesk_core::error::CoreError;
use serde_json::json;

/// What a handler can fail with.
///
/// Wraps [`CoreError`] for domain errors and adds the store-call failure
/// surface. Implements [`IntoResponse`] to render the uniform response
/// envelope: every error travels as HTTP 200 with `success: false`, a
/// human-readable message, and `data: null`. Clients read the envelope,
/// never the status line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `salesdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failed store call, straight from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Anything else that should not reach the client verbatim.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Shorthand for handler and service return types.
pub type AppResult<T> = Result<T, AppError>;

/// Sanitized message for failures whose detail must not leave the server.
const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // --- Domain errors ---
            AppError::Core(core) => match core {
                CoreError::Persistence(detail) => {
                    tracing::error!(error = %detail, "Persistence failure");
                    INTERNAL_MESSAGE.to_string()
                }
                // Every other domain variant renders its own text.
                other => other.to_string(),
            },

            // --- Store-call failures ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Everything else ---
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error");
                INTERNAL_MESSAGE.to_string()
            }
        };

        let body = json!({
            "success": false,
            "message": message,
            "data": null,
        });

        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an envelope message.
///
/// - Unique violations (code 23505, constraint starting `uq_`) become
///   friendly duplicate messages.
/// - Foreign-key violations (code 23503) become a reference message.
/// - Everything else is logged and sanitized.
fn classify_sqlx_error(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::RowNotFound => "The requested record was not found".to_string(),
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.code().as_deref() {
                Some("23505") if constraint.starts_with("uq_") => match constraint {
                    "uq_products_name" => "A product with this name already exists".to_string(),
                    "uq_products_code" => "A product with this code already exists".to_string(),
                    "uq_salespersons_code" => {
                        "A salesperson with this code already exists".to_string()
                    }
                    "uq_sale_details_sale_product" => {
                        "A sale cannot list the same product twice".to_string()
                    }
                    other => format!("Duplicate value violates unique constraint: {other}"),
                },
                Some("23503") => "A referenced record does not exist".to_string(),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    INTERNAL_MESSAGE.to_string()
                }
            }
        }
        other => {
            tracing::error!(error = %other, "Database error");
            INTERNAL_MESSAGE.to_string()
        }
    }
}

/// Envelope body served when a handler panics. Pre-rendered so the
/// last-resort path cannot fail.
const PANIC_BODY: &str = r#"{"success":false,"message":"An unexpected error occurred","data":null}"#;

/// Responder for `CatchPanicLayer::custom`: logs the panic payload and
/// serves the uniform failure envelope, leaking nothing.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let detail = if let Some(text) = err.downcast_ref::<String>() {
        text.clone()
    } else if let Some(text) = err.downcast_ref::<&str>() {
        (*text).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(error = %detail, "Request handler panicked");

    let mut response =
        axum::http::Response::new(Full::new(Bytes::from_static(PANIC_BODY.as_bytes())));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
