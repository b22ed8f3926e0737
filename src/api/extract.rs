//! Request body extraction with API-formatted rejections.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON request body.
///
/// Behaves like [`axum::Json`], except that a missing content type, malformed
/// JSON or a missing/mistyped field rejects with a 400 [`AppError`] instead of
/// axum's plain-text 415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
