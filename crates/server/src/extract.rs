//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` whose rejections render as [`AppError::BadRequest`].
///
/// Malformed or mistyped bodies get the same `{success, message}` shape as
/// every other error instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
