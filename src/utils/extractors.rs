use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json` that answers malformed bodies with the service's own 400 envelope
/// instead of axum's plain-text 415/422 rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `Path` whose rejections become `AppError::InvalidId`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
