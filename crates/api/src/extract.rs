//! Extractors whose rejections use the [`AppError`] JSON body.
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies and, for
//! JSON, a mix of 400/415/422 statuses. These wrappers route every rejection
//! through [`AppError::BadRequest`].

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
