//! Request extractors whose rejections answer with the usual JSON error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// JSON body. An unreadable or mistyped payload becomes [`AppError::BadRequest`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameters. A segment that does not parse becomes [`AppError::BadRequest`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
