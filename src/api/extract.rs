use axum::extract::FromRequest;

use crate::api::error::ApiError;

/// JSON body extractor whose rejections use the `{error, message}` envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
