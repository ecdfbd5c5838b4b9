use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{msg}: {detail}")]
pub struct RouteError {
    pub status: StatusCode,
    pub msg: &'static str,
    pub detail: String,
}
impl RouteError {
    pub fn not_found<T: Into<String>>(detail: T) -> Self {
        Self { status: StatusCode::NOT_FOUND, msg: "not found", detail: detail.into() }
    }
}
impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        let Self { status, msg, detail } = self;
        (status, Json(ErrorResponse { msg: msg.to_string(), detail })).into_response()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{msg}: {detail}")]
pub struct ErrorResponse {
    pub msg: String,
    pub detail: String,
}
