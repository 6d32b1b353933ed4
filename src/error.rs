use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::models::LookupError;
use crate::utils::messages;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", messages::INVALID_FORMAT_API)]
    InvalidRsid,
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// 服务启动阶段的错误
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to load templates: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRsid => StatusCode::BAD_REQUEST,
            AppError::Lookup(LookupError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Lookup(LookupError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
