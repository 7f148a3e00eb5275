// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorDetail;

#[derive(Debug, Error)]
pub enum AppError {
    /// The upstream call failed before a usable JSON body came back.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidRequest(#[from] JsonRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = match &self {
            AppError::InvalidRequest(rejection) => rejection.body_text(),
            other => other.to_string(),
        };
        (self.status_code(), Json(ErrorDetail { detail })).into_response()
    }
}
