use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Every failure a request can end in. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Item not found")]
    NotFound,

    /// Duplicate identifier on create.
    #[error("Item ID already exists")]
    Conflict,

    #[error("Not Found")]
    RouteNotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Unprocessable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Conflict => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Conflict.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            AppError::Unprocessable("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn detail_messages() {
        assert_eq!(AppError::NotFound.to_string(), "Item not found");
        assert_eq!(AppError::Conflict.to_string(), "Item ID already exists");
        assert_eq!(AppError::Unprocessable("oops".into()).to_string(), "oops");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = AppError::Conflict.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
