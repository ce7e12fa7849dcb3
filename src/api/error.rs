use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

use crate::services::RosterError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error_code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error_code: code.to_string(),
            message: message.to_string(),
        }
    }
}

pub type ApiFailure = (StatusCode, Json<ApiError>);

pub fn failure(status: StatusCode, code: &str, message: &str) -> ApiFailure {
    (status, Json(ApiError::new(code, message)))
}

pub fn feedback_unavailable() -> ApiFailure {
    failure(
        StatusCode::SERVICE_UNAVAILABLE,
        "FEEDBACK_UNAVAILABLE",
        "Não foi possível gerar o feedback no momento. Tente novamente mais tarde.",
    )
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::StudentNotFound(_) => ApiError::new("STUDENT_NOT_FOUND", &err.to_string()),
        }
    }
}

pub fn roster_failure(err: RosterError) -> ApiFailure {
    let status = match err {
        RosterError::StudentNotFound(_) => StatusCode::NOT_FOUND,
    };
    (status, Json(ApiError::from(err)))
}
