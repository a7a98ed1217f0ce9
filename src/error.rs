use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Failures of a single `/convert` request, tagged by the stage that failed.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("completion service error: {0:#}")]
    ExternalService(anyhow::Error),
    #[error("malformed completion reply {reply:?}: expected 4 comma-separated values, found {found}")]
    Parse { reply: String, found: usize },
    #[error("persistence error: {0:#}")]
    Persistence(anyhow::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ExternalService(_) => "external_service",
            AppError::Parse { .. } => "parse",
            AppError::Persistence(_) => "persistence",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            AppError::Parse { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Persistence(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: "Prediction failed".to_string(),
            error: self.kind().to_string(),
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_map_to_distinct_statuses() {
        let errors = [
            AppError::ExternalService(anyhow::anyhow!("timeout")),
            AppError::Parse { reply: "n/a".to_string(), found: 1 },
            AppError::Persistence(anyhow::anyhow!("connection refused")),
        ];

        let statuses: Vec<StatusCode> = errors.iter().map(|e| e.status_code()).collect();
        assert_eq!(
            statuses,
            vec![
                StatusCode::BAD_GATEWAY,
                StatusCode::UNPROCESSABLE_ENTITY,
                StatusCode::SERVICE_UNAVAILABLE
            ]
        );

        let kinds: Vec<&str> = errors.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["external_service", "parse", "persistence"]);
    }

    #[test]
    fn test_parse_error_message_includes_reply() {
        let err = AppError::Parse {
            reply: "unable to compute".to_string(),
            found: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("unable to compute"));
        assert!(msg.contains("found 1"));
    }
}
