use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_application::{AppError, RepositoryError};
use catalog_core::DomainError;

pub fn app_error_to_response(err: AppError) -> axum::response::Response {
    match err {
        AppError::Domain(DomainError::Validation(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        AppError::Domain(DomainError::InvalidId(msg)) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        AppError::Repository(RepositoryError::Conflict(msg)) => {
            json_error(StatusCode::CONFLICT, "conflict", msg)
        }
        AppError::Repository(RepositoryError::Storage(msg)) => {
            tracing::error!(error = %msg, "store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", msg)
        }
        e @ (AppError::HandlerNotFound(_) | AppError::AlreadyRegistered(_) | AppError::TypeMismatch(_)) => {
            tracing::error!(error = %e, "dispatch failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "dispatch_error", e.to_string())
        }
    }
}

pub fn json_rejection(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "product not found")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse a path segment as a raw product id.
///
/// Range checks (`id > 0`) happen in the handlers so every caller gets the same
/// error.
pub fn parse_id(raw: &str) -> Result<i64, axum::response::Response> {
    raw.trim().parse::<i64>().map_err(|_| {
        json_error(
            StatusCode::BAD_REQUEST,
            "invalid_id",
            format!("'{raw}' is not a valid product id"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let res = app_error_to_response(DomainError::validation("name is required").into());
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = app_error_to_response(DomainError::invalid_id("id must be positive").into());
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_map_to_server_errors() {
        let res = app_error_to_response(RepositoryError::Storage("connection reset".into()).into());
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = app_error_to_response(RepositoryError::Conflict("duplicate key".into()).into());
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn missing_handler_is_a_server_error() {
        let res = app_error_to_response(AppError::HandlerNotFound("GetProducts"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parse_id_rejects_non_integers() {
        assert_eq!(parse_id("42").ok(), Some(42));
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
    }
}
