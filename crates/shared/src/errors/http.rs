use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidCredentials => {
                HttpError::Unauthorized("Invalid credentials".to_string())
            }

            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Conflict(msg) => HttpError::Conflict(msg),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                RepositoryError::Unavailable(msg) => HttpError::ServiceUnavailable(msg),
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Jwt(err) => HttpError::Unauthorized(format!("JWT error: {err}")),

            ServiceError::Upstream(err) => HttpError::ServiceUnavailable(err),

            ServiceError::Internal(msg) | ServiceError::Custom(msg) => HttpError::Internal(msg),

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal authentication error".into()),

            ServiceError::TokenExpired => HttpError::Unauthorized("Token expired".into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(msg));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_maps_to_503() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Unavailable(
            "pool timed out".into(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Conflict(
            "quantity check failed".into(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = HttpError::from(ServiceError::Validation(vec!["items: empty".into()]));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
