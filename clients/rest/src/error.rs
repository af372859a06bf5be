use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use database::error::PersonError;
use serde::Serialize;
use thiserror::Error;

/// Every way a request can fail, the `ResponseError` impl decides what the caller sees
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Person(#[from] PersonError),

    #[error("not found")]
    NotFound,

    #[error("malformatted body")]
    MalformedBody(String),

    #[error("unknown endpoint")]
    UnknownEndpoint,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // Malformed ids are matched ahead of schema failures
            ApiError::Person(PersonError::InvalidIdentifierFormat(_)) => StatusCode::BAD_REQUEST,
            ApiError::Person(PersonError::ValidationFailure(_)) => StatusCode::BAD_REQUEST,
            ApiError::Person(PersonError::MissingField(_) | PersonError::DuplicateName) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Person(
                PersonError::Storage(_)
                | PersonError::DatabaseTimeout
                | PersonError::DatabaseUnavailable,
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            ApiError::NotFound => HttpResponse::build(status).finish(),
            ApiError::MalformedBody(detail) => {
                log::debug!("Rejected request body: {}", detail);

                HttpResponse::build(status).json(ErrorBody::new(self))
            }
            _ if status.is_server_error() => {
                log::error!("Unhandled error: {}", self);

                HttpResponse::build(status).json(ErrorBody::new("internal server error"))
            }
            _ => HttpResponse::build(status).json(ErrorBody::new(self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use database::error::Field;
    use rstest::rstest;

    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, String) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();

        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[rstest]
    #[case(PersonError::MissingField(Field::Name), StatusCode::BAD_REQUEST)]
    #[case(PersonError::MissingField(Field::Number), StatusCode::BAD_REQUEST)]
    #[case(PersonError::DuplicateName, StatusCode::BAD_REQUEST)]
    #[case(PersonError::InvalidIdentifierFormat("x".into()), StatusCode::BAD_REQUEST)]
    #[case(PersonError::ValidationFailure(vec!["a".into()]), StatusCode::BAD_REQUEST)]
    #[case(PersonError::Storage("disk".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(PersonError::DatabaseTimeout, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(PersonError::DatabaseUnavailable, StatusCode::INTERNAL_SERVER_ERROR)]
    fn person_errors_map_to_status(#[case] err: PersonError, #[case] status: StatusCode) {
        assert_eq!(ApiError::from(err).status_code(), status);
    }

    #[actix_web::test]
    async fn malformed_id_body() {
        let (status, body) = body_of(ApiError::from(PersonError::InvalidIdentifierFormat(
            "123".to_string(),
        )))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"malformatted id"}"#);
    }

    #[actix_web::test]
    async fn validation_messages_are_joined() {
        let (status, body) = body_of(ApiError::from(PersonError::ValidationFailure(vec![
            "name: too short".to_string(),
            "number: too short".to_string(),
        ])))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"name: too short, number: too short"}"#);
    }

    #[actix_web::test]
    async fn not_found_has_empty_body() {
        let (status, body) = body_of(ApiError::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn server_errors_hide_details() {
        let (status, body) =
            body_of(ApiError::from(PersonError::Storage("password leaked".into()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":"internal server error"}"#);
    }
}
