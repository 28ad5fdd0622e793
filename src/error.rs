use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request_id is expired")]
    RequestExpired,
    #[error("malformed login request")]
    MalformedRequest,
    #[error("Firebase configuration is not set")]
    ConfigurationMissing,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RequestExpired | ApiError::MalformedRequest => StatusCode::BAD_REQUEST,
            ApiError::ConfigurationMissing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!("{}, {}", status, self);

        let body = Json(json!({
            "statusCode": status.as_u16(),
            "statusMessage": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::RequestExpired.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MalformedRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::ConfigurationMissing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn expired_message() {
        assert_eq!(ApiError::RequestExpired.to_string(), "request_id is expired");
    }
}
