use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::{auth::VerifyError, error::ApiError, AppState};

#[derive(Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub request_id: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRedirect {
    pub url: String,
}

impl LoginRequest {
    /// Anything but a JSON object is malformed. Inside an object, `requestId`
    /// strings are taken as is, numbers and booleans by their JSON text, and
    /// null or absent as the empty identifier.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("unreadable login body: {}", e);
            ApiError::MalformedRequest
        })?;
        let fields = value.as_object().ok_or(ApiError::MalformedRequest)?;
        let request_id = match fields.get("requestId") {
            Some(Value::String(s)) => s.clone(),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
            Some(Value::Null) | None => String::new(),
            Some(_) => return Err(ApiError::MalformedRequest),
        };
        Ok(LoginRequest { request_id })
    }
}

impl From<VerifyError> for ApiError {
    fn from(e: VerifyError) -> Self {
        match e {
            VerifyError::Expired => ApiError::RequestExpired,
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginRedirect>, ApiError> {
    tracing::debug!(body = %String::from_utf8_lossy(&body), "login request");
    let request = LoginRequest::parse(&body)?;
    state.verifier.verify(&request.request_id).await?;

    Ok(Json(LoginRedirect {
        url: state.settings.login_redirect_url.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(body: &str) -> String {
        LoginRequest::parse(body.as_bytes()).unwrap().request_id
    }

    #[test]
    fn string_id() {
        assert_eq!(id(r#"{"requestId":"valid_request_id"}"#), "valid_request_id");
    }

    #[test]
    fn coerces_scalars() {
        assert_eq!(id(r#"{"requestId":42}"#), "42");
        assert_eq!(id(r#"{"requestId":true}"#), "true");
    }

    #[test]
    fn absent_or_null_is_empty() {
        assert_eq!(id("{}"), "");
        assert_eq!(id(r#"{"requestId":null}"#), "");
        assert_eq!(id(r#"{"request_id":"valid_request_id"}"#), "");
    }

    #[test]
    fn malformed() {
        for body in ["", "not json", "[]", r#""valid_request_id""#, r#"{"requestId":{}}"#] {
            assert!(
                matches!(
                    LoginRequest::parse(body.as_bytes()),
                    Err(ApiError::MalformedRequest)
                ),
                "{body:?}"
            );
        }
    }
}
