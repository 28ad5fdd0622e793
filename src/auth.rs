use axum::async_trait;

/// Identifier every `SentinelVerifier` accepts.
pub const VALID_REQUEST_ID: &str = "valid_request_id";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("request identifier is expired")]
    Expired,
}

/// Decides whether an authorization request identifier is still valid.
#[async_trait]
pub trait RequestVerifier: Send + Sync {
    async fn verify(&self, request_id: &str) -> Result<(), VerifyError>;
}

/// Accepts only `VALID_REQUEST_ID`. Stands in for a real authorization
/// server until one is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentinelVerifier;

#[async_trait]
impl RequestVerifier for SentinelVerifier {
    async fn verify(&self, request_id: &str) -> Result<(), VerifyError> {
        if request_id == VALID_REQUEST_ID {
            Ok(())
        } else {
            tracing::debug!(request_id, "rejected request id");
            Err(VerifyError::Expired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_sentinel() {
        assert_eq!(SentinelVerifier.verify("valid_request_id").await, Ok(()));
    }

    #[tokio::test]
    async fn rejects_everything_else() {
        for id in ["", "expired_id", "VALID_REQUEST_ID", " valid_request_id", "42"] {
            assert_eq!(
                SentinelVerifier.verify(id).await,
                Err(VerifyError::Expired),
                "{id:?}"
            );
        }
    }
}
