use axum::http::StatusCode;
use axum_core::response::{IntoResponse as AxumCoreIntoResponse, Response};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum SignerServerError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
    #[error("invalid signing request")]
    InvalidSigningRequest,
}

/// Trait implementation to convert this error into an axum http response
impl AxumCoreIntoResponse for SignerServerError {
    fn into_response(self) -> Response {
        match self {
            // Deliberately bodiless so callers cannot distinguish an
            // invalid identifier from a malformed payload.
            SignerServerError::InvalidSigningRequest => StatusCode::BAD_REQUEST.into_response(),
            SignerServerError::Unexpected(report) => {
                error!("unexpected signing failure: {report:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something wrong happened.",
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_signing_request_returns_400() {
        let error = SignerServerError::InvalidSigningRequest;
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unexpected_error_returns_500() {
        let error = SignerServerError::Unexpected(anyhow::anyhow!("backend down"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
