use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::trace;

use crate::error::SignerServerError;
use crate::signing::{SignOutcome, SignerDispatch};

/// Ordered signing candidates shared by all in-flight requests.
#[derive(Clone)]
pub struct AppState {
    pub candidates: Arc<Vec<Arc<dyn SignerDispatch>>>,
}

impl AppState {
    pub fn new(candidates: Vec<Arc<dyn SignerDispatch>>) -> Self {
        Self {
            candidates: Arc::new(candidates),
        }
    }
}

/// Body schema for the sign route. Deserialization failures are
/// rejected by the `Json` extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct SigningRequestBody {
    pub data: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/upcheck",
            get(|| async move { (StatusCode::OK, "OK").into_response() }),
        )
        .route("/signer/sign/{identifier}", post(sign_for_identifier))
        .with_state(state)
}

pub async fn run(host: String, port: u16, candidates: Vec<Arc<dyn SignerDispatch>>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    axum::serve(listener, router(AppState::new(candidates))).await?;
    Ok(())
}

/// Tries each candidate in order until one signs or rejects.
///
/// Per request exactly one terminal effect occurs: a 200 carrying the
/// signature, a 400 on invalid input, a 404 once every candidate has
/// declined, or a 500 if a candidate fails unexpectedly.
async fn sign_for_identifier(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Json(body): Json<SigningRequestBody>,
) -> Result<Response, SignerServerError> {
    for candidate in state.candidates.iter() {
        match candidate.attempt_sign(&identifier, &body.data)? {
            SignOutcome::Signed(signature) => {
                return Ok((
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    signature,
                )
                    .into_response());
            }
            SignOutcome::InvalidInput => return Err(SignerServerError::InvalidSigningRequest),
            SignOutcome::NotApplicable => {
                trace!(%identifier, "unsuitable candidate, trying next");
            }
        }
    }
    Ok(StatusCode::NOT_FOUND.into_response())
}
