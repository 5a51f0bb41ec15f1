use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::domain::entities::VerificationOutcome;
use crate::domain::ports::SlipVerifier;

// Application state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<dyn SlipVerifier>,
    // Upper bound on request body size, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(verifier: Arc<dyn SlipVerifier>, max_body_bytes: usize) -> Self {
        Self {
            verifier,
            max_body_bytes,
        }
    }
}

// Verifier adapter used until a bank integration exists: every slip goes to a human.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualReviewVerifier;

#[async_trait]
impl SlipVerifier for ManualReviewVerifier {
    async fn verify(&self, _qr: &Value) -> Result<VerificationOutcome, String> {
        Ok(VerificationOutcome::PendingManualVerification)
    }
}
