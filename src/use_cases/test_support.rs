use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::VerificationOutcome;
use crate::domain::ports::SlipVerifier;

// Verifier double that counts calls and can be told to fail.
#[derive(Clone, Default)]
pub(crate) struct RecordingVerifier {
    calls: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl RecordingVerifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            failure: Some(message.into()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SlipVerifier for RecordingVerifier {
    async fn verify(&self, _qr: &Value) -> Result<VerificationOutcome, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(VerificationOutcome::PendingManualVerification),
        }
    }
}
