use async_trait::async_trait;
use serde_json::Value;

use crate::domain::entities::VerificationOutcome;

// Port for checking a slip's QR payload against a bank-side service.
#[async_trait]
pub trait SlipVerifier: Send + Sync {
    async fn verify(&self, qr: &Value) -> Result<VerificationOutcome, String>;
}

#[async_trait]
impl<T> SlipVerifier for std::sync::Arc<T>
where
    T: SlipVerifier + ?Sized,
{
    async fn verify(&self, qr: &Value) -> Result<VerificationOutcome, String> {
        (**self).verify(qr).await
    }
}
