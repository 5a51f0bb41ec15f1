use serde_json::Value;

use crate::domain::entities::{VerifiedSlip, is_truthy};
use crate::domain::errors::SlipError;
use crate::domain::ports::SlipVerifier;

// Slip verification use case with an injected verifier.
pub struct VerifySlipUseCase<V> {
    pub verifier: V,
}

impl<V> VerifySlipUseCase<V>
where
    V: SlipVerifier,
{
    // Validate a parsed request body and hand the QR payload to the verifier.
    pub async fn execute(&self, body: Value) -> Result<VerifiedSlip, SlipError> {
        let qr = match body {
            Value::Object(mut fields) => fields.remove("qr"),
            // A null body cannot be indexed at all, unlike other non-object values.
            Value::Null => {
                return Err(SlipError::Internal(
                    "cannot read field 'qr' of a null body".to_string(),
                ));
            }
            _ => None,
        };

        let qr = match qr {
            Some(qr) if is_truthy(&qr) => qr,
            _ => return Err(SlipError::MissingQr),
        };

        let outcome = self
            .verifier
            .verify(&qr)
            .await
            .map_err(SlipError::Internal)?;

        Ok(VerifiedSlip { qr, outcome })
    }
}
