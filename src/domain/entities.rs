use serde_json::Value;

// Result of checking a slip against the verification backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    // No automated check was made; a human reviews the slip.
    PendingManualVerification,
}

impl VerificationOutcome {
    // Wire status string reported to callers.
    pub fn status(&self) -> &'static str {
        match self {
            VerificationOutcome::PendingManualVerification => "ok_pending_manual_verification",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::PendingManualVerification => {
                "Successfully received QR data. Please verify manually."
            }
        }
    }
}

// A slip that passed validation, paired with the verifier's answer.
#[derive(Clone, Debug, PartialEq)]
pub struct VerifiedSlip {
    pub qr: Value,
    pub outcome: VerificationOutcome,
}

// Loose truthiness: null, false, numeric zero, and "" are falsy.
// Objects and arrays count as truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
