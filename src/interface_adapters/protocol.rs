use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::VerifiedSlip;

// Success payload for an accepted slip.
#[derive(Debug, Serialize)]
pub struct VerifySlipResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: ReceivedSlipData,
}

#[derive(Debug, Serialize)]
pub struct ReceivedSlipData {
    #[serde(rename = "receivedQr")]
    pub received_qr: Value,
}

impl From<VerifiedSlip> for VerifySlipResponse {
    fn from(slip: VerifiedSlip) -> Self {
        Self {
            status: slip.outcome.status(),
            message: slip.outcome.message(),
            data: ReceivedSlipData {
                received_qr: slip.qr,
            },
        }
    }
}

// Error envelope for JSON responses; `details` only appears on internal errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
