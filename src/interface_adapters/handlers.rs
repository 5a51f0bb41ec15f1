use crate::domain::errors::SlipError;
use crate::interface_adapters::protocol::{ErrorResponse, VerifySlipResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::verify_slip::VerifySlipUseCase;
use axum::{
    Json,
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
};
use serde_json::Value;
use tracing::{debug, error};

// Handler for slip verification; mounted for every path.
pub async fn verify_slip(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<VerifySlipResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Reject other verbs before touching the body.
    if request.method() != Method::POST {
        return Err(map_slip_error(SlipError::MethodNotAllowed));
    }

    let body = read_json_body(request.into_body(), state.max_body_bytes)
        .await
        .map_err(map_slip_error)?;

    let use_case = VerifySlipUseCase {
        verifier: state.verifier.clone(),
    };

    let slip = use_case.execute(body).await.map_err(map_slip_error)?;
    debug!(status = slip.outcome.status(), "slip received");

    Ok(Json(VerifySlipResponse::from(slip)))
}

// Buffer the body up to `limit` bytes and parse it as arbitrary JSON.
// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
async fn read_json_body(body: Body, limit: usize) -> Result<Value, SlipError> {
    let bytes = axum::body::to_bytes(body, limit)
        .await
        .map_err(|err| SlipError::Internal(err.to_string()))?;
    let text = String::from_utf8_lossy(&bytes);

    serde_json::from_str(&text).map_err(|err| SlipError::Internal(err.to_string()))
}

// Helper to build a JSON error response.
fn error_response(
    status: StatusCode,
    message: &str,
    details: Option<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            details,
        }),
    )
}

fn map_slip_error(err: SlipError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        SlipError::MethodNotAllowed => {
            error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", None)
        }
        SlipError::MissingQr => error_response(
            StatusCode::BAD_REQUEST,
            "QR data is required in the 'qr' field.",
            None,
        ),
        SlipError::Internal(message) => {
            error!(error = %message, "critical error in verify-slip handler");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                Some(message),
            )
        }
    }
}
