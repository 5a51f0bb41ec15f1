use std::fmt;

// Domain-level errors for the slip verification flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlipError {
    MethodNotAllowed,
    MissingQr,
    // Anything else: unreadable body, malformed JSON, verifier failure.
    Internal(String),
}

impl fmt::Display for SlipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlipError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            SlipError::MissingQr => write!(f, "QR data is required in the 'qr' field."),
            SlipError::Internal(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SlipError {}
