// Domain layer: slip verification outcomes, errors, and ports.

pub mod entities;
pub mod errors;
pub mod ports;

pub use entities::{VerificationOutcome, VerifiedSlip, is_truthy};
pub use errors::SlipError;
pub use ports::SlipVerifier;
