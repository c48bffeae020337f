use thiserror::Error;

/// The engine fails fast on bad input and nowhere else. Every division
/// guards its denominator (the UVT is asserted positive up front) and
/// every statutory subtraction floors at zero, so any input that passes
/// validation produces a deterministic result.
#[derive(Debug, Error)]
pub enum RentaError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}

impl RentaError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RentaError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
