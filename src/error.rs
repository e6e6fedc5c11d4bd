use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PsychrometricError {
    /// A value lies outside the domain of a correlation
    /// (e.g. temperature outside the saturation-pressure fit).
    #[error("{quantity} {value} out of range [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid or non‑physical input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An iterative solver exhausted its iteration budget.
    #[error("{solver} did not converge within {iterations} iterations")]
    MaxIterations {
        solver: &'static str,
        iterations: u32,
    },

    /// Malformed configuration value (environment variable or `.env`).
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PsychrometricError>;

/// Ensure a value is a finite number (not NaN, not ±Infinity).
pub(crate) fn validate_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PsychrometricError::InvalidInput(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Ensure a value is finite and strictly positive.
pub(crate) fn validate_positive(name: &str, value: f64) -> Result<()> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(PsychrometricError::InvalidInput(format!(
            "{name} must be greater than zero, got {value}"
        )));
    }
    Ok(())
}
