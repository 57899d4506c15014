//! Saturation lookup errors.

use thiserror::Error;

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors a lookup can report. Both are client errors at the boundary;
/// nothing in the lookup path is fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// Pressure below the first table entry. The display text is the
    /// wire-level error message, so `min_mpa` must be the table minimum.
    #[error("Pressure out of range (minimum {min_mpa} MPa)")]
    BelowMinimum { min_mpa: f64 },

    /// NaN or infinite pressure reached the core.
    #[error("Non-finite pressure: {value}")]
    NonFinite { value: f64 },
}

/// Errors detected while validating a table at construction.
///
/// These are configuration errors and fatal at startup; they never occur
/// per-request because the table is immutable afterwards.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("Saturation table needs at least 2 points (got {len})")]
    TooFewPoints { len: usize },

    #[error("Saturation table pressures must be strictly increasing (violated at index {index})")]
    NotIncreasing { index: usize },

    #[error("Non-finite value in saturation table: {what}")]
    NonFinite { what: &'static str },

    #[error("Last table entry must be the critical point (equal liquid and vapor volumes)")]
    CriticalMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_minimum_display_is_wire_message() {
        let err = LookupError::BelowMinimum { min_mpa: 0.05 };
        assert_eq!(err.to_string(), "Pressure out of range (minimum 0.05 MPa)");
    }

    #[test]
    fn table_error_display() {
        let err = TableError::TooFewPoints { len: 1 };
        assert!(err.to_string().contains("at least 2"));

        let err = TableError::NotIncreasing { index: 3 };
        assert!(err.to_string().contains("index 3"));
    }
}
