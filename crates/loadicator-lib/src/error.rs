use thiserror::Error;

/// Convenient result alias for the loadicator library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Queried draft lies outside the hydrostatic table.
    #[error("draft {draft:.3} m is outside valid range [{min:.3} m, {max:.3} m]")]
    OutOfRangeDraft { draft: f64, min: f64, max: f64 },

    /// Queried displacement lies outside a KN curve (or the span shared by two
    /// bracketing curves).
    #[error("displacement {displacement:.1} t is outside valid range [{min:.1} t, {max:.1} t]")]
    OutOfRangeDisplacement {
        displacement: f64,
        min: f64,
        max: f64,
    },

    /// Queried heel angle is negative or beyond the highest stored cross-curve.
    #[error("heel angle {angle:.2}° is outside valid range [0°, {max:.2}°]")]
    OutOfRangeAngle { angle: f64, max: f64 },

    /// A hydrostatic column was never loaded.
    #[error("hydrostatic property {property} is not available in the loaded table")]
    MissingProperty { property: String },

    /// Fewer points than an interpolation bracket needs.
    #[error("insufficient data for {what}: need at least 2 points, found {found}")]
    InsufficientData { what: String, found: usize },

    /// Raised when hydrostatic rows fail validation.
    #[error("invalid hydrostatic data: {message}")]
    HydrostaticDataValidation { message: String },

    /// Raised when cross-curve (KN) data fails validation.
    #[error("invalid KN cross-curve data: {message}")]
    KnDataValidation { message: String },

    /// Raised when a calculation request carries unusable input values.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// No suitable project directories could be resolved for vessel data.
    #[error("failed to resolve a data directory; pass --data-dir or set LOADICATOR_DATA_DIR")]
    DataDirUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// True for lookups that failed only because the query fell outside tabulated data.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::OutOfRangeDraft { .. }
                | Error::OutOfRangeDisplacement { .. }
                | Error::OutOfRangeAngle { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_report_offending_value_and_bounds() {
        let err = Error::OutOfRangeDraft {
            draft: 14.5,
            min: 2.0,
            max: 13.02,
        };
        assert_eq!(
            err.to_string(),
            "draft 14.500 m is outside valid range [2.000 m, 13.020 m]"
        );
        assert!(err.is_range_error());
    }

    #[test]
    fn missing_property_is_not_a_range_error() {
        let err = Error::MissingProperty {
            property: "MTC".to_string(),
        };
        assert!(!err.is_range_error());
        assert!(err.to_string().contains("MTC"));
    }
}
