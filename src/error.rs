// src/error.rs
use thiserror::Error;

/// Error types for the bs-lanes pricing kernels and harness
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A pricing input is outside the domain the kernels accept
    #[error("Invalid argument '{parameter}' = {value}: {constraint}")]
    InvalidArgument {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// The estimate overflowed even though every input was in range
    #[error("Numerical instability in {method}: {reason}")]
    NumericalInstability { method: String, reason: String },

    /// Invalid harness configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },
}

/// Result type alias for bs-lanes operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricingError::InvalidArgument {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidArgument {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate the trajectory count. Zero would make the discount
    /// normalization `exp(-rT)/N` degenerate.
    pub fn validate_trajectories(trajectories: usize) -> PricingResult<()> {
        if trajectories == 0 {
            Err(PricingError::InvalidArgument {
                parameter: "trajectories".to_string(),
                value: 0.0,
                constraint: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that the trajectory count fills whole lane batches
    pub fn validate_lane_multiple(trajectories: usize, lanes: usize) -> PricingResult<()> {
        if trajectories % lanes != 0 {
            Err(PricingError::InvalidArgument {
                parameter: "trajectories".to_string(),
                value: trajectories as f64,
                constraint: format!("must be a multiple of the lane width ({})", lanes),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a sampling interval `[low, high)`; its width must also be finite
    pub fn validate_range_order(field: &str, low: f64, high: f64) -> PricingResult<()> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            Err(PricingError::InvalidConfiguration {
                field: field.to_string(),
                reason: format!(
                    "range [{}, {}] must be finite with low < high and a finite width",
                    low, high
                ),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a finished estimate
    pub fn validate_estimate(method: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::NumericalInstability {
                method: method.to_string(),
                reason: format!("Price estimate is not finite: {}", value),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a count that must be at least one
    pub fn validate_count(field: &str, count: usize) -> PricingResult<()> {
        if count == 0 {
            Err(PricingError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
