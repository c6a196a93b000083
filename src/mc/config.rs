// src/mc/config.rs
use crate::error::{validation::*, PricingError, PricingResult};
use crate::rng::{LogNormalParams, DEFAULT_SEED};

/// Inputs of a single pricing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest {
    pub s0: f64,
    pub sigma: f64,
    pub r: f64,
    pub t: f64,
    pub k: f64,
    pub trajectories: usize,
    pub seed: u64,
}

impl PricingRequest {
    pub fn new(s0: f64, sigma: f64, r: f64, t: f64, k: f64, trajectories: usize) -> Self {
        PricingRequest {
            s0,
            sigma,
            r,
            t,
            k,
            trajectories,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        PricingRequest { seed, ..self }
    }

    /// Validate the request
    ///
    /// `r` may be zero or negative; every other price input must be
    /// strictly positive, and at least one trajectory is required. The
    /// derived discount factor and log-normal parameters must stay finite
    /// too, which bounds `rT` and `σ²T`.
    pub fn validate(&self) -> PricingResult<()> {
        validate_trajectories(self.trajectories)?;
        validate_positive("s0", self.s0)?;
        validate_positive("sigma", self.sigma)?;
        validate_finite("r", self.r)?;
        validate_positive("t", self.t)?;
        validate_positive("k", self.k)?;

        let norm = self.discount_normalization();
        if !norm.is_finite() || norm <= 0.0 {
            return Err(PricingError::InvalidArgument {
                parameter: "r".to_string(),
                value: self.r,
                constraint: format!(
                    "exp(-r*t)/N must be finite and positive (t = {}, got {})",
                    self.t, norm
                ),
            });
        }

        let params = LogNormalParams::risk_neutral(self.sigma, self.r, self.t);
        validate_finite("location", params.location)?;
        validate_finite("log_variance", params.log_variance)?;
        Ok(())
    }

    /// `exp(-rT)/N`, applied to every trajectory's payoff
    pub fn discount_normalization(&self) -> f64 {
        (-self.r * self.t).exp() / self.trajectories as f64
    }
}

impl Default for PricingRequest {
    fn default() -> Self {
        PricingRequest {
            s0: 100.0,
            sigma: 0.2,
            r: 0.05,
            t: 1.0,
            k: 100.0,
            trajectories: 100_000,
            seed: DEFAULT_SEED,
        }
    }
}
