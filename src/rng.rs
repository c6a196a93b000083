// src/rng.rs
//! Random streams and the terminal-price sampler
//!
//! # Design Philosophy
//!
//! Each pricing call owns its generators outright:
//! 1. **Reproducibility**: same seed → same stream → bit-identical price
//! 2. **Lane independence**: every lane of the vector kernel gets its own
//!    generator, so no two lanes ever consume the same state
//! 3. **No globals**: nothing survives between calls, so concurrent calls
//!    need no locking
//!
//! # Terminal Price Factor
//!
//! Under the risk-neutral measure the terminal price is `S_T = S_0 * Y` with
//! ```text
//! ln Y ~ N((r - σ²/2)T, σ²T)
//! ```
//! so `E[Y] = e^{rT}`. `rand_distr::LogNormal` is parameterised by the
//! standard deviation of `ln Y`, i.e. `σ√T`.

use crate::error::{PricingError, PricingResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::LogNormal;

/// Seed used by the free pricing functions when none is injected
pub const DEFAULT_SEED: u64 = 0;

/// Stream factory for reproducible per-lane generators
#[derive(Debug, Clone, Copy)]
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        Self { base_seed }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Create the generator for a given stream (lane) index
    pub fn create_std_rng(&self, stream: u64) -> StdRng {
        StdRng::seed_from_u64(self.base_seed.wrapping_add(stream))
    }
}

/// Location and log-variance of the terminal price factor `Y`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalParams {
    pub location: f64,
    pub log_variance: f64,
}

impl LogNormalParams {
    pub fn risk_neutral(sigma: f64, r: f64, t: f64) -> Self {
        let sigma2 = sigma * sigma;
        Self {
            location: (r - sigma2 / 2.0) * t,
            log_variance: sigma2 * t,
        }
    }

    /// Build the sampler. Fails only for a non-finite or negative variance.
    pub fn sampler(&self) -> PricingResult<LogNormal<f64>> {
        LogNormal::new(self.location, self.log_variance.sqrt()).map_err(|e| {
            PricingError::InvalidArgument {
                parameter: "log_variance".to_string(),
                value: self.log_variance,
                constraint: e.to_string(),
            }
        })
    }
}
