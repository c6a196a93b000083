// src/mc/scalar.rs
//! Sequential Monte Carlo estimator
//!
//! # Algorithm
//!
//! With one generator seeded from the request and `norm = e^(-rT)/N`:
//! ```text
//! C ≈ Σᵢ norm * max(S₀ Yᵢ - K, 0),   Yᵢ ~ LogNormal((r - σ²/2)T, σ²T)
//! ```
//! Accumulation is strictly in draw order, so a fixed seed gives a
//! bit-identical result.

use crate::error::{validation::validate_estimate, PricingResult};
use crate::mc::config::PricingRequest;
use crate::mc::payoffs::discounted_contribution;
use crate::mc::pricer::Pricer;
use crate::rng::{LogNormalParams, RngFactory};
use rand_distr::Distribution;
use tracing::{debug, warn};

/// Single-stream reference kernel
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarPricer;

impl Pricer for ScalarPricer {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn price(&self, req: &PricingRequest) -> PricingResult<f64> {
        req.validate().map_err(|e| {
            warn!(kernel = self.name(), error = %e, "rejected pricing request");
            e
        })?;
        debug!(
            kernel = self.name(),
            trajectories = req.trajectories,
            seed = req.seed,
            "pricing European call"
        );

        let dist = LogNormalParams::risk_neutral(req.sigma, req.r, req.t).sampler()?;
        let mut rng = RngFactory::new(req.seed).create_std_rng(0);
        let norm = req.discount_normalization();

        let mut ct = 0.0;
        for _ in 0..req.trajectories {
            let y = dist.sample(&mut rng);
            ct += discounted_contribution(norm, req.s0, y, req.k);
        }

        validate_estimate(self.name(), ct)?;
        Ok(ct)
    }
}
