// src/mc/pricer.rs
use crate::error::PricingResult;
use crate::mc::config::PricingRequest;
use crate::mc::scalar::ScalarPricer;
use crate::mc::vector::VectorPricer;

/// A Monte Carlo estimator of the discounted European call payoff
///
/// Implementations own all generator state for the duration of a call, so a
/// single pricer value can be shared freely across threads.
pub trait Pricer: Send + Sync {
    fn name(&self) -> &'static str;
    fn price(&self, req: &PricingRequest) -> PricingResult<f64>;
}

/// Kernel selector used by the harness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PricerKind {
    Scalar,
    Vector,
}

impl Pricer for PricerKind {
    fn name(&self) -> &'static str {
        match self {
            PricerKind::Scalar => ScalarPricer.name(),
            PricerKind::Vector => VectorPricer.name(),
        }
    }

    fn price(&self, req: &PricingRequest) -> PricingResult<f64> {
        match self {
            PricerKind::Scalar => ScalarPricer.price(req),
            PricerKind::Vector => VectorPricer.price(req),
        }
    }
}

/// Sequential estimate with the default seed
pub fn price_scalar(s0: f64, sigma: f64, r: f64, t: f64, k: f64, n: usize) -> PricingResult<f64> {
    ScalarPricer.price(&PricingRequest::new(s0, sigma, r, t, k, n))
}

/// Lane-parallel estimate with the default seed; `n` must be a multiple of 8
pub fn price_vector(s0: f64, sigma: f64, r: f64, t: f64, k: f64, n: usize) -> PricingResult<f64> {
    VectorPricer.price(&PricingRequest::new(s0, sigma, r, t, k, n))
}
