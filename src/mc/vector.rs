// src/mc/vector.rs
//! Lane-parallel Monte Carlo estimator
//!
//! # Lane Layout
//!
//! The sequential random walk is split into `LANE_WIDTH` independent streams.
//! Lane `i` owns a generator seeded with `seed + i`, its own sampler, and its
//! own partial sum:
//! ```text
//! batch b:  Y[i] = sampler[i](rng[i])             i = 0..8
//!           acc[i] += norm * max(S₀ Y[i] - K, 0)
//! result:   acc[0] + acc[1] + ... + acc[7]
//! ```
//! Draws and payoffs are two separate passes over an aligned 8-wide block so
//! the payoff/accumulate pass is a straight-line loop the compiler can turn
//! into vector instructions. Lanes never read each other's state, so the
//! result does not depend on how that loop is scheduled.
//!
//! With the default seed the lanes are seeded `0..8`. The estimate is
//! statistically equivalent to the scalar kernel but not numerically equal.

use crate::error::{
    validation::{validate_estimate, validate_lane_multiple},
    PricingResult,
};
use crate::mc::config::PricingRequest;
use crate::mc::payoffs::discounted_contribution;
use crate::mc::pricer::Pricer;
use crate::rng::{LogNormalParams, RngFactory};
use rand::rngs::StdRng;
use rand_distr::{Distribution, LogNormal};
use tracing::{debug, trace, warn};

/// Number of independent streams advanced per batch
pub const LANE_WIDTH: usize = 8;

/// One value per lane, aligned to a full 512-bit vector
#[repr(C, align(64))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LaneBlock(pub [f64; LANE_WIDTH]);

impl LaneBlock {
    /// Sum the lanes in fixed order 0..LANE_WIDTH
    pub fn reduce_add(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Per-lane generator and sampler state for one pricing call
struct LaneStreams {
    rngs: [StdRng; LANE_WIDTH],
    samplers: [LogNormal<f64>; LANE_WIDTH],
}

impl LaneStreams {
    fn new(factory: RngFactory, dist: LogNormal<f64>) -> Self {
        LaneStreams {
            rngs: std::array::from_fn(|lane| factory.create_std_rng(lane as u64)),
            samplers: [dist; LANE_WIDTH],
        }
    }

    #[inline(always)]
    fn draw(&mut self, out: &mut LaneBlock) {
        for ((y, rng), sampler) in out
            .0
            .iter_mut()
            .zip(self.rngs.iter_mut())
            .zip(self.samplers.iter())
        {
            *y = sampler.sample(rng);
        }
    }
}

/// Multi-stream kernel; requires `trajectories % LANE_WIDTH == 0`
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorPricer;

impl Pricer for VectorPricer {
    fn name(&self) -> &'static str {
        "vector"
    }

    fn price(&self, req: &PricingRequest) -> PricingResult<f64> {
        req.validate()
            .and_then(|_| validate_lane_multiple(req.trajectories, LANE_WIDTH))
            .map_err(|e| {
                warn!(kernel = self.name(), error = %e, "rejected pricing request");
                e
            })?;
        debug!(
            kernel = self.name(),
            trajectories = req.trajectories,
            seed = req.seed,
            lanes = LANE_WIDTH,
            "pricing European call"
        );

        let dist = LogNormalParams::risk_neutral(req.sigma, req.r, req.t).sampler()?;
        let mut streams = LaneStreams::new(RngFactory::new(req.seed), dist);
        let norm = req.discount_normalization();
        let (s0, k) = (req.s0, req.k);

        let mut cts = LaneBlock::default();
        let mut ys = LaneBlock::default();

        for _ in 0..req.trajectories / LANE_WIDTH {
            streams.draw(&mut ys);

            for (ct, &y) in cts.0.iter_mut().zip(ys.0.iter()) {
                *ct += discounted_contribution(norm, s0, y, k);
            }
        }

        trace!(partials = ?cts.0, "lane partial sums");
        let c = cts.reduce_add();
        validate_estimate(self.name(), c)?;
        Ok(c)
    }
}
