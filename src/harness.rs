// src/harness.rs
//! Benchmark harness
//!
//! Draws a book of random option parameter sets, prices every option with each
//! selected kernel in parallel across options, and records throughput and
//! accuracy against the closed-form price.

use crate::analytics::bs_analytic;
use crate::error::{validation::*, PricingError, PricingResult};
use crate::math_utils::Timer;
use crate::mc::config::PricingRequest;
use crate::mc::pricer::{Pricer, PricerKind};
use crate::rng::{RngFactory, DEFAULT_SEED};
use bitflags::bitflags;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{debug, info};

bitflags! {
    /// Kernels selected for a harness run
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KernelSet: u32 {
        const SCALAR = 1 << 0;
        const VECTOR = 1 << 1;
        const ALL = Self::SCALAR.bits() | Self::VECTOR.bits();
    }
}

impl KernelSet {
    /// Selected kernels in a fixed order: scalar first
    pub fn kinds(&self) -> Vec<PricerKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.contains(KernelSet::SCALAR) {
            kinds.push(PricerKind::Scalar);
        }
        if self.contains(KernelSet::VECTOR) {
            kinds.push(PricerKind::Vector);
        }
        kinds
    }

    /// Parse `"scalar"`, `"vector"`, `"all"` or a comma-separated list
    pub fn from_names(s: &str) -> PricingResult<Self> {
        let mut set = KernelSet::empty();
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            set |= match name.to_ascii_lowercase().as_str() {
                "scalar" => KernelSet::SCALAR,
                "vector" => KernelSet::VECTOR,
                "all" => KernelSet::ALL,
                other => {
                    return Err(PricingError::InvalidConfiguration {
                        field: "kernels".to_string(),
                        reason: format!("unknown kernel '{}'", other),
                    })
                }
            };
        }
        if set.is_empty() {
            return Err(PricingError::InvalidConfiguration {
                field: "kernels".to_string(),
                reason: "no kernel selected".to_string(),
            });
        }
        Ok(set)
    }
}

/// Half-open sampling interval `[low, high)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        UniformRange { low, high }
    }
}

/// Sampling ranges for each option input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRanges {
    pub s0: UniformRange,
    pub sigma: UniformRange,
    pub r: UniformRange,
    pub t: UniformRange,
    pub k: UniformRange,
}

impl ParamRanges {
    pub fn validate(&self) -> PricingResult<()> {
        validate_range_order("s0", self.s0.low, self.s0.high)?;
        validate_range_order("sigma", self.sigma.low, self.sigma.high)?;
        validate_range_order("r", self.r.low, self.r.high)?;
        validate_range_order("t", self.t.low, self.t.high)?;
        validate_range_order("k", self.k.low, self.k.high)?;

        // Every draw must be a valid pricing input.
        for (name, range) in [
            ("s0", self.s0),
            ("sigma", self.sigma),
            ("t", self.t),
            ("k", self.k),
        ] {
            if range.low <= 0.0 {
                return Err(PricingError::InvalidConfiguration {
                    field: name.to_string(),
                    reason: format!("lower bound {} must be positive", range.low),
                });
            }
        }
        Ok(())
    }
}

impl Default for ParamRanges {
    fn default() -> Self {
        ParamRanges {
            s0: UniformRange::new(50.0, 200.0),
            sigma: UniformRange::new(0.05, 0.2),
            r: UniformRange::new(0.01, 0.1),
            t: UniformRange::new(0.5, 2.0),
            k: UniformRange::new(50.0, 200.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    pub options: usize,
    pub trajectories: usize,
    pub repetitions: usize,
    pub seed: u64,
    pub ranges: ParamRanges,
    pub kernels: KernelSet,
}

impl HarnessConfig {
    pub fn validate(&self) -> PricingResult<()> {
        validate_count("options", self.options)?;
        validate_count("repetitions", self.repetitions)?;
        validate_trajectories(self.trajectories)?;
        if self.kernels.is_empty() {
            return Err(PricingError::InvalidConfiguration {
                field: "kernels".to_string(),
                reason: "no kernel selected".to_string(),
            });
        }
        self.ranges.validate()
    }

    /// Trajectories simulated per kernel, counted in `f64` so huge books
    /// cannot wrap
    pub fn total_trajectories(&self) -> f64 {
        self.options as f64 * self.trajectories as f64 * self.repetitions as f64
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            options: 100,
            trajectories: 100_000,
            repetitions: 1,
            seed: DEFAULT_SEED,
            ranges: ParamRanges::default(),
            kernels: KernelSet::ALL,
        }
    }
}

/// One generated option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionParams {
    pub s0: f64,
    pub sigma: f64,
    pub r: f64,
    pub t: f64,
    pub k: f64,
}

impl OptionParams {
    pub fn request(&self, trajectories: usize, seed: u64) -> PricingRequest {
        PricingRequest::new(self.s0, self.sigma, self.r, self.t, self.k, trajectories)
            .with_seed(seed)
    }

    pub fn analytic_price(&self) -> f64 {
        bs_analytic::bs_call_price(self.s0, self.k, self.r, self.sigma, self.t)
    }
}

/// Timing and accuracy summary for one kernel
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRun {
    pub kernel: &'static str,
    pub options: usize,
    pub trajectories: usize,
    pub repetitions: usize,
    pub time_ms: f64,
    pub throughput_traj_per_sec: f64,
    pub mean_price: f64,
    pub mean_abs_error: f64,
}

fn fill_column(rng: &mut StdRng, range: UniformRange, count: usize) -> Vec<f64> {
    let dist = Uniform::new(range.low, range.high);
    (0..count).map(|_| dist.sample(rng)).collect()
}

/// Draw `config.options` parameter sets from a single seeded stream,
/// one input column at a time.
pub fn generate_params(config: &HarnessConfig) -> PricingResult<Vec<OptionParams>> {
    validate_count("options", config.options)?;
    config.ranges.validate()?;

    let mut rng = RngFactory::new(config.seed).create_std_rng(0);
    let n = config.options;
    let ranges = &config.ranges;

    let s0s = fill_column(&mut rng, ranges.s0, n);
    let sigmas = fill_column(&mut rng, ranges.sigma, n);
    let rs = fill_column(&mut rng, ranges.r, n);
    let ts = fill_column(&mut rng, ranges.t, n);
    let ks = fill_column(&mut rng, ranges.k, n);

    debug!(options = n, seed = config.seed, "generated option parameters");

    Ok((0..n)
        .map(|i| OptionParams {
            s0: s0s[i],
            sigma: sigmas[i],
            r: rs[i],
            t: ts[i],
            k: ks[i],
        })
        .collect())
}

/// Price every option in parallel; results keep the input order
pub fn price_all<P: Pricer + ?Sized>(
    pricer: &P,
    params: &[OptionParams],
    trajectories: usize,
    seed: u64,
) -> PricingResult<Vec<f64>> {
    params
        .par_iter()
        .map(|p| pricer.price(&p.request(trajectories, seed)))
        .collect()
}

/// Run every selected kernel over the same generated book
pub fn run_benchmark(config: &HarnessConfig) -> PricingResult<Vec<KernelRun>> {
    config.validate()?;
    let params = generate_params(config)?;
    let analytic: Vec<f64> = params.iter().map(OptionParams::analytic_price).collect();

    let mut runs = Vec::new();
    for kind in config.kernels.kinds() {
        let mut timer = Timer::new();
        timer.start();
        let mut prices = Vec::new();
        for _ in 0..config.repetitions {
            prices = price_all(&kind, &params, config.trajectories, config.seed)?;
        }
        let time_ms = timer.elapsed_ms();

        let throughput = config.total_trajectories() / (time_ms / 1000.0).max(f64::MIN_POSITIVE);
        let n = prices.len() as f64;
        let mean_price = prices.iter().sum::<f64>() / n;
        let mean_abs_error = prices
            .iter()
            .zip(analytic.iter())
            .map(|(mc, bs)| (mc - bs).abs())
            .sum::<f64>()
            / n;

        info!(
            kernel = kind.name(),
            options = config.options,
            trajectories = config.trajectories,
            time_ms,
            throughput,
            "kernel run complete"
        );

        runs.push(KernelRun {
            kernel: kind.name(),
            options: config.options,
            trajectories: config.trajectories,
            repetitions: config.repetitions,
            time_ms,
            throughput_traj_per_sec: throughput,
            mean_price,
            mean_abs_error,
        });
    }

    Ok(runs)
}
