//! # bs-lanes: Scalar and Lane-Parallel Monte Carlo for European Calls
//!
//! Two interchangeable Monte Carlo kernels for the Black-Scholes price of a
//! European call, plus a harness that times them against each other.
//!
//! ## Key Features
//!
//! - **Scalar kernel**: one seeded stream, strictly sequential accumulation
//! - **Vector kernel**: eight independent seeded streams advanced in lockstep,
//!   per-lane partial sums in an aligned block, fixed-order final reduction
//! - **Deterministic**: identical inputs and seed give bit-identical prices
//! - **Validated inputs**: bad parameters return [`PricingError`], never NaN
//! - **Harness**: random option books priced in parallel with Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_lanes::mc::pricer::{price_scalar, price_vector};
//!
//! let scalar = price_scalar(100.0, 0.2, 0.05, 1.0, 100.0, 100_000).expect("valid inputs");
//! let vector = price_vector(100.0, 0.2, 0.05, 1.0, 100.0, 100_000).expect("valid inputs");
//! assert!((scalar - vector).abs() < 1.0);
//!
//! // The vector kernel works in whole batches of eight trajectories
//! assert!(price_vector(100.0, 0.2, 0.05, 1.0, 100.0, 7).is_err());
//! ```
//!
//! ## Mathematical Foundation
//!
//! Each trajectory draws the terminal factor `Y` with
//! `ln Y ~ N((r - σ²/2)T, σ²T)` and contributes
//! `e^(-rT)/N * max(S₀Y - K, 0)`; the sum of contributions is the estimate.

pub mod analytics;
pub mod error;
pub mod harness;
pub mod math_utils;
pub mod mc;
pub mod output;
pub mod rng;

pub use error::{PricingError, PricingResult};
pub use mc::config::PricingRequest;
pub use mc::pricer::{price_scalar, price_vector, Pricer, PricerKind};
pub use mc::scalar::ScalarPricer;
pub use mc::vector::{VectorPricer, LANE_WIDTH};
pub use rng::DEFAULT_SEED;
