// src/analytics/bs_analytic.rs
//! Closed-form Black-Scholes call price
//!
//! Reference value for checking the Monte Carlo kernels. Under
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//! the European call has the closed form
//! ```text
//! C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```

use crate::math_utils::norm_cdf;

/// Black-Scholes European call option price
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    s * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}
