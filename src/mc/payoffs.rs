// src/mc/payoffs.rs
//! European call payoff
//!
//! Both kernels push every trajectory through the same two functions, so the
//! scalar and lane-parallel estimates share normalization bit for bit.

/// Payoff floor: `max(S_T - K, 0)`
#[inline(always)]
pub fn call_payoff(s_t: f64, k: f64) -> f64 {
    (s_t - k).max(0.0)
}

/// One trajectory's share of the estimate: `norm * max(S0*Y - K, 0)`
#[inline(always)]
pub fn discounted_contribution(norm: f64, s0: f64, y: f64, k: f64) -> f64 {
    norm * call_payoff(y * s0, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff_floor() {
        assert_eq!(call_payoff(120.0, 100.0), 20.0);
        assert_eq!(call_payoff(100.0, 100.0), 0.0);
        assert_eq!(call_payoff(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_discounted_contribution() {
        let norm = 0.5;
        assert_eq!(discounted_contribution(norm, 100.0, 1.25, 100.0), 12.5);
        assert_eq!(discounted_contribution(norm, 100.0, 0.75, 100.0), 0.0);
    }
}
