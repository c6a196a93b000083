// tests/integration_test.rs
use bs_lanes::analytics::bs_analytic;
use bs_lanes::{
    price_scalar, price_vector, Pricer, PricingError, PricingRequest, ScalarPricer, VectorPricer,
};

#[test]
fn test_scalar_mc_vs_analytic() {
    let (s0, sigma, r, t, k) = (100.0, 0.2, 0.05, 1.0, 100.0);

    let mc_price = price_scalar(s0, sigma, r, t, k, 1_000_000).expect("Valid inputs");
    let analytic_price = bs_analytic::bs_call_price(s0, k, r, sigma, t);
    let rel_error = (mc_price - analytic_price).abs() / analytic_price;

    println!("\nScalar MC Price: {}", mc_price);
    println!("Analytic Price: {}", analytic_price);
    println!("Relative Error: {}", rel_error);

    assert!(rel_error < 0.01, "Relative error exceeds 1%: {}", rel_error);
}

#[test]
fn test_vector_mc_vs_analytic() {
    let (s0, sigma, r, t, k) = (100.0, 0.2, 0.05, 1.0, 100.0);

    let mc_price = price_vector(s0, sigma, r, t, k, 1_000_000).expect("Valid inputs");
    let analytic_price = bs_analytic::bs_call_price(s0, k, r, sigma, t);
    let rel_error = (mc_price - analytic_price).abs() / analytic_price;

    println!("\nVector MC Price: {}", mc_price);
    println!("Analytic Price: {}", analytic_price);
    println!("Relative Error: {}", rel_error);

    assert!(rel_error < 0.01, "Relative error exceeds 1%: {}", rel_error);
}

#[test]
fn test_in_and_out_of_the_money_vs_analytic() {
    // (s0, sigma, r, t, k) spread over the harness ranges
    let cases = [
        (150.0, 0.1, 0.03, 0.5, 120.0),
        (80.0, 0.15, 0.08, 2.0, 100.0),
        (60.0, 0.2, 0.01, 1.5, 55.0),
    ];

    for &(s0, sigma, r, t, k) in &cases {
        let analytic = bs_analytic::bs_call_price(s0, k, r, sigma, t);
        let scalar = price_scalar(s0, sigma, r, t, k, 400_000).expect("Valid inputs");
        let vector = price_vector(s0, sigma, r, t, k, 400_000).expect("Valid inputs");

        println!(
            "\nS0={} K={}: analytic {:.4}, scalar {:.4}, vector {:.4}",
            s0, k, analytic, scalar, vector
        );

        // Payoff std dev is below S0*sigma*sqrt(T)*2 here; 0.01*S0 is several
        // standard errors at 400k trajectories.
        let tol = 0.01 * s0;
        assert!((scalar - analytic).abs() < tol, "scalar off: {} vs {}", scalar, analytic);
        assert!((vector - analytic).abs() < tol, "vector off: {} vs {}", vector, analytic);
    }
}

#[test]
fn test_scalar_and_vector_agree() {
    let req = PricingRequest::new(100.0, 0.2, 0.05, 1.0, 100.0, 400_000);

    let scalar = ScalarPricer.price(&req).expect("Valid request");
    let vector = VectorPricer.price(&req).expect("Valid request");

    println!("\nScalar: {}, Vector: {}", scalar, vector);

    // Standard error of each estimate is about 0.023 here.
    assert!(
        (scalar - vector).abs() < 0.2,
        "Kernels disagree: scalar {} vs vector {}",
        scalar,
        vector
    );
    assert_ne!(scalar, vector, "Lane streams should not reproduce the scalar path");
}

#[test]
fn test_determinism() {
    for seed in [0, 1, 42, u64::MAX] {
        let req = PricingRequest::new(120.0, 0.15, 0.03, 0.75, 110.0, 20_000).with_seed(seed);

        let a = ScalarPricer.price(&req).unwrap();
        let b = ScalarPricer.price(&req).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());

        let a = VectorPricer.price(&req).unwrap();
        let b = VectorPricer.price(&req).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let req = PricingRequest::new(100.0, 0.2, 0.05, 1.0, 100.0, 16_000).with_seed(9);
    let expected = VectorPricer.price(&req).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || VectorPricer.price(&req).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().to_bits(), expected.to_bits());
    }
}

#[test]
fn test_vector_precondition() {
    let err = price_vector(100.0, 0.2, 0.05, 1.0, 100.0, 7).unwrap_err();
    assert!(
        matches!(err, PricingError::InvalidArgument { ref parameter, .. } if parameter == "trajectories"),
        "unexpected error: {}",
        err
    );

    assert!(price_vector(100.0, 0.2, 0.05, 1.0, 100.0, 8).is_ok());
    assert!(price_vector(100.0, 0.2, 0.05, 1.0, 100.0, 100_004).is_err());
}

#[test]
fn test_zero_trajectories_rejected() {
    assert!(matches!(
        price_scalar(100.0, 0.2, 0.05, 1.0, 100.0, 0),
        Err(PricingError::InvalidArgument { .. })
    ));
    assert!(matches!(
        price_vector(100.0, 0.2, 0.05, 1.0, 100.0, 0),
        Err(PricingError::InvalidArgument { .. })
    ));
}

#[test]
fn test_invalid_inputs_rejected() {
    let bad = [
        (0.0, 0.2, 0.05, 1.0, 100.0),
        (100.0, 0.0, 0.05, 1.0, 100.0),
        (100.0, 0.2, f64::NAN, 1.0, 100.0),
        (100.0, 0.2, 0.05, -1.0, 100.0),
        (100.0, 0.2, 0.05, 1.0, 0.0),
        (f64::INFINITY, 0.2, 0.05, 1.0, 100.0),
    ];

    for &(s0, sigma, r, t, k) in &bad {
        assert!(price_scalar(s0, sigma, r, t, k, 8).is_err());
        assert!(price_vector(s0, sigma, r, t, k, 8).is_err());
    }
}

#[test]
fn test_extreme_rate_horizon_rejected() {
    // Every input is finite on its own, but exp(-rT) underflows and the
    // terminal growth factor overflows.
    for &(r, t) in &[(75.0, 10.0), (1e300, 10.0), (-1e300, 10.0)] {
        let scalar = price_scalar(100.0, 0.2, r, t, 100.0, 64);
        let vector = price_vector(100.0, 0.2, r, t, 100.0, 64);
        println!("r={}, T={}: scalar={:?}, vector={:?}", r, t, scalar, vector);
        assert!(matches!(scalar, Err(PricingError::InvalidArgument { .. })));
        assert!(matches!(vector, Err(PricingError::InvalidArgument { .. })));
    }
}

#[test]
fn test_overflowing_estimate_is_an_error() {
    // S0 * Y exceeds f64::MAX for any draw Y > 1.
    let scalar = price_scalar(f64::MAX, 1.0, 0.0, 1.0, 1.0, 64);
    let vector = price_vector(f64::MAX, 1.0, 0.0, 1.0, 1.0, 64);
    assert!(matches!(scalar, Err(PricingError::NumericalInstability { .. })));
    assert!(matches!(vector, Err(PricingError::NumericalInstability { .. })));
}

#[test]
fn test_monotone_in_strike() {
    // Common random numbers: same seed, so each trajectory's payoff can
    // only shrink as K grows.
    let strikes = [50.0, 90.0, 100.0, 110.0, 150.0, 200.0];

    for pricer in [&ScalarPricer as &dyn Pricer, &VectorPricer] {
        let prices: Vec<f64> = strikes
            .iter()
            .map(|&k| {
                pricer
                    .price(&PricingRequest::new(100.0, 0.2, 0.05, 1.0, k, 100_000))
                    .unwrap()
            })
            .collect();

        println!("\n{} prices by strike: {:?}", pricer.name(), prices);
        assert!(
            prices.windows(2).all(|w| w[0] >= w[1]),
            "{} price increased with strike: {:?}",
            pricer.name(),
            prices
        );
    }
}

#[test]
fn test_scale_invariance() {
    let base = PricingRequest::new(100.0, 0.2, 0.05, 1.0, 100.0, 50_000).with_seed(3);

    for pricer in [&ScalarPricer as &dyn Pricer, &VectorPricer] {
        let reference = pricer.price(&base).unwrap();

        for lambda in [0.5, 2.0, 3.0, 10.0] {
            let scaled = PricingRequest {
                s0: base.s0 / lambda,
                k: base.k / lambda,
                ..base
            };
            let price = lambda * pricer.price(&scaled).unwrap();
            let rel = (price - reference).abs() / reference;

            assert!(
                rel < 1e-9,
                "{}: λ={} gives {} vs {}",
                pricer.name(),
                lambda,
                price,
                reference
            );
        }
    }
}
