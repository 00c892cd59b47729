use heatmap_lib::{bs_call_price, bs_price, bs_put_price, OptionType, FALLBACK_PRICE};
use statrs::distribution::{ContinuousCDF, Normal};

/// Black-Scholes price recomputed with the statrs normal CDF, used as the
/// precision reference for the library's erf-based implementation.
fn statrs_reference_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    match option_type {
        OptionType::Call => s * normal.cdf(d1) - k * (-r * t).exp() * normal.cdf(d2),
        OptionType::Put => {
            k * (-r * t).exp() * (1.0 - normal.cdf(d2)) - s * (1.0 - normal.cdf(d1))
        }
    }
}

/// Standard reference scenario: S=100, K=100, T=1, r=5%, sigma=20%
/// has a well-known call value of ~10.4506.
#[test]
fn test_reference_call_price() {
    let call = bs_call_price(100.0, 100.0, 1.0, 0.05, 0.2);
    println!("Reference call price: {:.6}", call);
    assert!(
        (call - 10.4506).abs() < 5e-3,
        "call price {:.6} should match the 10.4506 reference to 2 decimal places",
        call
    );
}

#[test]
fn test_reference_put_price() {
    // Implied by put-call parity from the 10.4506 call value
    let put = bs_put_price(100.0, 100.0, 1.0, 0.05, 0.2);
    println!("Reference put price: {:.6}", put);
    assert!(
        (put - 5.5735).abs() < 5e-3,
        "put price {:.6} should match the 5.5735 reference to 2 decimal places",
        put
    );
}

/// With S=K and r=0 the forward value S - K*exp(-rT) vanishes, so call and
/// put must price identically.
#[test]
fn test_put_call_parity_at_the_money_zero_rate() {
    for &(s, t, sigma) in &[(100.0, 1.0, 0.2), (50.0, 0.25, 0.4), (12345.0, 2.0, 0.8)] {
        let call = bs_call_price(s, s, t, 0.0, sigma);
        let put = bs_put_price(s, s, t, 0.0, sigma);
        assert!(
            (call - put).abs() < 1e-9,
            "ATM zero-rate parity violated: call={:.9}, put={:.9}",
            call,
            put
        );
    }
}

/// General parity: call - put = S - K*exp(-rT) for any valid inputs.
#[test]
fn test_put_call_parity_general() {
    let spots = [80.0, 100.0, 125.0];
    let strikes = [90.0, 100.0, 110.0];
    let times = [0.1, 0.5, 1.0, 3.0];
    let rates = [-0.01, 0.0, 0.05];
    let vols = [0.05, 0.2, 0.6];

    for &s in &spots {
        for &k in &strikes {
            for &t in &times {
                for &r in &rates {
                    for &sigma in &vols {
                        let call = bs_call_price(s, k, t, r, sigma);
                        let put = bs_put_price(s, k, t, r, sigma);
                        let forward_value = s - k * (-r * t).exp();
                        assert!(
                            (call - put - forward_value).abs() < 1e-9,
                            "parity violated at S={} K={} T={} r={} sigma={}",
                            s,
                            k,
                            t,
                            r,
                            sigma
                        );
                    }
                }
            }
        }
    }
}

/// Degenerate inputs must produce the fallback value, never a panic or NaN.
#[test]
fn test_degenerate_inputs_produce_fallback() {
    assert_eq!(bs_call_price(100.0, 100.0, 1.0, 0.05, 0.0), FALLBACK_PRICE);
    assert_eq!(bs_put_price(100.0, 100.0, 1.0, 0.05, 0.0), FALLBACK_PRICE);
    assert_eq!(bs_call_price(100.0, 100.0, 0.0, 0.05, 0.2), FALLBACK_PRICE);
    assert_eq!(bs_put_price(100.0, 100.0, -1.0, 0.05, 0.2), FALLBACK_PRICE);
    assert_eq!(bs_call_price(0.0, 100.0, 1.0, 0.05, 0.2), FALLBACK_PRICE);
    assert_eq!(bs_put_price(100.0, 0.0, 1.0, 0.05, 0.2), FALLBACK_PRICE);
}

/// The erf-based CDF must agree with the statrs CDF at pricing precision
/// across a broad sweep of inputs.
#[test]
fn test_prices_match_statrs_reference() {
    let mut checked = 0;
    for &option_type in &[OptionType::Call, OptionType::Put] {
        for &s in &[60.0, 100.0, 140.0] {
            for &k in &[80.0, 100.0, 120.0] {
                for &t in &[0.05, 0.5, 2.0] {
                    for &sigma in &[0.1, 0.3, 0.9] {
                        let ours = bs_price(option_type, s, k, t, 0.03, sigma);
                        let reference = statrs_reference_price(option_type, s, k, t, 0.03, sigma);
                        assert!(
                            (ours - reference).abs() < 1e-6,
                            "{:?} S={} K={} T={} sigma={}: {} vs statrs {}",
                            option_type,
                            s,
                            k,
                            t,
                            sigma,
                            ours,
                            reference
                        );
                        checked += 1;
                    }
                }
            }
        }
    }
    println!("Cross-checked {} price evaluations against statrs", checked);
}
