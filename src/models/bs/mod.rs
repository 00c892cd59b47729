// A minimal Black-Scholes implementation that provides the call and put
// pricing helpers required by the P&L grid sampler.  Implied-volatility and
// Greeks are intentionally omitted to keep the lightweight focus of
// heatmap-lib.

use crate::grid::types::OptionType;

/// Price returned for degenerate inputs instead of propagating a numerical
/// failure.  A 0.0 result is indistinguishable from a true zero price;
/// callers that need to tell the two apart must pre-validate their inputs.
pub const FALLBACK_PRICE: f64 = 0.0;

fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// True when the inputs would make d1/d2 undefined: division by zero
/// (sigma or T) or a logarithm over a non-positive ratio (S or K).
#[allow(non_snake_case)]
fn is_degenerate(S: f64, K: f64, T: f64, sigma: f64) -> bool {
    sigma <= 0.0 || T <= 0.0 || S <= 0.0 || K <= 0.0
}

/// Price of a European call option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    if is_degenerate(S, K, T, sigma) {
        return FALLBACK_PRICE;
    }
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    if is_degenerate(S, K, T, sigma) {
        return FALLBACK_PRICE;
    }
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt());
    let d2 = d1 - sigma * T.sqrt();
    let nd1m = 1.0 - norm_cdf(d1);
    let nd2m = 1.0 - norm_cdf(d2);
    K * (-r * T).exp() * nd2m - S * nd1m
}

/// Theoretical price of a European option, dispatching on `option_type`.
#[allow(non_snake_case)]
pub fn bs_price(option_type: OptionType, S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    match option_type {
        OptionType::Call => bs_call_price(S, K, T, r, sigma),
        OptionType::Put => bs_put_price(S, K, T, r, sigma),
    }
}
