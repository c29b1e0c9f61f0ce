mod test_utils;

use bs_surface_lib::{
    bs_call_price, greeks, normal_cdf, price, price_str, OptionParameters, OptionType,
    PricingError,
};
use statrs::distribution::{ContinuousCDF, Normal};
use test_utils::{assert_close, random_valid_params, reference_params};

/// Textbook at-the-money scenario checked against published values.
#[test]
fn test_reference_scenario() {
    let params = reference_params();

    let call = price(&params, OptionType::Call);
    assert_close(call, 10.45, 0.01, "call price");

    let g = greeks(&params);
    assert_close(g.delta_call, 0.6368, 1e-4, "delta call");
    assert_close(g.gamma, 0.0188, 1e-4, "gamma");
    assert_close(g.vega, 37.52, 0.01, "vega");
    assert_close(g.theta_call, -0.0176, 1e-4, "daily theta call");
    assert_close(g.rho_call, 53.23, 0.01, "rho call");

    let put = price(&params, OptionType::Put);
    assert_close(put, 5.5735, 1e-4, "put price");
}

/// Put-call parity C - P = S - K e^(-rT) across a random sample of valid inputs.
#[test]
fn test_put_call_parity_random_inputs() {
    for p in random_valid_params(2_000) {
        let call = price(&p, OptionType::Call);
        let put = price(&p, OptionType::Put);
        let forward_value = p.spot - p.strike * (-p.rate * p.time_to_maturity).exp();
        assert!(
            (call - put - forward_value).abs() < 1e-6,
            "parity violated for {:?}: C={} P={} S-Ke^-rT={}",
            p,
            call,
            put,
            forward_value
        );
    }
}

/// Prices are non-negative and within the no-arbitrage bounds.
#[test]
fn test_price_bounds_random_inputs() {
    for p in random_valid_params(2_000) {
        let df = p.discount_factor();
        let call = price(&p, OptionType::Call);
        let put = price(&p, OptionType::Put);

        assert!(call >= -1e-9 && call <= p.spot + 1e-9, "call out of bounds {:?}", p);
        assert!(put >= -1e-9 && put <= p.strike * df + 1e-9, "put out of bounds {:?}", p);
        assert!(call >= p.spot - p.strike * df - 1e-9, "call below intrinsic {:?}", p);
    }
}

/// Φ agrees with an independent implementation to 1e-9 over [-8, 8].
#[test]
fn test_normal_cdf_accuracy() {
    let reference = Normal::new(0.0, 1.0).unwrap();
    for i in -800..=800 {
        let x = i as f64 / 100.0;
        let diff = (normal_cdf(x) - reference.cdf(x)).abs();
        assert!(diff < 1e-9, "Φ({}) off by {}", x, diff);
    }
}

/// As T → 0 the call collapses onto its intrinsic value.
#[test]
fn test_short_maturity_limit() {
    let atm = OptionParameters::new(100.0, 100.0, 1e-10, 0.05, 0.2);
    let atm_call = price(&atm, OptionType::Call);
    assert!(atm_call >= 0.0 && atm_call < 1e-3, "ATM call = {}", atm_call);

    let itm = OptionParameters::new(110.0, 100.0, 1e-8, 0.05, 0.2);
    assert_close(price(&itm, OptionType::Call), 10.0, 1e-6, "ITM call near expiry");
    assert_close(price(&itm, OptionType::Put), 0.0, 1e-9, "OTM put near expiry");
}

/// Gamma and vega do not depend on the side being priced.
#[test]
fn test_gamma_vega_type_agnostic() {
    let params = reference_params();
    let first = greeks(&params);
    let second = greeks(&params);
    assert_eq!(first.gamma, second.gamma);
    assert_eq!(first.vega, second.vega);
    assert_close(first.gamma, 0.018_762_017, 1e-8, "gamma");
    assert_close(first.vega, 37.524_034_69, 1e-6, "vega");

    // Same gamma from a finite difference on either side
    let h = 1e-3;
    for option_type in [OptionType::Call, OptionType::Put] {
        let up = price(&params.with_spot_and_vol(params.spot + h, params.volatility), option_type);
        let mid = price(&params, option_type);
        let down =
            price(&params.with_spot_and_vol(params.spot - h, params.volatility), option_type);
        let fd_gamma = (up - 2.0 * mid + down) / (h * h);
        assert_close(fd_gamma, first.gamma, 1e-5, "finite-difference gamma");
    }
}

/// Unknown option types fail the same way every time, with no partial result.
#[test]
fn test_invalid_option_type_is_deterministic() {
    let params = reference_params();
    for _ in 0..3 {
        assert_eq!(
            price_str(&params, "straddle"),
            Err(PricingError::InvalidOptionType("straddle".to_string()))
        );
    }
    assert!("".parse::<OptionType>().is_err());
    assert_eq!(price_str(&params, "CALL").unwrap(), bs_call_price(100.0, 100.0, 1.0, 0.05, 0.2));
}

/// Deep out-of-the-money options price to a negligible, finite value.
#[test]
fn test_deep_otm_precision() {
    let p = OptionParameters::new(20.0, 100.0, 0.25, 0.05, 0.2);
    let call = price(&p, OptionType::Call);
    assert!(call.is_finite());
    assert!(call.abs() < 1e-12);

    let put = price(&OptionParameters::new(500.0, 100.0, 0.25, 0.05, 0.2), OptionType::Put);
    assert!(put.is_finite());
    assert!(put.abs() < 1e-12);
}
