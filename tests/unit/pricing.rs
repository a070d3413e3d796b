use strikewise::pricing::{d1, d2, norm_cdf, put_delta, put_price, years_from_days};

#[test]
fn test_norm_cdf_midpoint() {
    assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
}

#[test]
fn test_years_from_days() {
    assert!((years_from_days(365) - 1.0).abs() < 1e-12);
    assert!((years_from_days(45) - 45.0 / 365.0).abs() < 1e-12);
}

#[test]
fn test_d2_is_d1_less_vol_sqrt_t() {
    let (s, k, t, r, v) = (100.0, 95.0, 0.25, 0.05, 0.3);
    let diff = d1(s, k, t, r, v) - d2(s, k, t, r, v);
    assert!((diff - v * t.sqrt()).abs() < 1e-12);
}

#[test]
fn test_put_price_increases_with_volatility() {
    let low = put_price(100.0, 95.0, 0.25, 0.05, 0.2);
    let high = put_price(100.0, 95.0, 0.25, 0.05, 0.4);
    assert!(high > low);
}

#[test]
fn test_put_price_increases_with_strike() {
    let lower = put_price(100.0, 90.0, 0.25, 0.05, 0.3);
    let higher = put_price(100.0, 95.0, 0.25, 0.05, 0.3);
    assert!(higher > lower);
}

#[test]
fn test_put_delta_range() {
    let delta = put_delta(100.0, 95.0, 45.0 / 365.0, 0.05, 0.3);
    assert!(delta < 0.0 && delta > -1.0);
    let deep_itm = put_delta(50.0, 100.0, 45.0 / 365.0, 0.05, 0.3);
    assert!(deep_itm < -0.99);
}
