use strikewise::analysis::{estimate_pop_for_pcs, estimate_pop_for_pcs_with_rate};

#[test]
fn test_otm_short_put_pop_between_50_and_100() {
    let pop = estimate_pop_for_pcs(100.0, 95.0, 45, 0.30);
    assert!(pop > 50.0 && pop < 100.0, "pop was {}", pop);
}

#[test]
fn test_further_otm_strike_raises_pop() {
    let near = estimate_pop_for_pcs(100.0, 95.0, 45, 0.30);
    let far = estimate_pop_for_pcs(100.0, 85.0, 45, 0.30);
    assert!(far > near);
}

#[test]
fn test_higher_volatility_lowers_pop() {
    let calm = estimate_pop_for_pcs(100.0, 95.0, 45, 0.20);
    let wild = estimate_pop_for_pcs(100.0, 95.0, 45, 0.60);
    assert!(calm > wild);
}

#[test]
fn test_expired_trade_is_binary() {
    assert_eq!(estimate_pop_for_pcs(100.0, 95.0, 0, 0.30), 100.0);
    assert_eq!(estimate_pop_for_pcs(90.0, 95.0, 0, 0.30), 0.0);
    assert_eq!(estimate_pop_for_pcs(95.0, 95.0, -3, 0.30), 0.0);
}

#[test]
fn test_zero_volatility_is_binary() {
    assert_eq!(estimate_pop_for_pcs(100.0, 95.0, 45, 0.0), 100.0);
    assert_eq!(estimate_pop_for_pcs(90.0, 95.0, 45, 0.0), 0.0);
}

#[test]
fn test_pop_stays_in_range() {
    for strike in [1.0, 50.0, 99.0, 100.0, 101.0, 150.0, 1000.0] {
        let pop = estimate_pop_for_pcs_with_rate(100.0, strike, 30, 0.45, 0.03);
        assert!((0.0..=100.0).contains(&pop), "strike {} gave {}", strike, pop);
    }
}
