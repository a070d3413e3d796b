use strikewise::analysis::{estimate_pcs_premium, estimate_pcs_premium_with_rate};
use strikewise::error::PricingError;

#[test]
fn test_credit_and_max_risk_share_the_width() {
    let estimate = estimate_pcs_premium(100.0, 95.0, 90.0, 45, 0.30).expect("valid strikes");
    assert!(estimate.credit > 0.0);
    assert!(estimate.credit < 5.0);
    assert!((estimate.max_risk - (5.0 - estimate.credit)).abs() < 1e-9);
    assert!((estimate.return_on_risk - estimate.credit / estimate.max_risk * 100.0).abs() < 1e-9);
}

#[test]
fn test_inverted_strikes_are_rejected() {
    let err = estimate_pcs_premium(100.0, 90.0, 95.0, 45, 0.30).unwrap_err();
    assert_eq!(err, PricingError::InvalidStrikeOrder { short: 90.0, long: 95.0 });
    assert!(estimate_pcs_premium(100.0, 95.0, 95.0, 45, 0.30).is_err());
}

#[test]
fn test_degenerate_inputs_give_no_credit() {
    for (dte, iv) in [(0, 0.30), (-5, 0.30), (45, 0.0)] {
        let estimate = estimate_pcs_premium(100.0, 95.0, 90.0, dte, iv).expect("valid strikes");
        assert_eq!(estimate.credit, 0.0);
        assert_eq!(estimate.max_risk, 5.0);
        assert_eq!(estimate.return_on_risk, 0.0);
    }
}

#[test]
fn test_all_fields_non_negative() {
    for price in [20.0, 80.0, 95.0, 120.0, 400.0] {
        let estimate =
            estimate_pcs_premium_with_rate(price, 95.0, 90.0, 30, 0.5, 0.01).expect("valid strikes");
        assert!(estimate.credit >= 0.0);
        assert!(estimate.max_risk >= 0.0);
        assert!(estimate.return_on_risk >= 0.0);
    }
}
