//! Trade recommendation, risk narrative and analysis notes

use crate::models::analysis::{PremiumEstimate, TradeRecommendation};
use crate::models::stock::StockSnapshot;

/// First matching rule wins.
pub fn trade_recommendation(score: f64, pop: f64) -> TradeRecommendation {
    if score >= 80.0 && pop >= 70.0 {
        TradeRecommendation::StrongBuy
    } else if score >= 65.0 && pop >= 60.0 {
        TradeRecommendation::Buy
    } else if score >= 50.0 && pop >= 50.0 {
        TradeRecommendation::Hold
    } else {
        TradeRecommendation::Avoid
    }
}

/// Risk factors present for this trade, in a fixed order.
pub fn risk_factors(stock: &StockSnapshot, pop: f64, premium: &PremiumEstimate) -> Vec<&'static str> {
    let mut factors = Vec::new();

    if stock.earnings_days_away <= 7 {
        factors.push("Earnings within 1 week");
    } else if stock.earnings_days_away <= 14 {
        factors.push("Earnings within 2 weeks");
    }

    if stock.beta > 1.5 {
        factors.push("High beta (volatile)");
    } else if stock.beta < 0.5 {
        factors.push("Low beta (may lack movement)");
    }

    if stock.iv_rank < 30.0 {
        factors.push("Low IV rank (limited premium)");
    }
    if pop < 50.0 {
        factors.push("Low probability of profit");
    }
    if premium.return_on_risk < 10.0 {
        factors.push("Low return on risk");
    }

    factors
}

/// "Low Risk", "Moderate Risk: …" (1-2 factors) or "High Risk: …" (3+).
pub fn assess_risk(stock: &StockSnapshot, pop: f64, premium: &PremiumEstimate) -> String {
    let factors = risk_factors(stock, pop, premium);
    match factors.len() {
        0 => "Low Risk".to_string(),
        1 | 2 => format!("Moderate Risk: {}", factors.join(", ")),
        _ => format!("High Risk: {}", factors.join(", ")),
    }
}

/// Human-readable observations. Always includes the IV rank and POP notes.
pub fn generate_notes(
    stock: &StockSnapshot,
    support_levels: &[f64],
    pop: f64,
    premium: &PremiumEstimate,
) -> Vec<String> {
    let mut notes = Vec::new();

    if stock.iv_rank >= 70.0 {
        notes.push(format!(
            "High IV rank ({:.1}%) - excellent premium opportunity",
            stock.iv_rank
        ));
    } else if stock.iv_rank >= 50.0 {
        notes.push(format!(
            "Elevated IV rank ({:.1}%) - good premium available",
            stock.iv_rank
        ));
    } else {
        notes.push(format!(
            "IV rank at {:.1}% - consider waiting for higher IV",
            stock.iv_rank
        ));
    }

    if stock.price > stock.sma20 && stock.price > stock.sma50 {
        notes.push("Strong uptrend - price above both SMA20 and SMA50".to_string());
    } else if stock.price > stock.sma20 {
        notes.push("Short-term bullish - price above SMA20".to_string());
    }

    let nearest_support = support_levels
        .iter()
        .copied()
        .filter(|level| *level < stock.price)
        .fold(None, |best: Option<f64>, level| {
            Some(best.map_or(level, |b| b.max(level)))
        });
    if let Some(support) = nearest_support {
        let distance_pct = (stock.price - support) / stock.price * 100.0;
        notes.push(format!(
            "Nearest support at ${:.2} ({:.1}% below)",
            support, distance_pct
        ));
    }

    notes.push(format!("Estimated probability of profit: {:.1}%", pop));

    if premium.credit > 0.0 {
        notes.push(format!("Estimated credit: ${:.2} per spread", premium.credit));
        notes.push(format!("Return on risk: {:.1}%", premium.return_on_risk));
    }

    notes
}
