use serde::Deserialize;

use super::nullable_vec;

/// Composite market overview, risk block, and ordered signals and
/// recommendations. List order is display order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CompositeAnalysis {
    pub timestamp: Option<String>,
    pub market_overview: Option<MarketOverview>,
    pub risk_assessment: Option<RiskAssessment>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub trading_signals: Vec<TradingSignal>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MarketOverview {
    pub london_gold_usd: Option<f64>,
    pub london_gold_krw: Option<f64>,
    pub domestic_gold_price: Option<f64>,
    pub premium_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RiskAssessment {
    pub premium_grade: Option<PremiumGradeDetail>,
    pub market_volatility: Option<String>,
    pub liquidity_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PremiumGradeDetail {
    pub grade: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TradingSignal {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub strength: Option<String>,
    pub reason: Option<String>,
}
