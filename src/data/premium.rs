use serde::Deserialize;

/// Spot prices and the premium of domestic over converted international gold.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PremiumSnapshot {
    pub international_price_usd_oz: Option<f64>,
    pub domestic_price_krw_g: Option<f64>,
    pub usd_krw_rate: Option<f64>,
    pub converted_intl_price_krw_g: Option<f64>,
    pub premium_percentage: Option<f64>,
    pub premium_grade: Option<String>,
    pub active_contract: Option<String>,
    pub cached: Option<bool>,
    pub last_updated: Option<String>,
    pub message: Option<String>,
}

impl PremiumSnapshot {
    pub fn is_cached(&self) -> bool {
        self.cached.unwrap_or(false)
    }
}
