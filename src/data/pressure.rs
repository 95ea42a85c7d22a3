use serde::Deserialize;

/// Buy/sell imbalance for the active contract.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PressureAnalysis {
    pub buy_pressure: Option<f64>,
    pub sell_pressure: Option<f64>,
    #[serde(alias = "signal")]
    pub pressure_signal: Option<String>,
    pub symbol: Option<String>,
    pub recommendation: Option<String>,
    pub timestamp: Option<String>,
}
