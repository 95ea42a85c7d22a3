use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use super::nullable_vec;

/// Recommended strategy. Two response shapes exist in the wild: one built
/// around `market_condition`/`recommended_strategy`, one around
/// `premium_grade`/`signals`/`recommendation`. Both decode into this type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StrategyRecommendation {
    pub market_condition: Option<String>,
    pub recommended_strategy: Option<String>,
    pub supporting_data: Option<SupportingData>,
    pub premium_grade: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub signals: Vec<StrategySignal>,
    pub recommendation: Option<String>,
    pub analysis_time: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SupportingData {
    pub price_trend: Option<Value>,
    #[serde(alias = "speculation_position")]
    pub speculative_position: Option<Value>,
    pub open_interest: Option<Value>,
    /// Any further metrics, shown as `key: value` in key order.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StrategySignal {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub strength: Option<String>,
}
