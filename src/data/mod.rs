pub mod analysis;
pub mod contract;
pub mod format;
pub mod premium;
pub mod pressure;
pub mod signal;
pub mod strategy;

pub use analysis::{CompositeAnalysis, TradingSignal};
pub use contract::{ActiveContract, ContractCandidate};
pub use premium::PremiumSnapshot;
pub use pressure::PressureAnalysis;
pub use signal::{PremiumGrade, SignalDirection, SignalStrength};
pub use strategy::{StrategyRecommendation, SupportingData};

use serde::{Deserialize, Deserializer};

/// Lists may arrive as `null`; treat that the same as an empty list.
pub(crate) fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
