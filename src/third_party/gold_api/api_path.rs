use const_format::concatcp;

// Root
pub const API_PREFIX: &str = "/api";

// Paths
pub const GOLD_PREMIUM_PATH: &str = concatcp!(API_PREFIX, "/gold-premium");
pub const INVESTMENT_STRATEGY_PATH: &str = concatcp!(API_PREFIX, "/investment-strategy");
pub const GOLD_ANALYSIS_PATH: &str = concatcp!(API_PREFIX, "/gold-analysis");
pub const ACTIVE_CONTRACT_PATH: &str = concatcp!(API_PREFIX, "/active-contract");
pub const FUTURES_CANDIDATES_PATH: &str = concatcp!(API_PREFIX, "/futures-candidates");
pub const PRESSURE_SIGNAL_PATH: &str = concatcp!(API_PREFIX, "/pressure-signal");
pub const UPDATE_ACTIVE_CONTRACT_PATH: &str = concatcp!(API_PREFIX, "/update-active-contract");
