mod settings;

pub use settings::{Preset, RefreshPlan, Settings};

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_STATE_FILE: &str = ".gold_dash_state.json";
pub const DEFAULT_LOG_FILE: &str = "/tmp/gold_dash.log";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

pub const INFO_TEXT: [&str; 2] = [
    "(q/Esc) quit | (t) toggle theme | (r) refresh all",
    "(u) update active contract | (p) refresh pressure",
];

pub const FOOTER_TEXT: [&str; 3] = [
    "Data: Naver Finance, Korea Eximbank, Korea Investment & Securities",
    "Auto refresh on a fixed schedule per card",
    "Figures are for reference only. Invest with care.",
];

pub const POLL_DURATION_MS: u64 = 50;

/// Rendered wherever the backend omitted a value.
pub const PLACEHOLDER: &str = "N/A";

/// A contract whose expiry month starts within this many days is flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

pub const FIVE_MINUTES: Duration = Duration::from_secs(5 * 60);
pub const TEN_MINUTES: Duration = Duration::from_secs(10 * 60);
pub const ONE_HOUR: Duration = Duration::from_secs(60 * 60);
