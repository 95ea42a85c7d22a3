//! Runtime settings, read from the command line and the environment.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use super::{
    DEFAULT_API_URL, DEFAULT_LOG_FILE, DEFAULT_STATE_FILE, DEFAULT_TIMEOUT_SECS, FIVE_MINUTES,
    ONE_HOUR, TEN_MINUTES,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "gold-dash", version, about = "Terminal dashboard for gold premium and futures signals")]
pub struct Settings {
    /// Base URL of the analysis backend
    #[arg(long, env = "GOLD_DASH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Refresh schedule for the cards
    #[arg(long, env = "GOLD_DASH_PRESET", value_enum, default_value_t = Preset::Standard)]
    pub preset: Preset,

    /// Where the theme preference is persisted
    #[arg(long, env = "GOLD_DASH_STATE", default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,

    #[arg(long, env = "GOLD_DASH_LOG", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Settings {
    pub fn api_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_plan(&self) -> RefreshPlan {
        self.preset.plan()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Premium once per mount, strategy every 5 minutes, contract hourly
    Standard,
    /// Everything every 10 minutes
    Live,
}

/// Refresh period per card. `None` means fetch on mount only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    pub premium: Option<Duration>,
    pub strategy: Option<Duration>,
    pub analysis: Option<Duration>,
    pub contract: Option<Duration>,
    pub candidates: Option<Duration>,
}

impl Preset {
    pub fn plan(self) -> RefreshPlan {
        match self {
            Preset::Standard => RefreshPlan {
                premium: None,
                strategy: Some(FIVE_MINUTES),
                analysis: Some(TEN_MINUTES),
                contract: Some(ONE_HOUR),
                candidates: None,
            },
            Preset::Live => RefreshPlan {
                premium: Some(TEN_MINUTES),
                strategy: Some(TEN_MINUTES),
                analysis: Some(TEN_MINUTES),
                contract: Some(TEN_MINUTES),
                candidates: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let settings = Settings::parse_from(["gold-dash"]);
        assert_eq!(settings.api_url(), "http://127.0.0.1:5000");
        assert_eq!(settings.preset, Preset::Standard);
        assert_eq!(settings.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let settings = Settings::parse_from(["gold-dash", "--api-url", "http://gold.local:8080/"]);
        assert_eq!(settings.api_url(), "http://gold.local:8080");
    }

    #[test]
    fn live_preset_polls_premium() {
        let settings = Settings::parse_from(["gold-dash", "--preset", "live"]);
        let plan = settings.refresh_plan();
        assert_eq!(plan.premium, Some(TEN_MINUTES));
        assert_eq!(plan.candidates, None);
    }

    #[test]
    fn standard_preset_matches_card_periods() {
        let plan = Preset::Standard.plan();
        assert_eq!(plan.premium, None);
        assert_eq!(plan.strategy, Some(FIVE_MINUTES));
        assert_eq!(plan.analysis, Some(TEN_MINUTES));
        assert_eq!(plan.contract, Some(ONE_HOUR));
    }
}
