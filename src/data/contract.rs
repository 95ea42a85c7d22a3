use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::config::EXPIRY_WARNING_DAYS;

const SECONDS_PER_DAY: i64 = 86_400;

/// The futures contract the backend currently tracks, selected by volume.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActiveContract {
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub current_price: Option<f64>,
    pub volume: Option<f64>,
    pub open_interest: Option<f64>,
    pub expiry_year: Option<i32>,
    pub expiry_month: Option<u32>,
    pub updated_at: Option<String>,
    pub buy_pressure: Option<f64>,
    pub sell_pressure: Option<f64>,
    pub pressure_signal: Option<String>,
    pub best_bid: Option<f64>,
    pub best_ask: Option<f64>,
    pub spread: Option<f64>,
}

impl ActiveContract {
    pub fn is_expiring_soon(&self, now: DateTime<Local>) -> bool {
        match (self.expiry_year, self.expiry_month) {
            (Some(year), Some(month)) => is_expiring_soon(year, month, now),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContractCandidate {
    pub symbol: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub description: Option<String>,
}

impl ContractCandidate {
    /// Exact symbol match against the active contract.
    pub fn is_active(&self, active: Option<&ActiveContract>) -> bool {
        match (self.symbol.as_deref(), active.and_then(|a| a.symbol.as_deref())) {
            (Some(candidate), Some(active)) => candidate == active,
            _ => false,
        }
    }
}

/// Whole days from `now` until midnight on the first of the expiry month,
/// rounded up. Negative once that date has passed. Both ends are wall-clock
/// times, so a midnight skipped by a DST change still has an answer.
pub fn days_until_expiry(year: i32, month: u32, now: NaiveDateTime) -> Option<i64> {
    let midnight = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let seconds = (midnight - now).num_seconds();
    let days = seconds / SECONDS_PER_DAY;
    Some(if seconds % SECONDS_PER_DAY > 0 { days + 1 } else { days })
}

pub fn is_expiring_soon(year: i32, month: u32, now: DateTime<Local>) -> bool {
    days_until_expiry(year, month, now.naive_local())
        .is_some_and(|days| days <= EXPIRY_WARNING_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Months, TimeZone};

    fn candidate(symbol: &str) -> ContractCandidate {
        ContractCandidate {
            symbol: Some(symbol.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn only_matching_candidate_is_active() {
        let candidates = [candidate("GCZ24"), candidate("GCM25")];
        let active = ActiveContract {
            symbol: Some("GCZ24".to_string()),
            ..Default::default()
        };
        let flags: Vec<bool> = candidates.iter().map(|c| c.is_active(Some(&active))).collect();
        assert_eq!(flags, [true, false]);
    }

    #[test]
    fn no_active_contract_flags_nothing() {
        assert!(!candidate("GCZ24").is_active(None));
        let unnamed = ActiveContract::default();
        assert!(!candidate("GCZ24").is_active(Some(&unnamed)));
        assert!(!ContractCandidate::default().is_active(Some(&unnamed)));
    }

    #[test]
    fn current_month_is_expiring() {
        let now = Local::now();
        assert!(is_expiring_soon(now.year(), now.month(), now));
    }

    #[test]
    fn six_months_out_is_not_expiring() {
        let now = Local::now();
        let later = now.date_naive().checked_add_months(Months::new(6)).unwrap();
        assert!(!is_expiring_soon(later.year(), later.month(), now));
    }

    #[test]
    fn window_boundary() {
        let now = Local.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap();
        assert!(is_expiring_soon(2025, 4, now));
        assert!(!is_expiring_soon(2025, 5, now));
    }

    #[test]
    fn skipped_midnight_still_counts() {
        // 2024-09-01 00:00 does not exist in zones that spring forward at
        // midnight, e.g. America/Santiago.
        let now = NaiveDate::from_ymd_opt(2024, 8, 20)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        assert_eq!(days_until_expiry(2024, 9, now), Some(12));
        let after = NaiveDate::from_ymd_opt(2024, 9, 1)
            .and_then(|d| d.and_hms_opt(0, 30, 0))
            .unwrap();
        assert_eq!(days_until_expiry(2024, 9, after), Some(0));
    }

    #[test]
    fn invalid_month_is_not_expiring() {
        let now = Local::now();
        assert!(!is_expiring_soon(2025, 13, now));
        assert!(!ActiveContract::default().is_expiring_soon(now));
    }
}
