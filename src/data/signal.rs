//! Closed label sets the backend uses for grades and signals. Unknown labels
//! classify as `Unknown` so the UI can fall back to a neutral style.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDirection {
    Buy,
    Sell,
    Hold,
    Unknown,
}

impl SignalDirection {
    /// Accepts both the `BUY`/`SELL`/`HOLD` codes and free text that
    /// mentions buying (매수) or selling (매도).
    pub fn classify(label: &str) -> Self {
        let label = label.trim();
        match label.to_ascii_uppercase().as_str() {
            "BUY" => return Self::Buy,
            "SELL" => return Self::Sell,
            "HOLD" => return Self::Hold,
            _ => {}
        }
        if label.contains("매수") {
            Self::Buy
        } else if label.contains("매도") {
            Self::Sell
        } else if label.contains("관망") {
            Self::Hold
        } else {
            Self::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
            Self::Hold => "HOLD",
            Self::Unknown => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStrength {
    Strong,
    Medium,
    Weak,
    Unknown,
}

impl SignalStrength {
    pub fn classify(label: &str) -> Self {
        match label.trim() {
            "Strong" | "강함" => Self::Strong,
            "Medium" | "중간" => Self::Medium,
            "Weak" | "약함" => Self::Weak,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::Medium => "Medium",
            Self::Weak => "Weak",
            Self::Unknown => "-",
        }
    }
}

/// Premium grade, from cheapest (buy) to most expensive (sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumGrade {
    VeryGood,
    Good,
    Normal,
    High,
    VeryHigh,
    Unknown,
}

impl PremiumGrade {
    pub fn classify(label: &str) -> Self {
        match label.trim() {
            "매우좋음" => Self::VeryGood,
            "좋음" => Self::Good,
            "보통" => Self::Normal,
            "높음" => Self::High,
            "매우높음" => Self::VeryHigh,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_from_codes_and_text() {
        assert_eq!(SignalDirection::classify("BUY"), SignalDirection::Buy);
        assert_eq!(SignalDirection::classify("sell"), SignalDirection::Sell);
        assert_eq!(SignalDirection::classify("HOLD"), SignalDirection::Hold);
        assert_eq!(SignalDirection::classify("강한 매수 신호"), SignalDirection::Buy);
        assert_eq!(SignalDirection::classify("매도 우위"), SignalDirection::Sell);
        assert_eq!(SignalDirection::classify("sideways"), SignalDirection::Unknown);
    }

    #[test]
    fn strengths() {
        assert_eq!(SignalStrength::classify("Strong"), SignalStrength::Strong);
        assert_eq!(SignalStrength::classify("중간"), SignalStrength::Medium);
        assert_eq!(SignalStrength::classify("약함"), SignalStrength::Weak);
        assert_eq!(SignalStrength::classify("extreme"), SignalStrength::Unknown);
    }

    #[test]
    fn grades() {
        assert_eq!(PremiumGrade::classify("매우좋음"), PremiumGrade::VeryGood);
        assert_eq!(PremiumGrade::classify("높음"), PremiumGrade::High);
        assert_eq!(PremiumGrade::classify("판정불가"), PremiumGrade::Unknown);
    }
}
