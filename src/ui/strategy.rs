use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::Duration;

use crate::data::{
    PremiumGrade, SignalDirection, SignalStrength, StrategyRecommendation, SupportingData, format,
};
use crate::poll::{PollingResource, StalePolicy, Visible};
use crate::request::ApiClient;
use crate::ui::Palette;
use crate::ui::card::{error_line, field, field_colored, heading, muted};
use crate::ui::view::View;

pub struct InvestmentStrategyView {
    resource: PollingResource<StrategyRecommendation>,
}

impl InvestmentStrategyView {
    pub fn new(api: &ApiClient, refresh: Option<Duration>) -> Self {
        let fetcher = api.fetcher(|api| async move { api.investment_strategy().await });
        Self {
            resource: PollingResource::new("investment-strategy", refresh, fetcher),
        }
    }
}

impl View for InvestmentStrategyView {
    fn title(&self) -> &'static str {
        "Investment Strategy"
    }

    fn mount(&mut self) {
        self.resource.mount();
    }

    fn unmount(&mut self) {
        self.resource.unmount();
    }

    fn refresh(&self) {
        self.resource.refresh();
    }

    fn body(&self, palette: &Palette) -> Vec<Line<'static>> {
        match self.resource.state().visible(StalePolicy::KeepStale) {
            Visible::Loading => vec![muted("Loading strategy data...", palette)],
            Visible::Failed(message) => vec![error_line(message, palette)],
            Visible::Data(strategy) => strategy_lines(strategy, palette),
        }
    }
}

pub fn strategy_lines(strategy: &StrategyRecommendation, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(condition) = strategy.market_condition.as_deref() {
        lines.push(field_colored(
            "Market condition",
            format::text(Some(condition)),
            palette.accent_fg,
            palette,
        ));
    }
    if let Some(recommended) = strategy.recommended_strategy.as_deref() {
        lines.push(field("Recommended strategy", format::text(Some(recommended)), palette));
    }
    if let Some(supporting) = &strategy.supporting_data {
        lines.push(heading("Supporting data", palette));
        lines.extend(supporting_lines(supporting, palette));
    }

    if let Some(grade) = strategy.premium_grade.as_deref() {
        let color = palette.grade_color(PremiumGrade::classify(grade));
        lines.push(field_colored("Premium grade", format::text(Some(grade)), color, palette));
    }

    if !strategy.signals.is_empty() {
        lines.push(heading("Signals", palette));
        for signal in &strategy.signals {
            let kind = signal.kind.as_deref().unwrap_or_default();
            let strength = SignalStrength::classify(signal.strength.as_deref().unwrap_or_default());
            lines.push(Line::from(vec![
                Span::styled("● ", Style::new().fg(palette.strength_color(strength))),
                Span::styled(
                    format::text(Some(kind)),
                    Style::new()
                        .fg(palette.direction_color(SignalDirection::classify(kind)))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" [{}]", format::text(signal.strength.as_deref())),
                    Style::new().fg(palette.muted_fg),
                ),
            ]));
            if let Some(message) = signal.message.as_deref() {
                lines.push(Line::from(format!("    {message}")));
            }
        }
    }

    if let Some(recommendation) = strategy.recommendation.as_deref() {
        lines.push(heading("Recommendation", palette));
        lines.push(Line::from(recommendation.to_string()));
    }

    if let Some(time) = strategy.analysis_time.as_deref() {
        lines.push(muted(format!("Analysed {}", format::timestamp(Some(time))), palette));
    }
    if let Some(message) = strategy.message.as_deref() {
        lines.push(muted(message, palette));
    }
    lines.push(muted("* For reference only. Invest with care.", palette));
    lines
}

fn supporting_lines(supporting: &SupportingData, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        field("  Price trend", format::metric(supporting.price_trend.as_ref()), palette),
        field(
            "  Speculative position",
            format::metric(supporting.speculative_position.as_ref()),
            palette,
        ),
        field("  Open interest", format::metric(supporting.open_interest.as_ref()), palette),
    ];
    for (key, value) in &supporting.other {
        let label = format!("  {}", key.replace('_', " "));
        lines.push(field(&label, format::metric(Some(value)), palette));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::strategy::StrategySignal;
    use crate::ui::card::plain;
    use serde_json::json;

    #[test]
    fn condition_variant_lists_supporting_metrics() {
        let strategy: StrategyRecommendation = serde_json::from_value(json!({
            "market_condition": "Strong upside",
            "recommended_strategy": "Buy calls",
            "supporting_data": {
                "price_trend": "rising",
                "total_volume": 1000000
            }
        }))
        .unwrap();
        let text = plain(&strategy_lines(&strategy, &Palette::dark()));
        assert!(text.contains("Market condition: Strong upside"));
        assert!(text.contains("Recommended strategy: Buy calls"));
        assert!(text.contains("Price trend: rising"));
        assert!(text.contains("Open interest: N/A"));
        assert!(text.contains("total volume: 1,000,000"));
    }

    #[test]
    fn signal_variant_keeps_order() {
        let strategy = StrategyRecommendation {
            premium_grade: Some("좋음".to_string()),
            signals: vec![
                StrategySignal {
                    kind: Some("매도".to_string()),
                    message: Some("premium high".to_string()),
                    strength: Some("중간".to_string()),
                },
                StrategySignal {
                    kind: Some("매수".to_string()),
                    message: None,
                    strength: None,
                },
            ],
            recommendation: Some("wait".to_string()),
            ..Default::default()
        };
        let text = plain(&strategy_lines(&strategy, &Palette::dark()));
        let sell = text.find("● 매도 [중간]").unwrap();
        let buy = text.find("● 매수 [N/A]").unwrap();
        assert!(sell < buy);
        assert!(text.contains("    premium high"));
        assert!(text.contains("Premium grade: 좋음"));
        assert!(text.contains("wait"));
    }
}
