use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::Duration;

use crate::data::{
    CompositeAnalysis, PremiumGrade, SignalDirection, SignalStrength, TradingSignal, format,
};
use crate::poll::{PollingResource, StalePolicy, Visible};
use crate::request::ApiClient;
use crate::ui::Palette;
use crate::ui::card::{error_line, field, field_colored, heading, muted};
use crate::ui::view::View;

pub struct GoldAnalysisView {
    resource: PollingResource<CompositeAnalysis>,
}

impl GoldAnalysisView {
    pub fn new(api: &ApiClient, refresh: Option<Duration>) -> Self {
        let fetcher = api.fetcher(|api| async move { api.gold_analysis().await });
        Self {
            resource: PollingResource::new("gold-analysis", refresh, fetcher),
        }
    }
}

impl View for GoldAnalysisView {
    fn title(&self) -> &'static str {
        "Gold Market Analysis"
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
            Visible::Loading => vec![muted("Analysing...", palette)],
            Visible::Failed(message) => vec![error_line(message, palette)],
            Visible::Data(analysis) => analysis_lines(analysis, palette),
        }
    }
}

pub fn analysis_lines(analysis: &CompositeAnalysis, palette: &Palette) -> Vec<Line<'static>> {
    let overview = analysis.market_overview.clone().unwrap_or_default();
    let risk = analysis.risk_assessment.clone().unwrap_or_default();
    let grade = risk.premium_grade.unwrap_or_default();

    let mut lines = vec![
        Line::from(vec![
            overview_cell("London (USD)", format::money("$", overview.london_gold_usd, 0), palette),
            overview_cell(
                "Domestic (KRW)",
                format::money("₩", overview.domestic_gold_price, 0),
                palette,
            ),
        ]),
        Line::from(vec![
            overview_cell("Premium", format::percent(overview.premium_percentage, 2), palette),
            overview_cell("Liquidity", format::fixed(risk.liquidity_score, 1), palette),
        ]),
        heading("Risk assessment", palette),
        field_colored(
            "Premium grade",
            format::text(grade.grade.as_deref()),
            palette.grade_color(PremiumGrade::classify(grade.grade.as_deref().unwrap_or_default())),
            palette,
        ),
    ];
    if let Some(description) = grade.description.as_deref() {
        lines.push(muted(format!("  {description}"), palette));
    }
    lines.push(field("Volatility", format::text(risk.market_volatility.as_deref()), palette));

    if !analysis.trading_signals.is_empty() {
        lines.push(heading("Trading signals", palette));
        lines.extend(analysis.trading_signals.iter().map(|s| signal_line(s, palette)));
    }

    if !analysis.recommendations.is_empty() {
        lines.push(heading("Recommendations", palette));
        lines.extend(
            analysis
                .recommendations
                .iter()
                .map(|rec| Line::from(format!("• {rec}"))),
        );
    }

    lines.push(muted(
        format!("Analysed {}", format::timestamp(analysis.timestamp.as_deref())),
        palette,
    ));
    lines
}

fn overview_cell(label: &str, value: String, palette: &Palette) -> Span<'static> {
    Span::styled(
        format!("{label}: {value:<16}"),
        Style::new().fg(palette.text_fg).add_modifier(Modifier::BOLD),
    )
}

fn signal_line(signal: &TradingSignal, palette: &Palette) -> Line<'static> {
    let direction = SignalDirection::classify(signal.kind.as_deref().unwrap_or_default());
    let badge = match direction {
        SignalDirection::Unknown => format::text(signal.kind.as_deref()),
        known => known.label().to_string(),
    };
    let strength = SignalStrength::classify(signal.strength.as_deref().unwrap_or_default());
    Line::from(vec![
        Span::styled(
            format!("[{badge}] "),
            Style::new()
                .fg(palette.direction_color(direction))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format::text(signal.reason.as_deref())),
        Span::styled(
            format!("  ({})", strength.label()),
            Style::new().fg(palette.muted_fg),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::card::plain;
    use serde_json::json;

    #[test]
    fn empty_payload_renders_placeholders() {
        let text = plain(&analysis_lines(&CompositeAnalysis::default(), &Palette::dark()));
        assert!(text.contains("London (USD): N/A"));
        assert!(text.contains("Premium: N/A"));
        assert!(text.contains("Liquidity: N/A"));
        assert!(text.contains("Premium grade: N/A"));
        assert!(text.contains("Volatility: N/A"));
        assert!(!text.contains("Trading signals"));
    }

    #[test]
    fn signals_and_recommendations_in_server_order() {
        let analysis: CompositeAnalysis = serde_json::from_value(json!({
            "market_overview": {"london_gold_usd": 2650.7, "domestic_gold_price": 125300, "premium_percentage": -1.234},
            "risk_assessment": {
                "premium_grade": {"grade": "매우좋음", "description": "매수 적극 고려"},
                "market_volatility": "낮음",
                "liquidity_score": 8.5
            },
            "trading_signals": [
                {"type": "BUY", "strength": "Strong", "reason": "low premium"},
                {"type": "NEUTRAL", "strength": "Medium", "reason": "flat COT"}
            ],
            "recommendations": ["accumulate", "watch FX"]
        }))
        .unwrap();
        let text = plain(&analysis_lines(&analysis, &Palette::dark()));
        assert!(text.contains("London (USD): $2,651"));
        assert!(text.contains("Domestic (KRW): ₩125,300"));
        assert!(text.contains("Premium: -1.23%"));
        assert!(text.contains("Liquidity: 8.5"));
        assert!(text.contains("[BUY] low premium  (Strong)"));
        assert!(text.contains("[NEUTRAL] flat COT  (Medium)"));
        let first = text.find("• accumulate").unwrap();
        let second = text.find("• watch FX").unwrap();
        assert!(first < second);
    }
}
