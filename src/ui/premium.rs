use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use std::time::Duration;

use crate::data::{PremiumGrade, PremiumSnapshot, format};
use crate::poll::{PollingResource, StalePolicy, Visible};
use crate::request::ApiClient;
use crate::ui::Palette;
use crate::ui::card::{error_line, field, field_colored, muted};
use crate::ui::view::View;

pub struct GoldPremiumView {
    resource: PollingResource<PremiumSnapshot>,
}

impl GoldPremiumView {
    pub fn new(api: &ApiClient, refresh: Option<Duration>) -> Self {
        let fetcher = api.fetcher(|api| async move { api.gold_premium().await });
        Self {
            resource: PollingResource::new("gold-premium", refresh, fetcher),
        }
    }
}

impl View for GoldPremiumView {
    fn title(&self) -> &'static str {
        "Gold Premium (domestic vs. international)"
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
        match self.resource.state().visible(StalePolicy::Blank) {
            Visible::Loading => vec![muted("Loading data...", palette)],
            Visible::Failed(message) => vec![error_line(message, palette)],
            Visible::Data(snapshot) => premium_lines(snapshot, palette),
        }
    }
}

pub fn premium_lines(snapshot: &PremiumSnapshot, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        field(
            "International (USD/oz)",
            format::money("$", snapshot.international_price_usd_oz, 2),
            palette,
        ),
        field(
            "Domestic (KRW/g)",
            format::money("₩", snapshot.domestic_price_krw_g, 0),
            palette,
        ),
        field(
            "Exchange rate (KRW/USD)",
            format::fixed(snapshot.usd_krw_rate, 2),
            palette,
        ),
        field(
            "International converted (KRW/g)",
            format::money("₩", snapshot.converted_intl_price_krw_g.map(f64::round), 0),
            palette,
        ),
        Line::from(vec![
            Span::styled("Premium: ", Style::new().fg(palette.accent_fg)),
            Span::styled(
                format::percent(snapshot.premium_percentage, 2),
                Style::new()
                    .fg(palette.accent_fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(grade) = snapshot.premium_grade.as_deref() {
        let color = palette.grade_color(PremiumGrade::classify(grade));
        lines.push(field_colored("Grade", format::text(Some(grade)), color, palette));
    }
    if let Some(contract) = snapshot.active_contract.as_deref() {
        lines.push(field("Active contract", format::text(Some(contract)), palette));
    }

    let mut footnote = format!("Updated {}", format::timestamp(snapshot.last_updated.as_deref()));
    if snapshot.is_cached() {
        footnote.push_str(" (cached)");
    }
    lines.push(muted(footnote, palette));
    lines
}
