use chrono::{DateTime, Local};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::RefreshPlan;
use crate::data::{
    ActiveContract, ContractCandidate, PressureAnalysis, SignalDirection, format,
};
use crate::poll::{PollingResource, StalePolicy, UpdateAction, Visible};
use crate::request::ApiClient;
use crate::ui::Palette;
use crate::ui::card::{error_line, field, field_colored, heading, muted};
use crate::ui::view::View;

const AUTO_SELECT_NOTE: &str = "The active contract is selected automatically by trading volume.";

/// Active futures contract, its candidates and the buy/sell pressure, plus
/// the user-triggered re-selection of the active contract.
pub struct ActiveContractView {
    contract: PollingResource<ActiveContract>,
    candidates: PollingResource<Vec<ContractCandidate>>,
    pressure: PollingResource<PressureAnalysis>,
    update: UpdateAction<ActiveContract>,
}

impl ActiveContractView {
    pub fn new(api: &ApiClient, plan: &RefreshPlan) -> Self {
        let contract = PollingResource::new(
            "active-contract",
            plan.contract,
            api.fetcher(|api| async move { api.active_contract().await }),
        );
        let candidates = PollingResource::new(
            "futures-candidates",
            plan.candidates,
            api.fetcher(|api| async move { api.futures_candidates().await }),
        );
        let pressure = PollingResource::new(
            "pressure-signal",
            plan.contract,
            api.fetcher(|api| async move { api.pressure_signal().await }),
        );
        let update = UpdateAction::new(
            "update-active-contract",
            contract.shared_state(),
            api.fetcher(|api| async move { api.update_active_contract().await }),
        );
        Self {
            contract,
            candidates,
            pressure,
            update,
        }
    }

    /// Returns whether an update request was issued.
    pub fn trigger_update(&self) -> bool {
        self.update.trigger()
    }

    pub fn refresh_pressure(&self) {
        self.pressure.refresh();
    }

    pub fn body_at(&self, palette: &Palette, now: DateTime<Local>) -> Vec<Line<'static>> {
        let mut lines = vec![self.action_line(palette)];

        let contract = self.contract.state();
        match contract.visible(StalePolicy::KeepStale) {
            Visible::Loading => lines.push(muted("Loading contract...", palette)),
            Visible::Failed(message) => lines.push(error_line(message, palette)),
            Visible::Data(active) => lines.extend(contract_lines(active, palette, now)),
        }

        if let Some(message) = self.update.error() {
            lines.push(error_line(&message, palette));
        }

        lines.push(heading("Buy/sell pressure", palette));
        match self.pressure.state().visible(StalePolicy::KeepStale) {
            Visible::Loading => lines.push(muted("Loading pressure...", palette)),
            Visible::Failed(message) => lines.push(error_line(message, palette)),
            Visible::Data(pressure) => lines.extend(pressure_lines(pressure, palette)),
        }

        lines.push(heading("Candidates", palette));
        match self.candidates.state().visible(StalePolicy::KeepStale) {
            Visible::Loading => lines.push(muted("Loading candidates...", palette)),
            Visible::Failed(message) => lines.push(error_line(message, palette)),
            Visible::Data(candidates) => {
                lines.extend(candidate_lines(candidates, contract.data(), palette))
            }
        }

        lines.push(muted(AUTO_SELECT_NOTE, palette));
        lines
    }

    fn action_line(&self, palette: &Palette) -> Line<'static> {
        let (label, color) = if self.update.is_in_flight() {
            ("Updating...", palette.muted_fg)
        } else {
            ("(u) Update", palette.accent_fg)
        };
        let pressure = if self.pressure.state().is_loading() {
            "Refreshing..."
        } else {
            "(p) Refresh pressure"
        };
        Line::from(vec![
            Span::styled(
                format!("[{label}]"),
                Style::new().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!("[{pressure}]"), Style::new().fg(palette.accent_fg)),
        ])
    }
}

impl View for ActiveContractView {
    fn title(&self) -> &'static str {
        "Active Futures Contract"
    }

    fn mount(&mut self) {
        self.contract.mount();
        self.candidates.mount();
        self.pressure.mount();
    }

    fn unmount(&mut self) {
        self.contract.unmount();
        self.candidates.unmount();
        self.pressure.unmount();
    }

    fn refresh(&self) {
        self.contract.refresh();
        self.candidates.refresh();
        self.pressure.refresh();
    }

    fn body(&self, palette: &Palette) -> Vec<Line<'static>> {
        self.body_at(palette, Local::now())
    }
}

pub fn contract_lines(
    contract: &ActiveContract,
    palette: &Palette,
    now: DateTime<Local>,
) -> Vec<Line<'static>> {
    let mut symbol = vec![Span::styled(
        format::text(contract.symbol.as_deref()),
        Style::new().fg(palette.title_fg).add_modifier(Modifier::BOLD),
    )];
    if let Some(description) = contract.description.as_deref() {
        symbol.push(Span::styled(format!("  {description}"), Style::new().fg(palette.muted_fg)));
    }
    if contract.is_expiring_soon(now) {
        symbol.push(Span::styled(
            "  EXPIRING SOON",
            Style::new().fg(palette.caution).add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines = vec![
        Line::from(symbol),
        field("Expiry", expiry(contract.expiry_year, contract.expiry_month), palette),
        field("Price", format::money("₩", contract.current_price, 0), palette),
        field("Volume", format::grouped(contract.volume, 0), palette),
        field("Open interest", format::grouped(contract.open_interest, 0), palette),
    ];
    if contract.best_bid.is_some() || contract.best_ask.is_some() {
        lines.push(Line::from(vec![
            Span::styled("Bid/Ask: ", Style::new().fg(palette.muted_fg)),
            Span::styled(
                format::money("₩", contract.best_bid, 0),
                Style::new().fg(palette.positive),
            ),
            Span::raw(" / "),
            Span::styled(
                format::money("₩", contract.best_ask, 0),
                Style::new().fg(palette.negative),
            ),
            Span::styled(
                format!("  spread {}", format::grouped(contract.spread, 0)),
                Style::new().fg(palette.muted_fg),
            ),
        ]));
    }
    lines.push(muted(
        format!("Updated {}", format::timestamp(contract.updated_at.as_deref())),
        palette,
    ));
    lines
}

pub fn pressure_lines(pressure: &PressureAnalysis, palette: &Palette) -> Vec<Line<'static>> {
    let signal = pressure.pressure_signal.as_deref();
    let direction = SignalDirection::classify(signal.unwrap_or_default());
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Buy ", Style::new().fg(palette.muted_fg)),
            Span::styled(
                format::percent(pressure.buy_pressure, 1),
                Style::new().fg(palette.positive).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Sell ", Style::new().fg(palette.muted_fg)),
            Span::styled(
                format::percent(pressure.sell_pressure, 1),
                Style::new().fg(palette.negative).add_modifier(Modifier::BOLD),
            ),
        ]),
        field_colored(
            "Signal",
            format::text(signal),
            palette.direction_color(direction),
            palette,
        ),
    ];
    if let Some(symbol) = pressure.symbol.as_deref() {
        lines.push(field("Symbol", format::text(Some(symbol)), palette));
    }
    if let Some(recommendation) = pressure.recommendation.as_deref() {
        lines.push(Line::from(recommendation.to_string()));
    }
    if let Some(timestamp) = pressure.timestamp.as_deref() {
        lines.push(muted(format!("At {}", format::timestamp(Some(timestamp))), palette));
    }
    lines
}

pub fn candidate_lines(
    candidates: &[ContractCandidate],
    active: Option<&ActiveContract>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    if candidates.is_empty() {
        return vec![muted("No candidates", palette)];
    }
    candidates
        .iter()
        .map(|candidate| {
            let mut spans = vec![Span::raw(format!(
                "{:<8} {}",
                format::text(candidate.symbol.as_deref()),
                expiry(candidate.year, candidate.month),
            ))];
            if let Some(description) = candidate.description.as_deref() {
                spans.push(Span::styled(
                    format!("  {description}"),
                    Style::new().fg(palette.muted_fg),
                ));
            }
            if candidate.is_active(active) {
                spans.push(Span::styled(
                    "  [ACTIVE]",
                    Style::new().fg(palette.positive).add_modifier(Modifier::BOLD),
                ));
                Line::from(spans).style(Style::new().bg(palette.highlight_bg))
            } else {
                Line::from(spans)
            }
        })
        .collect()
}

fn expiry(year: Option<i32>, month: Option<u32>) -> String {
    match (year, month) {
        (Some(year), Some(month)) => format!("{year}-{month:02}"),
        _ => format::text(None),
    }
}
