use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Paragraph},
};

use crate::config::{FOOTER_TEXT, INFO_TEXT, RefreshPlan};
use crate::request::ApiClient;
use crate::ui::analysis::GoldAnalysisView;
use crate::ui::card::Card;
use crate::ui::contract::ActiveContractView;
use crate::ui::premium::GoldPremiumView;
use crate::ui::strategy::InvestmentStrategyView;
use crate::ui::theme::{ThemeMode, ThemeSwitcher};
use crate::ui::view::View;
use crate::ui::Palette;

const TITLE: &str = "Financial Dashboard";
const SUBTITLE: &str = "Gold premium, futures contract and signal analysis";
const SWITCHER_WIDTH: u16 = 20;

/// The single page: header, premium and strategy side by side, the active
/// contract, the composite analysis and a footer.
pub struct HomePage {
    premium: GoldPremiumView,
    strategy: InvestmentStrategyView,
    contract: ActiveContractView,
    analysis: GoldAnalysisView,
}

impl HomePage {
    pub fn new(api: &ApiClient, plan: &RefreshPlan) -> Self {
        Self {
            premium: GoldPremiumView::new(api, plan.premium),
            strategy: InvestmentStrategyView::new(api, plan.strategy),
            contract: ActiveContractView::new(api, plan),
            analysis: GoldAnalysisView::new(api, plan.analysis),
        }
    }

    fn views_mut(&mut self) -> [&mut dyn View; 4] {
        [
            &mut self.premium,
            &mut self.strategy,
            &mut self.contract,
            &mut self.analysis,
        ]
    }

    pub fn mount(&mut self) {
        log::info!("home: mounting views");
        self.views_mut().into_iter().for_each(|view| view.mount());
    }

    pub fn unmount(&mut self) {
        log::info!("home: unmounting views");
        self.views_mut().into_iter().for_each(|view| view.unmount());
    }

    pub fn refresh_all(&mut self) {
        log::info!("home: refresh all");
        self.views_mut().into_iter().for_each(|view| view.refresh());
    }

    pub fn trigger_update(&self) -> bool {
        self.contract.trigger_update()
    }

    pub fn refresh_pressure(&self) {
        self.contract.refresh_pressure();
    }

    pub fn render(&self, frame: &mut Frame, palette: &Palette, mode: ThemeMode) {
        frame.render_widget(Block::new().bg(palette.buffer_bg), frame.area());

        let [header, top, contract, analysis, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Fill(3),
            Constraint::Length(7),
        ])
        .areas(frame.area());
        let [premium, strategy] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);

        self.render_header(frame, header, palette, mode);
        render_view(frame, premium, &self.premium, palette);
        render_view(frame, strategy, &self.strategy, palette);
        render_view(frame, contract, &self.contract, palette);
        render_view(frame, analysis, &self.analysis, palette);
        render_footer(frame, footer, palette);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, palette: &Palette, mode: ThemeMode) {
        let [title, switcher] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(SWITCHER_WIDTH)]).areas(area);
        let heading = Text::from(vec![
            Line::from(TITLE).style(
                Style::new()
                    .fg(palette.title_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(SUBTITLE).fg(palette.muted_fg),
        ]);
        frame.render_widget(
            Paragraph::new(heading).style(Style::new().bg(palette.buffer_bg)),
            title.inner(Margin::new(1, 0)),
        );
        ThemeSwitcher::render(frame, switcher, mode, palette);
    }
}

fn render_view(frame: &mut Frame, area: Rect, view: &dyn View, palette: &Palette) {
    frame.render_widget(Card::new(view.title(), view.body(palette), palette), area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines: Vec<Line> = INFO_TEXT
        .iter()
        .map(|text| Line::from(*text).fg(palette.text_fg))
        .chain(FOOTER_TEXT.iter().map(|text| Line::from(*text).fg(palette.muted_fg)))
        .collect();
    let footer = Paragraph::new(lines)
        .style(Style::new().bg(palette.buffer_bg))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Double)
                .border_style(Style::new().fg(palette.footer_border_color)),
        );
    frame.render_widget(footer, area);
}
