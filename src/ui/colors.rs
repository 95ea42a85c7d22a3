use ratatui::style::{Color, palette::tailwind};

use crate::data::{PremiumGrade, SignalDirection, SignalStrength};
use crate::ui::theme::ThemeMode;

pub struct Palette {
    pub buffer_bg: Color,
    pub card_bg: Color,
    pub card_border: Color,
    pub title_fg: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub accent_fg: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub caution: Color,
    pub highlight_bg: Color,
    pub footer_border_color: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c950,
            card_bg: tailwind::SLATE.c900,
            card_border: tailwind::SLATE.c700,
            title_fg: tailwind::SLATE.c50,
            text_fg: tailwind::SLATE.c200,
            muted_fg: tailwind::SLATE.c400,
            accent_fg: tailwind::BLUE.c400,
            positive: tailwind::GREEN.c400,
            negative: tailwind::RED.c400,
            warning: tailwind::YELLOW.c400,
            caution: tailwind::ORANGE.c400,
            highlight_bg: tailwind::GREEN.c950,
            footer_border_color: tailwind::BLUE.c400,
        }
    }

    pub const fn light() -> Self {
        Self {
            buffer_bg: tailwind::SLATE.c100,
            card_bg: tailwind::SLATE.c50,
            card_border: tailwind::SLATE.c300,
            title_fg: tailwind::SLATE.c950,
            text_fg: tailwind::SLATE.c800,
            muted_fg: tailwind::SLATE.c500,
            accent_fg: tailwind::BLUE.c600,
            positive: tailwind::GREEN.c600,
            negative: tailwind::RED.c600,
            warning: tailwind::YELLOW.c600,
            caution: tailwind::ORANGE.c600,
            highlight_bg: tailwind::GREEN.c100,
            footer_border_color: tailwind::BLUE.c600,
        }
    }

    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn grade_color(&self, grade: PremiumGrade) -> Color {
        match grade {
            PremiumGrade::VeryGood => self.positive,
            PremiumGrade::Good => self.accent_fg,
            PremiumGrade::Normal => self.warning,
            PremiumGrade::High => self.caution,
            PremiumGrade::VeryHigh => self.negative,
            PremiumGrade::Unknown => self.muted_fg,
        }
    }

    pub fn direction_color(&self, direction: SignalDirection) -> Color {
        match direction {
            SignalDirection::Buy => self.positive,
            SignalDirection::Sell => self.negative,
            SignalDirection::Hold => self.warning,
            SignalDirection::Unknown => self.muted_fg,
        }
    }

    /// Strong signals are the loudest.
    pub fn strength_color(&self, strength: SignalStrength) -> Color {
        match strength {
            SignalStrength::Strong => self.negative,
            SignalStrength::Medium => self.warning,
            SignalStrength::Weak => self.positive,
            SignalStrength::Unknown => self.muted_fg,
        }
    }
}
