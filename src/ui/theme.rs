//! Process-wide light/dark preference.
//!
//! [`ThemeContext::init`] reads the persisted choice, falling back to the
//! terminal's reported background. [`ThemeContext::set`] persists the new
//! choice and notifies every subscriber.

use anyhow::Context;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Paragraph},
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::watch;

use crate::ui::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    theme: Option<ThemeMode>,
}

pub struct ThemeContext {
    sender: watch::Sender<ThemeMode>,
    store: Option<PathBuf>,
}

impl ThemeContext {
    pub fn init(store: Option<PathBuf>) -> Self {
        let persisted = store.as_deref().and_then(|path| match load_preference(path) {
            Ok(mode) => mode,
            Err(err) => {
                log::warn!("ignoring theme state: {err:#}");
                None
            }
        });
        let mode = persisted.unwrap_or_else(system_preference);
        log::info!("theme: {mode:?}");
        let (sender, _) = watch::channel(mode);
        Self { sender, store }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.sender.subscribe()
    }

    pub fn set(&self, mode: ThemeMode) {
        self.sender.send_replace(mode);
        log::info!("theme set to {mode:?}");
        if let Some(path) = &self.store {
            if let Err(err) = save_preference(path, mode) {
                log::warn!("could not persist theme: {err:#}");
            }
        }
    }

    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode().toggled();
        self.set(next);
        next
    }
}

fn load_preference(path: &Path) -> anyhow::Result<Option<ThemeMode>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let state: PersistedState = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(state.theme)
}

fn save_preference(path: &Path, mode: ThemeMode) -> anyhow::Result<()> {
    let state = PersistedState { theme: Some(mode) };
    let raw = serde_json::to_string_pretty(&state)?;
    fs::write(path, raw).with_context(|| format!("writing {}", path.display()))
}

/// `COLORFGBG` is `fg;bg` with ANSI colour indices; 7 and 15 are light
/// backgrounds. Anything unknown is treated as dark.
pub fn system_preference() -> ThemeMode {
    from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn from_colorfgbg(value: Option<&str>) -> ThemeMode {
    match value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
    {
        Some(7 | 15) => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

/// Header button that flips the theme.
pub struct ThemeSwitcher;

impl ThemeSwitcher {
    pub fn label(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Dark => "(t) Light Mode",
            ThemeMode::Light => "(t) Dark Mode",
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, mode: ThemeMode, palette: &Palette) {
        let button = Paragraph::new(Self::label(mode))
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.text_fg).bg(palette.card_bg).bold())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(palette.card_border)),
            );
        frame.render_widget(button, area);
    }
}
