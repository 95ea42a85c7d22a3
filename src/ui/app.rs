use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::sync::watch;

use crate::config::POLL_DURATION_MS;
use crate::ui::Palette;
use crate::ui::home::HomePage;
use crate::ui::theme::{ThemeContext, ThemeMode};

/// Outcome of one key press.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct TuiApp {
    home: HomePage,
    theme: ThemeContext,
    theme_rx: watch::Receiver<ThemeMode>,
    mode: ThemeMode,
    colors: Palette,
}

impl TuiApp {
    pub fn new(home: HomePage, theme: ThemeContext) -> Self {
        let theme_rx = theme.subscribe();
        let mode = theme.mode();
        Self {
            home,
            theme,
            theme_rx,
            mode,
            colors: Palette::for_mode(mode),
        }
    }

    /// Picks up a theme change published by the context.
    fn sync_theme(&mut self) {
        if self.theme_rx.has_changed().unwrap_or(false) {
            self.mode = *self.theme_rx.borrow_and_update();
            self.colors = Palette::for_mode(self.mode);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('t') => {
                self.theme.toggle();
            }
            KeyCode::Char('r') => self.home.refresh_all(),
            KeyCode::Char('u') => {
                if !self.home.trigger_update() {
                    log::debug!("update key ignored, one already running");
                }
            }
            KeyCode::Char('p') => self.home.refresh_pressure(),
            _ => {}
        }
        Flow::Continue
    }

    /// Mounts the page, then draws and handles keys until the user quits.
    /// The page is unmounted on the way out, also on error.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.home.mount();
        let result = self.event_loop(&mut terminal);
        self.home.unmount();
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            self.sync_theme();
            terminal.draw(|frame| self.home.render(frame, &self.colors, self.mode))?;

            if event::poll(Duration::from_millis(POLL_DURATION_MS))? {
                while event::poll(Duration::from_millis(0))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind == KeyEventKind::Press && self.handle_key(key) == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}
