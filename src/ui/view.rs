use ratatui::text::Line;

use crate::ui::Palette;

/// A card that owns its own fetch lifecycle.
pub trait View {
    fn title(&self) -> &'static str;

    /// Starts fetching. Called once when the page is shown.
    fn mount(&mut self);

    /// Stops timers; responses still in flight are discarded.
    fn unmount(&mut self);

    fn refresh(&self);

    fn body(&self, palette: &Palette) -> Vec<Line<'static>>;
}
