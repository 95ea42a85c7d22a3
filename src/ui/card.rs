use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::ui::Palette;

/// Titled container. Pure presentation.
pub struct Card<'a> {
    title: &'a str,
    body: Vec<Line<'a>>,
    palette: &'a Palette,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str, body: Vec<Line<'a>>, palette: &'a Palette) -> Self {
        Self {
            title,
            body,
            palette,
        }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(self.palette.card_border))
            .title(Line::from(format!(" {} ", self.title)).bold().fg(self.palette.title_fg));
        Paragraph::new(self.body)
            .wrap(Wrap { trim: false })
            .style(Style::new().fg(self.palette.text_fg).bg(self.palette.card_bg))
            .block(block)
            .render(area, buf);
    }
}

/// `label: value` with the value emphasised.
pub fn field(label: &str, value: String, palette: &Palette) -> Line<'static> {
    field_colored(label, value, palette.text_fg, palette)
}

pub fn field_colored(label: &str, value: String, color: Color, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::new().fg(palette.muted_fg)),
        Span::styled(value, Style::new().fg(color).add_modifier(Modifier::BOLD)),
    ])
}

pub fn heading(text: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::new().fg(palette.accent_fg).add_modifier(Modifier::BOLD),
    ))
}

pub fn muted(text: impl Into<String>, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::new().fg(palette.muted_fg)))
}

pub fn error_line(message: &str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        format!("Error: {message}"),
        Style::new().fg(palette.negative),
    ))
}

#[cfg(test)]
pub(crate) fn plain(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_title_and_body() {
        let palette = Palette::dark();
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|frame| {
                let body = vec![field("Premium", "1.25%".to_string(), &palette)];
                frame.render_widget(Card::new("Gold", body, &palette), frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect();
        assert!(rows[0].contains(" Gold "));
        assert!(rows[1].contains("Premium: 1.25%"));
    }

    #[test]
    fn field_keeps_label_and_value() {
        let palette = Palette::light();
        let line = field("Volume", "1,200".to_string(), &palette);
        assert_eq!(plain(&[line]), "Volume: 1,200");
    }
}
