use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Debug, Default)]
pub struct Popup<'a> {
    title: Line<'a>,
    content: Text<'a>,
    border_style: Style,
}

impl<'a> Popup<'a> {
    pub fn title(self, title: String) -> Self {
        Self {
            title: Line::from(title),
            ..self
        }
    }

    pub fn content(self, content: String) -> Self {
        Self {
            content: Text::from(content),
            ..self
        }
    }

    pub fn border_style(self, border_style: Style) -> Self {
        Self {
            border_style,
            ..self
        }
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // ensure that all cells under the popup are cleared to avoid leaking content
        Clear.render(area, buf);
        let block = Block::new()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.border_style);
        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .centered()
            .block(block)
            .render(area, buf);
    }
}
