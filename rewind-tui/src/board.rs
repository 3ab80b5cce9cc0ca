use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};
use rewind::Renderer;
use rewind_types::{Orientation, Position, Square};

const LIGHT: Color = Color::Rgb(240, 217, 181);
const DARK: Color = Color::Rgb(181, 136, 99);

/// Keeps a copy of the last position the controller asked to draw and
/// renders it as a ratatui widget once per frame.
#[derive(Default)]
pub struct BoardView {
    position: Position,
    orientation: Orientation,
}

impl Renderer for BoardView {
    fn draw(&mut self, position: &Position, orientation: Orientation) {
        self.position = position.clone();
        self.orientation = orientation;
    }
}

impl BoardView {
    pub fn widget(&self) -> impl Widget + '_ {
        let flipped = self.orientation.is_flipped();
        let mut lines = Vec::with_capacity(9);
        for row in 0..8u8 {
            let rank = if flipped { row } else { 7 - row };
            let mut spans = vec![Span::raw(format!("{} ", rank + 1))];
            for col in 0..8u8 {
                let file = if flipped { 7 - col } else { col };
                let square = Square::new(file, rank);
                let bg = if (file + rank) % 2 == 0 { DARK } else { LIGHT };
                let cell = match self.position.piece_on(square) {
                    Some(piece) => format!("{} ", piece.glyph()),
                    None => "  ".to_owned(),
                };
                spans.push(Span::styled(cell, Style::default().fg(Color::Black).bg(bg)));
            }
            lines.push(Line::from(spans));
        }
        let files: String = (0..8u8)
            .map(|col| {
                let file = if flipped { 7 - col } else { col };
                format!("{} ", (b'a' + file) as char)
            })
            .collect();
        lines.push(Line::raw(format!("  {files}")));
        Paragraph::new(Text::from(lines)).block(Block::new().borders(Borders::ALL))
    }
}
