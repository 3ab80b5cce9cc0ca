use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};
use rewind::{NavigationController, Renderer};

/// Navigation state readout: who is playing, where the replay stands,
/// and which controls are live.
pub struct StatusView;

impl StatusView {
    pub fn draw<'a, R: Renderer>(&self, nav: &'a NavigationController<R>) -> impl Widget + 'a {
        let engine = nav.engine();
        let total = engine.played_len() + engine.pending_len();
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut lines = vec![
            Line::raw(format!("Viewing as: {}", nav.local_player())),
            Line::raw(match nav.opponent_label() {
                Some(name) => format!("Opponent: {name}"),
                None => "Opponent: -".to_owned(),
            }),
            Line::raw(format!("Move {}/{}", engine.played_len(), total)),
            Line::raw(""),
            Line::from(vec![
                toggled("[<-] back  ", nav.backward_enabled(), dim),
                toggled("[->] forward", nav.forward_enabled(), dim),
            ]),
            Line::raw("[r] restart  [g] games  [q] quit"),
        ];
        if let Some(outcome) = nav.outcome_label() {
            lines.push(Line::raw(format!("Result: {outcome}")));
        }
        Paragraph::new(Text::from(lines))
            .block(Block::new().borders(Borders::ALL).title("Replay"))
    }
}

fn toggled(label: &str, enabled: bool, dim: Style) -> Span<'_> {
    if enabled {
        Span::raw(label)
    } else {
        Span::styled(label, dim)
    }
}
