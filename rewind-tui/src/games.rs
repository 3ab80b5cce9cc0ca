use ratatui::{
    crossterm::event::{Event, KeyCode},
    text::Line,
    widgets::{Block, Borders, List, Widget},
};

use crate::app::Message;

/// Selection list over the catalog entries.
pub struct GameList {
    entries: Vec<String>,
    selected: usize,
}

impl GameList {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.entries.len().saturating_sub(1));
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Enter => {
                    if !self.entries.is_empty() {
                        return Some(Message::SelectGame(self.selected));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn draw(&self, active: bool) -> impl Widget + '_ {
        let title = if active { "Games (Enter selects)" } else { "Games" };
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw(title).left_aligned());
        let items = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, e)| format!("{}{}", if idx == self.selected { '>' } else { ' ' }, e));
        List::new(items).block(block).highlight_symbol(">")
    }
}
