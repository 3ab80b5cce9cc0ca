use std::{io, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    DefaultTerminal, Frame,
};
use rewind::{Catalog, NavigationController};
use tracing::warn;

use crate::{board::BoardView, games::GameList, popup::Popup, status::StatusView};

enum Mode {
    Replay,
    Games,
}

pub enum Message {
    Quit,
    Forward,
    Back,
    Restart,
    OpenGames,
    CloseGames,
    SelectGame(usize),
}

pub struct App {
    nav: NavigationController<BoardView>,
    games: GameList,
    status: StatusView,
    mode: Mode,
}

impl App {
    pub fn new(catalog: Catalog, local_player: String) -> Self {
        let entries = catalog.entries().collect();
        let mut nav = NavigationController::new(catalog, local_player, BoardView::default());
        // The first catalog entry is on screen from the start, matching
        // the selection list's initial cursor
        if !nav.catalog().is_empty() {
            let _ = nav.select_game(0);
        }
        Self {
            nav,
            games: GameList::new(entries),
            status: StatusView,
            mode: Mode::Replay,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                match message {
                    Message::Quit => break,
                    Message::Forward => self.nav.forward(),
                    Message::Back => self.nav.back(),
                    Message::Restart => {
                        if let Err(err) = self.nav.restart() {
                            warn!(%err, "restart ignored");
                        }
                    }
                    Message::OpenGames => self.mode = Mode::Games,
                    Message::CloseGames => self.mode = Mode::Replay,
                    Message::SelectGame(idx) => {
                        if let Err(err) = self.nav.select_game(idx) {
                            warn!(%err, "selection ignored");
                        }
                        self.mode = Mode::Replay;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(Duration::from_millis(100)).ok()? {
            let event = event::read().ok()?;
            if let Event::Key(key_ev) = &event {
                return match self.mode {
                    Mode::Replay => match key_ev.code {
                        KeyCode::Char('q') => Some(Message::Quit),
                        KeyCode::Right | KeyCode::Char('l') => Some(Message::Forward),
                        KeyCode::Left | KeyCode::Char('h') => Some(Message::Back),
                        KeyCode::Char('r') => Some(Message::Restart),
                        KeyCode::Char('g') => Some(Message::OpenGames),
                        _ => None,
                    },
                    Mode::Games => match key_ev.code {
                        KeyCode::Char('q') => Some(Message::Quit),
                        KeyCode::Esc => Some(Message::CloseGames),
                        _ => self.games.update(&event),
                    },
                };
            }
        }
        None
    }

    fn draw(&self, frame: &mut Frame) {
        let horizontal =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]);
        let [left, right] = horizontal.areas(frame.area());
        let board_rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(1),
        ]);
        let [opponent_row, board_area, player_row] = board_rows.areas(left);
        frame.render_widget(
            Line::raw(self.nav.opponent_label().unwrap_or("")),
            opponent_row,
        );
        frame.render_widget(self.nav.renderer().widget(), board_area);
        frame.render_widget(Line::raw(self.nav.local_player()), player_row);

        let vertical = Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]);
        let [games_area, status_area] = vertical.areas(right);
        frame.render_widget(
            self.games.draw(matches!(self.mode, Mode::Games)),
            games_area,
        );
        frame.render_widget(self.status.draw(&self.nav), status_area);

        if let Some(outcome) = self.nav.outcome_label() {
            let area = Rect {
                x: (frame.area().width / 2).saturating_sub(15),
                y: (frame.area().height / 2).saturating_sub(2),
                width: 30.min(frame.area().width),
                height: 4.min(frame.area().height),
            };
            frame.render_widget(
                Popup::default()
                    .title("Game over".to_string())
                    .content(outcome.to_string())
                    .border_style(Style::default().fg(Color::Yellow)),
                area,
            );
        }
    }
}
