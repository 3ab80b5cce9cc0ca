use tracing::warn;

use rewind_types::{Orientation, Position};

use crate::{catalog::Catalog, engine::ReplayEngine, error::ReplayError};

/// Drawing collaborator. Called after every state-changing operation,
/// fire-and-forget.
pub trait Renderer {
    fn draw(&mut self, position: &Position, orientation: Orientation);
}

/// Mediates between the engine and the UI surface: owns the control
/// enablement flags and label text as plain state, derived purely from
/// the engine's reports, and triggers redraws.
///
/// Boundary presses on a disabled direction are no-ops here, never
/// errors; bad catalog indices are surfaced and leave all state alone.
pub struct NavigationController<R> {
    engine: ReplayEngine,
    catalog: Catalog,
    local_player: String,
    renderer: R,
    forward_enabled: bool,
    backward_enabled: bool,
    opponent_label: Option<String>,
    outcome_label: Option<String>,
}

impl<R: Renderer> NavigationController<R> {
    #[must_use]
    pub fn new(catalog: Catalog, local_player: impl Into<String>, renderer: R) -> Self {
        Self {
            engine: ReplayEngine::new(),
            catalog,
            local_player: local_player.into(),
            renderer,
            forward_enabled: false,
            backward_enabled: false,
            opponent_label: None,
            outcome_label: None,
        }
    }

    /// Load the catalog entry at `index` and rewind to its start.
    /// Selecting the same entry twice lands in the same state as once.
    pub fn select_game(&mut self, index: usize) -> Result<(), ReplayError> {
        let record = self.catalog.get(index)?;
        let report = self.engine.load(record, &self.local_player);
        self.opponent_label = self.engine.opponent().map(str::to_owned);
        self.backward_enabled = false;
        self.forward_enabled = report.can_forward;
        self.outcome_label = report.terminal;
        self.redraw();
        Ok(())
    }

    /// Apply the next move. No-op when the forward control is disabled.
    pub fn forward(&mut self) {
        if !self.forward_enabled {
            return;
        }
        match self.engine.step_forward() {
            Ok(report) => {
                self.backward_enabled = true;
                self.forward_enabled = report.can_forward;
                if report.terminal.is_some() {
                    self.outcome_label = report.terminal;
                }
                self.redraw();
            }
            Err(err) => warn!(%err, "forward control enabled past the end"),
        }
    }

    /// Take back the last applied move. No-op when disabled.
    pub fn back(&mut self) {
        if !self.backward_enabled {
            return;
        }
        match self.engine.step_backward() {
            Ok(report) => {
                self.forward_enabled = true;
                self.backward_enabled = report.can_backward;
                self.outcome_label = None;
                self.redraw();
            }
            Err(err) => warn!(%err, "backward control enabled at the start"),
        }
    }

    /// Rewind the loaded game to its start.
    pub fn restart(&mut self) -> Result<(), ReplayError> {
        let report = self.engine.restart()?;
        self.backward_enabled = false;
        self.forward_enabled = report.can_forward;
        self.outcome_label = report.terminal;
        self.redraw();
        Ok(())
    }

    fn redraw(&mut self) {
        self.renderer
            .draw(self.engine.position(), self.engine.orientation());
    }

    #[must_use]
    pub fn forward_enabled(&self) -> bool {
        self.forward_enabled
    }

    #[must_use]
    pub fn backward_enabled(&self) -> bool {
        self.backward_enabled
    }

    #[must_use]
    pub fn opponent_label(&self) -> Option<&str> {
        self.opponent_label.as_deref()
    }

    #[must_use]
    pub fn outcome_label(&self) -> Option<&str> {
        self.outcome_label.as_deref()
    }

    #[must_use]
    pub fn local_player(&self) -> &str {
        &self.local_player
    }

    #[must_use]
    pub fn engine(&self) -> &ReplayEngine {
        &self.engine
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use enum_map::enum_map;
    use rewind_types::{GameRecord, Side};

    use super::*;

    #[derive(Default)]
    struct CountingRenderer {
        draws: usize,
        last_orientation: Option<Orientation>,
    }

    impl Renderer for CountingRenderer {
        fn draw(&mut self, _position: &Position, orientation: Orientation) {
            self.draws += 1;
            self.last_orientation = Some(orientation);
        }
    }

    fn record(white: &str, black: &str, outcome: &str, moves: &[&str]) -> GameRecord {
        GameRecord::new(
            enum_map! {
                Side::White => white.to_owned(),
                Side::Black => black.to_owned(),
            },
            outcome,
            moves.iter().map(|s| s.parse().unwrap()).collect(),
        )
    }

    fn controller() -> NavigationController<CountingRenderer> {
        let catalog = Catalog::new(vec![
            record("ana", "boris", "1-0", &["e2e4", "e7e5", "g1f3", "b8c6"]),
            record("carol", "ana", "0-1", &["d2d4", "d7d5"]),
            record("ana", "boris", "1/2-1/2", &[]),
        ]);
        NavigationController::new(catalog, "ana", CountingRenderer::default())
    }

    #[test]
    fn select_enters_start_state() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        assert!(nav.forward_enabled());
        assert!(!nav.backward_enabled());
        assert_eq!(nav.opponent_label(), Some("boris"));
        assert_eq!(nav.outcome_label(), None);
        assert_eq!(nav.renderer().draws, 1);
    }

    #[test]
    fn walk_through_to_end_state() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        for _ in 0..4 {
            nav.forward();
        }
        assert!(!nav.forward_enabled());
        assert!(nav.backward_enabled());
        assert_eq!(nav.outcome_label(), Some("1-0"));
        assert_eq!(nav.engine().played_len(), 4);
        // Extra presses on the disabled control change nothing
        nav.forward();
        assert_eq!(nav.engine().played_len(), 4);
        assert_eq!(nav.renderer().draws, 5);
    }

    #[test]
    fn back_from_end_clears_outcome() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        for _ in 0..4 {
            nav.forward();
        }
        nav.back();
        assert!(nav.forward_enabled());
        assert!(nav.backward_enabled());
        assert_eq!(nav.outcome_label(), None);
        assert_eq!(nav.engine().played_len(), 3);
        assert_eq!(nav.engine().pending_len(), 1);
    }

    #[test]
    fn back_to_start_disables_backward() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        nav.forward();
        nav.back();
        assert!(!nav.backward_enabled());
        assert!(nav.forward_enabled());
        // Disabled control is a no-op
        nav.back();
        assert_eq!(nav.engine().played_len(), 0);
    }

    #[test]
    fn selecting_flipped_game_reorients() {
        let mut nav = controller();
        nav.select_game(1).unwrap();
        assert_eq!(nav.opponent_label(), Some("carol"));
        assert_eq!(nav.renderer().last_orientation, Some(Orientation::Flipped));
    }

    #[test]
    fn switching_games_mid_replay_resets() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        nav.forward();
        nav.forward();
        nav.select_game(1).unwrap();
        assert!(!nav.backward_enabled());
        assert!(nav.forward_enabled());
        assert_eq!(nav.engine().played_len(), 0);
        assert_eq!(nav.engine().pending_len(), 2);
        assert_eq!(nav.outcome_label(), None);
    }

    #[test]
    fn selecting_same_game_twice_is_idempotent() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        nav.forward();
        nav.select_game(0).unwrap();
        assert!(!nav.backward_enabled());
        assert!(nav.forward_enabled());
        assert_eq!(nav.engine().played_len(), 0);
        assert_eq!(nav.outcome_label(), None);
    }

    #[test]
    fn zero_move_game_is_terminal_immediately() {
        let mut nav = controller();
        nav.select_game(2).unwrap();
        assert!(!nav.forward_enabled());
        assert!(!nav.backward_enabled());
        assert_eq!(nav.outcome_label(), Some("1/2-1/2"));
    }

    #[test]
    fn bad_index_leaves_state_untouched() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        nav.forward();
        let err = nav.select_game(9).unwrap_err();
        assert_eq!(err, ReplayError::RecordNotFound { index: 9 });
        assert_eq!(nav.engine().played_len(), 1);
        assert!(nav.forward_enabled());
        assert!(nav.backward_enabled());
    }

    #[test]
    fn restart_returns_to_start_state() {
        let mut nav = controller();
        nav.select_game(0).unwrap();
        nav.forward();
        nav.forward();
        nav.restart().unwrap();
        assert!(!nav.backward_enabled());
        assert!(nav.forward_enabled());
        assert_eq!(nav.engine().played_len(), 0);
        assert_eq!(nav.outcome_label(), None);
        nav.restart().unwrap();
        assert_eq!(nav.engine().played_len(), 0);
    }

    #[test]
    fn restart_before_any_selection_fails() {
        let mut nav = controller();
        assert_eq!(nav.restart().unwrap_err(), ReplayError::InvalidRecord);
    }
}
