use std::{collections::VecDeque, sync::Arc};

use tracing::debug;

use rewind_types::{GameRecord, Move, Orientation, Position, Side};

use crate::error::ReplayError;

/// What a load or restart leaves behind for the controller.
///
/// `terminal` carries the record's outcome text when the loaded record
/// has no moves at all, so a zero-move game reads as finished right away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub can_forward: bool,
    pub terminal: Option<String>,
}

/// Result of a single successful step in either direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub mv: Move,
    pub can_forward: bool,
    pub can_backward: bool,
    /// Outcome text, set exactly when a forward step empties the
    /// pending queue. Never set by backward steps.
    pub terminal: Option<String>,
}

/// Owns the authoritative replay state for one navigation session.
///
/// Holds the loaded record, the split between already-applied and
/// not-yet-applied moves, and the position derived from the applied
/// prefix. `played` is always a prefix of the record's move list and
/// `played ++ pending` equals it exactly; every operation, failing or
/// not, preserves that.
pub struct ReplayEngine {
    record: Option<Arc<GameRecord>>,
    played: Vec<Move>,
    pending: VecDeque<Move>,
    position: Position,
    orientation: Orientation,
    opponent: Option<String>,
    at_terminal: bool,
}

impl Default for ReplayEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            record: None,
            played: Vec::new(),
            pending: VecDeque::new(),
            position: Position::initial(),
            orientation: Orientation::Normal,
            opponent: None,
            at_terminal: false,
        }
    }

    /// Load a record and rewind to its start. The viewer seat (and with
    /// it the board orientation and the opponent label) comes from
    /// matching `local_player` against the participants; a name matching
    /// neither is a defined fallback: unflipped board, no opponent label.
    pub fn load(&mut self, record: Arc<GameRecord>, local_player: &str) -> LoadReport {
        let seat = record.seat_of(local_player);
        self.orientation = Orientation::for_seat(seat);
        self.opponent = seat.map(|side| record.player(side.other()).to_owned());
        debug!(
            white = record.player(Side::White),
            black = record.player(Side::Black),
            moves = record.moves.len(),
            ?seat,
            "loaded record"
        );
        self.record = Some(record);
        self.rewind()
    }

    /// Back to the start of the loaded record. Idempotent.
    pub fn restart(&mut self) -> Result<LoadReport, ReplayError> {
        if self.record.is_none() {
            return Err(ReplayError::InvalidRecord);
        }
        debug!("restart");
        Ok(self.rewind())
    }

    // Rebuild played/pending/position wholesale from the loaded record.
    fn rewind(&mut self) -> LoadReport {
        let Some(record) = self.record.as_ref().map(Arc::clone) else {
            return LoadReport {
                can_forward: false,
                terminal: None,
            };
        };
        self.played.clear();
        self.pending = record.moves.iter().copied().collect();
        self.position = Position::initial();
        self.at_terminal = self.pending.is_empty();
        LoadReport {
            can_forward: !self.pending.is_empty(),
            terminal: self.at_terminal.then(|| record.outcome.clone()),
        }
    }

    /// Apply the next pending move to the position.
    pub fn step_forward(&mut self) -> Result<StepReport, ReplayError> {
        let Some(mv) = self.pending.pop_front() else {
            return Err(ReplayError::NoMoreMoves);
        };
        self.position.apply(&mv);
        self.played.push(mv);
        let terminal = if self.pending.is_empty() {
            self.at_terminal = true;
            self.record.as_ref().map(|r| r.outcome.clone())
        } else {
            None
        };
        debug!(%mv, played = self.played.len(), "step forward");
        Ok(StepReport {
            mv,
            can_forward: !self.pending.is_empty(),
            can_backward: true,
            terminal,
        })
    }

    /// Undo the most recently applied move.
    pub fn step_backward(&mut self) -> Result<StepReport, ReplayError> {
        let Some(mv) = self.played.pop() else {
            return Err(ReplayError::NoMovesPlayed);
        };
        self.position.undo_last();
        self.pending.push_front(mv);
        self.at_terminal = false;
        debug!(%mv, played = self.played.len(), "step backward");
        Ok(StepReport {
            mv,
            can_forward: true,
            can_backward: !self.played.is_empty(),
            terminal: None,
        })
    }

    #[must_use]
    pub fn can_step_forward(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn can_step_backward(&self) -> bool {
        !self.played.is_empty()
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Opponent of the local player in the loaded game, when the local
    /// player is one of the participants.
    #[must_use]
    pub fn opponent(&self) -> Option<&str> {
        self.opponent.as_deref()
    }

    #[must_use]
    pub fn record(&self) -> Option<&Arc<GameRecord>> {
        self.record.as_ref()
    }

    /// Outcome text of the loaded record once the end has been reached.
    #[must_use]
    pub fn terminal_outcome(&self) -> Option<&str> {
        (self.at_terminal && self.record.is_some())
            .then(|| self.record.as_ref().map(|r| r.outcome.as_str()))
            .flatten()
    }

    #[must_use]
    pub fn played_len(&self) -> usize {
        self.played.len()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
