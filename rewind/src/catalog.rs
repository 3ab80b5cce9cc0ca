use std::sync::Arc;

use rewind_types::{GameRecord, Side};

use crate::error::ReplayError;

/// The set of recorded games a session can navigate between. Records
/// are handed out as shared references, the catalog stays the owner.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Arc<GameRecord>>,
}

impl Catalog {
    #[must_use]
    pub fn new(games: Vec<GameRecord>) -> Self {
        Self {
            games: games.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Result<Arc<GameRecord>, ReplayError> {
        self.games
            .get(index)
            .map(Arc::clone)
            .ok_or(ReplayError::RecordNotFound { index })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Display labels for a selection list, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = String> + '_ {
        self.games.iter().map(|game| {
            format!(
                "{} vs {} · {}",
                game.player(Side::White),
                game.player(Side::Black),
                game.outcome
            )
        })
    }
}
