use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::{Move, Side};

/// One finished (or abandoned) game: its ordered move list plus the
/// metadata the catalog carries for it. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub players: EnumMap<Side, String>,
    pub outcome: String,
    pub moves: Vec<Move>,
}

impl GameRecord {
    #[must_use]
    pub fn new(
        players: EnumMap<Side, String>,
        outcome: impl Into<String>,
        moves: Vec<Move>,
    ) -> Self {
        Self {
            players,
            outcome: outcome.into(),
            moves,
        }
    }

    /// Seat of the named participant, if they played in this game.
    /// First mover wins ties when both seats carry the same name.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Side> {
        if self.players[Side::White] == name {
            Some(Side::White)
        } else if self.players[Side::Black] == name {
            Some(Side::Black)
        } else {
            None
        }
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &str {
        &self.players[side]
    }
}

#[cfg(test)]
mod tests {
    use enum_map::enum_map;

    use super::*;

    fn record() -> GameRecord {
        GameRecord::new(
            enum_map! {
                Side::White => "ana".to_owned(),
                Side::Black => "boris".to_owned(),
            },
            "1-0",
            vec!["e2e4".parse().unwrap(), "e7e5".parse().unwrap()],
        )
    }

    #[test]
    fn seat_lookup() {
        let rec = record();
        assert_eq!(rec.seat_of("ana"), Some(Side::White));
        assert_eq!(rec.seat_of("boris"), Some(Side::Black));
        assert_eq!(rec.seat_of("carol"), None);
    }

    #[test]
    fn same_name_on_both_seats_resolves_to_first_mover() {
        let mut rec = record();
        rec.players[Side::Black] = "ana".to_owned();
        assert_eq!(rec.seat_of("ana"), Some(Side::White));
    }
}
