use enum_map::enum_map;
use itertools::Itertools;
use rewind_types::{GameRecord, Side};

fn rec(white: &str, black: &str, outcome: &str, moves: &str) -> GameRecord {
    GameRecord::new(
        enum_map! {
            Side::White => white.to_owned(),
            Side::Black => black.to_owned(),
        },
        outcome,
        moves
            .split_whitespace()
            .map(|s| s.parse().expect("demo move"))
            .collect_vec(),
    )
}

/// Built-in catalog used when no file is given. The "local" participant
/// matches the default `--player` so both orientations show up.
pub fn games() -> Vec<GameRecord> {
    vec![
        rec(
            "local",
            "scholar",
            "1-0",
            "e2e4 e7e5 f1c4 b8c6 d1h5 g8f6 h5f7",
        ),
        rec("fool", "local", "0-1", "f2f3 e7e5 g2g4 d8h4"),
        rec(
            "local",
            "castler",
            "*",
            "e2e4 e7e5 g1f3 b8c6 f1c4 g8f6 e1g1 f6e4",
        ),
        // Forfeit before the first move, lands straight in the end state
        rec("quitter", "local", "0-1", ""),
    ]
}
