use std::fmt::Display;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    // Rank the side's pieces start on, 0-indexed
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Which side's perspective a position is rendered from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Normal,
    Flipped,
}

impl Orientation {
    /// Perspective for a viewer seated on `seat`. `None` falls back to
    /// the unflipped view.
    #[must_use]
    pub fn for_seat(seat: Option<Side>) -> Self {
        match seat {
            Some(Side::Black) => Orientation::Flipped,
            _ => Orientation::Normal,
        }
    }

    #[must_use]
    pub const fn is_flipped(self) -> bool {
        matches!(self, Orientation::Flipped)
    }
}
