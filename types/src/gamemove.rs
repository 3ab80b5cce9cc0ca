use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ParseSquareError, PieceKind, Square};

/// One recorded ply. Castling is encoded as the king's two-file move,
/// en passant as the pawn's diagonal move onto an empty square.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            let c = match kind {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                PieceKind::Queen => 'q',
                // Not reachable from coordinate form, keep Display total
                PieceKind::Pawn => 'p',
                PieceKind::King => 'k',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = ParseSquareError;

    // Long algebraic coordinates, e.g. "e2e4" or "e7e8q"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || s.len() < 4 {
            return Err(ParseSquareError);
        }
        let from = s[0..2].parse()?;
        let to = s[2..4].parse()?;
        let promotion = match &s[4..] {
            "" => None,
            "n" => Some(PieceKind::Knight),
            "b" => Some(PieceKind::Bishop),
            "r" => Some(PieceKind::Rook),
            "q" => Some(PieceKind::Queen),
            _ => return Err(ParseSquareError),
        };
        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}
