use crate::{Move, Piece, PieceKind, Side, Square};

/// Board state built by applying a prefix of a recorded move list.
///
/// Moves come from an already-validated record, so there is no legality
/// checking here. Every `apply` records what it displaced, which makes
/// `undo_last` an exact inverse without replaying from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: [Option<Piece>; 64],
    to_move: Side,
    undo_stack: Vec<Undo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Undo {
    from: Square,
    to: Square,
    // Piece as it stood on `from`, before any promotion
    moved: Option<Piece>,
    // Captured piece with the square it stood on (en passant differs from `to`)
    captured: Option<(Square, Piece)>,
    // Rook hop for castling, (from, to)
    rook: Option<(Square, Square)>,
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn initial() -> Self {
        use PieceKind::*;
        let mut board = [None; 64];
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for side in [Side::White, Side::Black] {
            let rank = side.back_rank();
            let pawn_rank = match side {
                Side::White => 1,
                Side::Black => 6,
            };
            for (file, kind) in back.into_iter().enumerate() {
                board[Square::new(file as u8, rank).index()] = Some(Piece::new(kind, side));
            }
            for file in 0..8 {
                board[Square::new(file, pawn_rank).index()] = Some(Piece::new(Pawn, side));
            }
        }
        Self {
            board,
            to_move: Side::White,
            undo_stack: Vec::new(),
        }
    }

    #[must_use]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Number of moves applied and not yet undone.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    fn take(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index()].take()
    }

    fn put(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.index()] = piece;
    }

    /// Apply one recorded move. Total even on garbage input: an empty
    /// `from` square still pushes an undo entry so apply/undo stay paired.
    pub fn apply(&mut self, mv: &Move) {
        let moved = self.take(mv.from);
        let mut captured = self.take(mv.to).map(|p| (mv.to, p));
        let mut rook = None;
        if let Some(piece) = moved {
            // Pawn slanting onto an empty square captures en passant
            if piece.kind == PieceKind::Pawn
                && captured.is_none()
                && mv.from.file() != mv.to.file()
            {
                let ep = Square::new(mv.to.file(), mv.from.rank());
                captured = self.take(ep).map(|p| (ep, p));
            }
            // King moving two files carries the rook over
            if piece.kind == PieceKind::King && mv.from.file().abs_diff(mv.to.file()) == 2 {
                let rank = mv.from.rank();
                let (rf, rt) = if mv.to.file() > mv.from.file() {
                    (Square::new(7, rank), Square::new(5, rank))
                } else {
                    (Square::new(0, rank), Square::new(3, rank))
                };
                let hopped = self.take(rf);
                self.put(rt, hopped);
                rook = Some((rf, rt));
            }
            let landing = match mv.promotion {
                Some(kind) => Piece::new(kind, piece.side),
                None => piece,
            };
            self.put(mv.to, Some(landing));
        }
        self.to_move = self.to_move.other();
        self.undo_stack.push(Undo {
            from: mv.from,
            to: mv.to,
            moved,
            captured,
            rook,
        });
    }

    /// Revert the most recent `apply`. Returns false when nothing has
    /// been applied.
    pub fn undo_last(&mut self) -> bool {
        let Some(undo) = self.undo_stack.pop() else {
            return false;
        };
        if let Some((rf, rt)) = undo.rook {
            let hopped = self.take(rt);
            self.put(rf, hopped);
        }
        self.put(undo.to, None);
        if let Some((square, piece)) = undo.captured {
            self.put(square, Some(piece));
        }
        self.put(undo.from, undo.moved);
        self.to_move = self.to_move.other();
        true
    }
}
