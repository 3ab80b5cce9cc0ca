use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReplayError {
    /// No usable record to operate on.
    #[error("no game record loaded")]
    InvalidRecord,
    /// Forward step attempted at the end of the record. Recoverable,
    /// callers check `can_step_forward` or treat this as a no-op.
    #[error("no moves left to play")]
    NoMoreMoves,
    /// Backward step attempted at the start. Recoverable, same as above.
    #[error("no moves have been played yet")]
    NoMovesPlayed,
    /// Catalog lookup with an out-of-range index.
    #[error("no game in the catalog at index {index}")]
    RecordNotFound { index: usize },
}
