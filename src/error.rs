use crate::COLUMNS;

/// Errors raised by the engine when a move is rejected.
///
/// Every variant is raised before the board is touched, so a rejected move
/// leaves the board, the turn and the output sink as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(
        "Invalid move, column {column} out of range. Columns must be between 1 and {}",
        COLUMNS
    )]
    OutOfBoard { column: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),
}
