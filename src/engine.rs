use std::fmt;
use std::iter::repeat;

use tracing::{debug, warn};

use crate::{
    Color, EngineError, OutputSink, COLUMNS, DISCS_TO_WIN, GREEN_WINNER, NO_WINNER, RED_WINNER,
    ROWS,
};

const TURN_NOTICE: &str = "R turn";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Winner {
    Nobody,
    Red,
    Green,
}

impl Winner {
    /// The public result code: "-", "R" or "G"
    pub fn code(&self) -> &'static str {
        match self {
            Winner::Nobody => NO_WINNER,
            Winner::Red => RED_WINNER,
            Winner::Green => GREEN_WINNER,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single game of Connect 4.
///
/// Columns are 1-indexed at the public interface, rows are 0-indexed from the
/// bottom. Every successful move replaces the content of the output sink with
/// the rendered board.
pub struct Connect4<S: OutputSink> {
    cells: [Color; COLUMNS * ROWS], // cells are stored left-to-right, bottom-to-top
    turn: Color,
    sink: S,
}

impl<S: OutputSink> Connect4<S> {
    pub fn new(sink: S) -> Self {
        Self {
            cells: [Color::Empty; COLUMNS * ROWS],
            turn: Color::Red,
            sink,
        }
    }

    /// Play a sequence of 1-indexed column digits, e.g. "4453"
    pub fn from_moves<M: AsRef<str>>(sink: S, moves: M) -> Result<Self, EngineError> {
        let mut game = Self::new(sink);

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => {
                    let _ = game.insert_disc(column as usize)?;
                }
                None => return Err(EngineError::InvalidMove(column_char)),
            }
        }
        Ok(game)
    }

    /// Drop a disc of the current color into a 1-indexed column.
    ///
    /// Returns the row the disc landed on.
    pub fn insert_disc(&mut self, column_one_indexed: usize) -> Result<usize, EngineError> {
        if column_one_indexed < 1 || column_one_indexed > COLUMNS {
            return Err(EngineError::OutOfBoard {
                column: column_one_indexed,
            });
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return Err(EngineError::ColumnFull {
                column: column_one_indexed,
            });
        }

        let row = self.row_for_disc(column);
        self.cells[column + COLUMNS * row] = self.turn;
        debug!(column = column_one_indexed, row, color = %self.turn, "disc inserted");
        self.turn = self.turn.other();

        let board = self.render();
        self.notify(&board);
        Ok(row)
    }

    /// The color to move next. Always posts the "R turn" notice to the sink.
    pub fn get_next_turn(&mut self) -> Color {
        debug!(color = %self.turn, "turn requested");
        self.notify(TURN_NOTICE);
        self.turn
    }

    pub fn get_number_of_discs(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// True once every cell holds a disc. A won game is not finished.
    pub fn is_finished(&self) -> bool {
        self.get_number_of_discs() == ROWS * COLUMNS
    }

    /// Scan columns, rows, up-right diagonals then up-left diagonals and
    /// report the first line holding four discs of one color.
    pub fn winner(&self) -> Winner {
        self.lines()
            .iter()
            .map(|line| check_line(line))
            .find(|winner| *winner != Winner::Nobody)
            .unwrap_or(Winner::Nobody)
    }

    pub fn is_column_full(&self, column_one_indexed: usize) -> Result<bool, EngineError> {
        if column_one_indexed < 1 || column_one_indexed > COLUMNS {
            return Err(EngineError::OutOfBoard {
                column: column_one_indexed,
            });
        }
        Ok(!self.playable(column_one_indexed - 1))
    }

    /// The cell at a 0-indexed row and column, `None` off the board
    pub fn cell(&self, row: usize, column: usize) -> Option<Color> {
        if row >= ROWS || column >= COLUMNS {
            return None;
        }
        Some(self.cells[column + COLUMNS * row])
    }

    /// The board as text, top row first: `|R|G| | | | | |` per row
    pub fn render(&self) -> String {
        let mut board = String::with_capacity(ROWS * (2 * COLUMNS + 2));
        for row in (0..ROWS).rev() {
            for column in 0..COLUMNS {
                board.push('|');
                board.push(self.cells[column + COLUMNS * row].symbol());
            }
            board.push_str("|\n");
        }
        board
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn playable(&self, column: usize) -> bool {
        self.cells[column + COLUMNS * (ROWS - 1)].is_empty()
    }

    fn row_for_disc(&self, column: usize) -> usize {
        (0..ROWS)
            .find(|&row| self.cells[column + COLUMNS * row].is_empty())
            .unwrap_or(0)
    }

    // write failures are logged and dropped, the move itself stands
    fn notify(&mut self, message: &str) {
        self.sink.reset();
        if let Err(err) = self.sink.write(message.as_bytes()) {
            warn!(%err, "failed to write to output sink");
        }
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        // vertical, bottom to top
        for column in 0..COLUMNS {
            lines.push(self.line(0, column, 1, 0));
        }
        // horizontal, left to right
        for row in 0..ROWS {
            lines.push(self.line(row, 0, 0, 1));
        }
        // each diagonal direction walks bottom-row starts left to right, then edge
        // starts bottom to top; that order decides between two wins in one direction
        // up-right diagonals start on the bottom row or the left edge
        for column in 0..COLUMNS {
            lines.push(self.line(0, column, 1, 1));
        }
        for row in 1..ROWS {
            lines.push(self.line(row, 0, 1, 1));
        }
        // up-left diagonals start on the bottom row or the right edge
        for column in 0..COLUMNS {
            lines.push(self.line(0, column, 1, -1));
        }
        for row in 1..ROWS {
            lines.push(self.line(row, COLUMNS - 1, 1, -1));
        }
        lines
    }

    fn line(&self, row: usize, column: usize, dy: i32, dx: i32) -> String {
        let mut line = String::new();
        let (mut y, mut x) = (row as i32, column as i32);
        while y >= 0 && y < ROWS as i32 && x >= 0 && x < COLUMNS as i32 {
            line.push(self.cells[x as usize + COLUMNS * y as usize].symbol());
            y += dy;
            x += dx;
        }
        line
    }
}

fn check_line(line: &str) -> Winner {
    if line.len() < DISCS_TO_WIN {
        return Winner::Nobody;
    }
    let red: String = repeat(Color::Red.symbol()).take(DISCS_TO_WIN).collect();
    let green: String = repeat(Color::Green.symbol()).take(DISCS_TO_WIN).collect();

    if line.contains(&red) {
        Winner::Red
    } else if line.contains(&green) {
        Winner::Green
    } else {
        Winner::Nobody
    }
}
