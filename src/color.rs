use std::fmt;

/// The content of a single board cell, also used for the player to move
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    Red,
    Green,
    Empty,
}

impl Color {
    /// The character a cell of this color is rendered as
    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Empty => ' ',
        }
    }

    /// Color name for display
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Empty => "Empty",
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Color::Empty => true,
            _ => false,
        }
    }

    /// The opposing player, `Empty` has no opponent and maps to itself
    pub fn other(&self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Red,
            Color::Empty => Color::Empty,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
