//! The 4x4 matrix keypad alphabet.
//!
//! The keypad reports at most one key per scan. Rows are driven low one at a
//! time and the first column reading low wins, so the layout below also
//! defines the priority when several keys are held.

/// Key layout, indexed `[row][col]`.
pub const KEY_MAP: [[char; 4]; 4] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// A single keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Numeric key `0`..=`9`.
    Digit(u8),
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

impl Key {
    /// Parse a keypad character. Letters are accepted in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            'A' | 'a' => Some(Self::A),
            'B' | 'b' => Some(Self::B),
            'C' | 'c' => Some(Self::C),
            'D' | 'd' => Some(Self::D),
            '*' => Some(Self::Star),
            '#' => Some(Self::Hash),
            _ => None,
        }
    }

    /// The character printed on the key cap.
    pub fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + (*d).min(9)),
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::Star => '*',
            Self::Hash => '#',
        }
    }

    /// Key at a matrix position, or `None` outside the 4x4 grid.
    pub fn from_matrix(row: usize, col: usize) -> Option<Self> {
        KEY_MAP
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|&c| Self::from_char(c))
    }
}
