use serde::{Deserialize, Serialize};

/// One clockwise quarter turn of a single layer. These six generators are
/// the only moves the tree builder ever applies; counterclockwise turns are
/// expressed by the holder undoing a recorded clockwise turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence, Serialize, Deserialize,
)]
#[serde(into = "char", try_from = "char")]
pub enum Move {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Move {
    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all()
    }

    /// Stable small-integer code, 0 through 5 in U, D, F, B, L, R order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter layer code.
    pub fn letter(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Front => 'F',
            Move::Back => 'B',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl From<Move> for char {
    fn from(move_: Move) -> char {
        move_.letter()
    }
}

impl TryFrom<char> for Move {
    type Error = String;

    fn try_from(letter: char) -> Result<Move, String> {
        match letter {
            'U' | 'u' => Ok(Move::Up),
            'D' | 'd' => Ok(Move::Down),
            'F' | 'f' => Ok(Move::Front),
            'B' | 'b' => Ok(Move::Back),
            'L' | 'l' => Ok(Move::Left),
            'R' | 'r' => Ok(Move::Right),
            _ => Err(format!("unrecognized layer {}", letter)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
