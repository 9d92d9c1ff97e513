use crate::prelude::*;

pub mod symmetry;

pub const KEY_LEN: usize = 24;

/// Key of the solved cube: face blocks in U, D, F, B, L, R order, row-major
/// within each face, with the fixed coloring U=B, D=G, F=O, B=R, L=W, R=Y.
pub const SOLVED_KEY: &str = "BBBBGGGGOOOORRRRWWWWYYYY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Color {
    Blue,
    Green,
    Orange,
    Red,
    White,
    Yellow,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::White => 'W',
            Color::Yellow => 'Y',
        }
    }

    fn from_letter(letter: char) -> Option<Color> {
        match letter {
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'O' => Some(Color::Orange),
            'R' => Some(Color::Red),
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// Sticker sources for each layer turn: after applying a turn, the sticker at
// position i is the one that was at TURNS[turn][i]. Positions are face-block
// offsets in U, D, F, B, L, R order, row-major within each 2x2 face.
pub(crate) const TURNS: [[u8; 24]; 6] = [
    // Up
    [
        2, 0, 3, 1, 4, 5, 6, 7, 16, 17, 10, 11, 20, 21, 14, 15, 12, 13, 18, 19, 8, 9, 22, 23,
    ],
    // Down
    [
        0, 1, 2, 3, 5, 7, 4, 6, 8, 9, 18, 19, 12, 13, 22, 23, 16, 17, 14, 15, 20, 21, 10, 11,
    ],
    // Front
    [
        18, 16, 2, 3, 21, 23, 6, 7, 9, 11, 8, 10, 12, 13, 14, 15, 5, 17, 4, 19, 20, 0, 22, 1,
    ],
    // Back
    [
        0, 1, 19, 17, 4, 5, 20, 22, 8, 9, 10, 11, 14, 12, 15, 13, 16, 7, 18, 6, 2, 21, 3, 23,
    ],
    // Left
    [
        12, 1, 14, 3, 4, 9, 6, 11, 8, 2, 10, 0, 7, 13, 5, 15, 17, 19, 16, 18, 20, 21, 22, 23,
    ],
    // Right
    [
        0, 13, 2, 15, 8, 5, 10, 7, 3, 9, 1, 11, 12, 6, 14, 4, 16, 17, 18, 19, 22, 20, 23, 21,
    ],
];

/// One 2x2x2 sticker configuration. A plain value type: applying a move
/// consumes and returns, so trying a move on a copy never disturbs the
/// original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    stickers: [Color; KEY_LEN],
}

impl Cube {
    pub fn solved() -> Cube {
        let mut stickers = [Color::Blue; KEY_LEN];
        let face_colors = [
            Color::Blue,
            Color::Green,
            Color::Orange,
            Color::Red,
            Color::White,
            Color::Yellow,
        ];
        for (block, color) in face_colors.into_iter().enumerate() {
            for offset in 0..4 {
                stickers[block * 4 + offset] = color;
            }
        }
        Cube { stickers }
    }

    pub fn apply(mut self, move_: Move) -> Cube {
        let sources = &TURNS[move_.index()];
        let old = self.stickers;
        for (position, &source) in sources.iter().enumerate() {
            self.stickers[position] = old[source as usize];
        }
        self
    }

    pub fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Cube {
        moves.into_iter().fold(self, |cube, move_| cube.apply(move_))
    }

    /// Deterministic flatten to the 24-character state key.
    pub fn key(&self) -> StateKey {
        self.stickers.iter().map(|color| color.letter()).collect()
    }

    /// Checked inverse of [`Cube::key`]. Rejects keys of the wrong length,
    /// with characters outside the six color codes, or without exactly four
    /// stickers of each color.
    pub fn from_key(key: &str) -> Result<Cube> {
        let length = key.chars().count();
        if length != KEY_LEN {
            return Err(Error::InvalidLength { got: length });
        }

        let mut stickers = [Color::Blue; KEY_LEN];
        let mut counts = [0usize; 6];
        for (position, character) in key.chars().enumerate() {
            let color = Color::from_letter(character)
                .ok_or(Error::InvalidColor { character, position })?;
            counts[color as usize] += 1;
            stickers[position] = color;
        }

        for (color, count) in enum_iterator::all::<Color>().zip(counts) {
            if count != 4 {
                return Err(Error::InvalidColorCount {
                    color: color.letter(),
                    count,
                });
            }
        }

        Ok(Cube { stickers })
    }

    pub(crate) fn permuted(&self, sources: &[u8; KEY_LEN]) -> Cube {
        let mut stickers = self.stickers;
        for (position, &source) in sources.iter().enumerate() {
            stickers[position] = self.stickers[source as usize];
        }
        Cube { stickers }
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let face = |block: usize| &self.stickers[block * 4..block * 4 + 4];
        let row = |stickers: &[Color], index: usize| {
            format!("{}{}", stickers[index * 2], stickers[index * 2 + 1])
        };

        for index in 0..2 {
            writeln!(f, "   {}", row(face(0), index))?;
        }
        for index in 0..2 {
            writeln!(
                f,
                "{} {} {} {}",
                row(face(4), index),
                row(face(2), index),
                row(face(5), index),
                row(face(3), index),
            )?;
        }
        for index in 0..2 {
            writeln!(f, "   {}", row(face(1), index))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn nth_move(byte: u8) -> Move {
        Move::all().nth((byte % 6) as usize).unwrap()
    }

    fn scrambled(bytes: &[u8]) -> Cube {
        Cube::solved().apply_all(bytes.iter().map(|&b| nth_move(b)))
    }

    #[test]
    fn solved_key_is_the_fixed_constant() {
        assert_eq!(Cube::solved().key(), SOLVED_KEY);
    }

    #[test]
    fn up_turn_cycles_the_top_rows() {
        let cube = Cube::solved().apply(Move::Up);
        assert_eq!(cube.key(), "BBBBGGGGWWOOYYRRRRWWOOYY");
    }

    #[test]
    fn turns_permute_every_sticker_exactly_once() {
        for sources in TURNS {
            let mut seen = [false; KEY_LEN];
            for source in sources {
                seen[source as usize] = true;
            }
            assert!(seen.into_iter().all(|hit| hit));
        }
    }

    #[quickcheck]
    fn four_identical_turns_restore_the_cube(scramble: Vec<u8>, turn: u8) -> bool {
        let cube = scrambled(&scramble);
        let move_ = nth_move(turn);
        cube.apply(move_).apply(move_).apply(move_).apply(move_) == cube
    }

    #[quickcheck]
    fn key_and_from_key_round_trip(scramble: Vec<u8>) -> bool {
        let cube = scrambled(&scramble);
        Cube::from_key(&cube.key()).map_or(false, |loaded| loaded == cube)
    }

    #[test]
    fn from_key_rejects_bad_input() {
        assert!(matches!(
            Cube::from_key("BBB"),
            Err(Error::InvalidLength { got: 3 })
        ));
        assert!(matches!(
            Cube::from_key("XBBBGGGGOOOORRRRWWWWYYYY"),
            Err(Error::InvalidColor { character: 'X', position: 0 })
        ));
        assert!(matches!(
            Cube::from_key("BBBBBGGGOOOORRRRWWWWYYYY"),
            Err(Error::InvalidColorCount { color: 'B', count: 5 })
        ));
    }

    #[test]
    fn displays_an_unfolded_net() {
        let expected = "   BB\n   BB\nWW OO YY RR\nWW OO YY RR\n   GG\n   GG\n";
        assert_eq!(Cube::solved().to_string(), expected);
    }
}
