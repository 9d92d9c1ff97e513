use crate::prelude::*;

use super::TURNS;

/// Whole-cube reorientation permutations.
///
/// Turning the up and down layers together rotates the whole cube about the
/// vertical axis without changing which stickers are neighbors; the
/// front/back and left/right pairs do the same about the other two axes.
/// Walking six choices of "which face is up" with four vertical spins each
/// visits all 24 orientations; the table records the composed sticker
/// permutation at every stop.
lazy_static::lazy_static! {
    static ref ORIENTATIONS: [[u8; KEY_LEN]; 24] = orientation_table();
}

pub fn init() {
    lazy_static::initialize(&ORIENTATIONS);
}

/// All 24 orientation-equivalent configurations of `cube`, the cube itself
/// among them. The input is left untouched.
pub fn reorientations(cube: &Cube) -> [Cube; 24] {
    let table: [[u8; KEY_LEN]; 24] = *ORIENTATIONS;
    table.map(|sources| cube.permuted(&sources))
}

fn orientation_table() -> [[u8; KEY_LEN]; 24] {
    let mut current: [u8; KEY_LEN] = std::array::from_fn(|position| position as u8);
    let mut table = [[0u8; KEY_LEN]; 24];
    let mut recorded = 0;

    for pass in 1..=6 {
        for _ in 0..4 {
            current = turned(turned(current, Move::Up), Move::Down);
            table[recorded] = current;
            recorded += 1;
        }
        match pass {
            1 | 2 | 3 => current = turned(turned(current, Move::Front), Move::Back),
            4 => current = turned(turned(current, Move::Left), Move::Right),
            5 => {
                current = turned(turned(current, Move::Left), Move::Right);
                current = turned(turned(current, Move::Left), Move::Right);
            }
            _ => {}
        }
    }

    table
}

fn turned(current: [u8; KEY_LEN], move_: Move) -> [u8; KEY_LEN] {
    let sources = &TURNS[move_.index()];
    std::array::from_fn(|position| current[sources[position] as usize])
}
