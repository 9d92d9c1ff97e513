//! Optimal solver for the 2x2x2 pocket cube.
//!
//! A breadth-first exploration of the full state graph (3,674,160 states
//! after orientation reduction) records, for every reachable state, the move
//! that produced it and its parent. Solving is then a walk along parent
//! pointers back to the solved state.

mod builder;
mod cube;
mod error;
mod r#move;
mod solver;
mod table;

pub mod prelude;

pub use prelude::*;
