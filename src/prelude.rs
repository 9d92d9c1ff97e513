pub use crate::builder::*;
pub use crate::cube::symmetry::reorientations;
pub use crate::cube::*;
pub use crate::error::*;
pub use crate::r#move::*;
pub use crate::solver::*;
pub use crate::table::*;
