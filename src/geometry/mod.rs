mod coords;
mod matrix;

pub use coords::CoordSystem;
pub use matrix::{Decomposed, Matrix};
