//! Fundamental types shared by both search engines.
//!
//! - [`Cell`]: a (row, column) grid coordinate
//! - [`Grid`]: the n×n board with its obstacle set and the two
//!   successor-generation policies
//! - [`manhattan`]: the distance heuristic

pub mod cell;
pub mod grid;
pub mod heuristic;

pub use cell::Cell;
pub use grid::{Grid, FREE_COST, OBSTACLE_COST};
pub use heuristic::manhattan;
