//! Conway's Game of Life on a fixed, bounded grid.

pub mod engine;
pub mod error;
pub mod pattern;
pub mod pos;

pub use engine::{GameOfLife, Grid, GridView, Rule, Steps};
pub use error::GridError;
pub use pattern::Pattern;
pub use pos::Pos2;
