pub mod cell;
pub mod grid;
pub mod resource;

pub use cell::{Cell, CellKind};
pub use grid::{Objective, PheromoneGrid};
pub use resource::{Food, Nest};
