//! # Ant Forage
//!
//! Emergent foraging of an ant colony on a discrete grid, driven by
//! pheromone-trail reinforcement and decay.
//!
//! There is no global pathfinding: each ant senses a direction-biased
//! horizon around itself and steers toward stronger trails or visible
//! goals, and converging trails emerge from reinforcement alone. This
//! library is the simulation core; the binary is a headless driver.

pub mod ant;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod heading;
pub mod simulation;

pub use ant::{Ant, Mode};
pub use cli::Args;
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use grid::{Cell, CellKind, Food, Nest, Objective, PheromoneGrid};
pub use heading::Heading;
pub use simulation::Colony;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Cell, CellKind, Colony, Food, Heading, Mode, Nest, PheromoneGrid, Result,
        SimConfig, SimError,
    };
}
