use std::fmt;

/// Custom error types for the colony simulation
#[derive(Debug)]
pub enum SimError {
    /// World construction parameters are unusable
    InvalidWorld(String),
    /// A guidance cell coincided with the ant's own cell (zero Chebyshev
    /// distance); the search contract forbids this
    DegenerateGuidance { x: i32, y: i32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidWorld(msg) => write!(f, "invalid world: {}", msg),
            SimError::DegenerateGuidance { x, y } => {
                write!(f, "guidance cell at zero distance from ant at ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
