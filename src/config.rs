/// Immutable simulation parameters, handed to the colony at construction.
///
/// One explicit structure instead of process-wide constants so parameter
/// sweeps and tests can build worlds side by side.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Nest center; `None` picks a random spot in the origin-corner tenth
    /// of the grid
    pub nest: Option<(i32, i32)>,
    /// Nest footprint radius (Euclidean disk)
    pub nest_radius: i32,
    /// Number of food piles scattered at construction
    pub food_sources: usize,
    /// Inclusive range for the shared amount of each scattered pile
    pub food_min_amount: u32,
    pub food_max_amount: u32,
    /// Side of the square food footprint
    pub food_size: i32,
    /// Saturation ceiling for every pheromone counter
    pub max_level: u16,
    /// Maximum scan distance of the directional sensing
    pub horizon: i32,
    /// Ticks an ant may go without reaching nest or food
    pub age_threshold: u32,
    /// Ants spawned immediately at construction
    pub initial_population: usize,
    /// Hard ceiling on the live population
    pub population_cap: usize,
    /// Per-tick probability of spawning one ant while under the cap
    pub spawn_chance: f32,
    /// Probability of taking the random-walk branch instead of sensing;
    /// zero disables exploration entirely (deterministic tests)
    pub explore_chance: f32,
    /// Trail strength divisors: deposit = (age_threshold - age) / divisor
    pub to_nest_divisor: u32,
    pub to_food_divisor: u32,
    /// Mute per-ant event lines
    pub suppress_events: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            nest: None,
            nest_radius: 3,
            food_sources: 10,
            food_min_amount: 500,
            food_max_amount: 1000,
            food_size: 2,
            max_level: 255,
            horizon: 5,
            age_threshold: 450,
            initial_population: 100,
            population_cap: 1000,
            spawn_chance: 0.25,
            explore_chance: 0.1,
            to_nest_divisor: 5,
            to_food_divisor: 4,
            suppress_events: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_consistent() {
        let cfg = SimConfig::default();
        assert!(cfg.width > 0 && cfg.height > 0);
        assert!(cfg.food_min_amount <= cfg.food_max_amount);
        assert!(cfg.initial_population <= cfg.population_cap);
        assert!(cfg.to_nest_divisor > 0 && cfg.to_food_divisor > 0);
        // a fresh ant must lay a visible trail
        assert!(cfg.age_threshold / cfg.to_nest_divisor > 0);
    }
}
