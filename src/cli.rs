use clap::Parser;

use crate::config::SimConfig;

/// CLI arguments for the headless simulation runner
#[derive(Parser, Debug)]
#[command(name = "ant_forage", about = "🐜 Pheromone-trail ant foraging simulator")]
pub struct Args {
    /// Ticks to run
    #[arg(short = 't', long, default_value_t = 2_000)]
    pub ticks: u64,

    /// Grid width in cells
    #[arg(long, default_value_t = 300)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 300)]
    pub height: usize,

    /// Ants spawned up-front
    #[arg(short = 'n', long = "ants", default_value_t = 100)]
    pub ants: usize,

    /// Population ceiling
    #[arg(long, default_value_t = 1_000)]
    pub cap: usize,

    /// Food piles scattered at startup
    #[arg(long, default_value_t = 10)]
    pub food_sources: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress per-ant event logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Fold the CLI overrides into a simulation config
    pub fn to_config(&self) -> SimConfig {
        SimConfig {
            width: self.width,
            height: self.height,
            food_sources: self.food_sources,
            initial_population: self.ants,
            population_cap: self.cap,
            suppress_events: self.suppress_events,
            ..SimConfig::default()
        }
    }
}
