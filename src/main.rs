use ant_forage::prelude::*;
use clap::Parser;
use colored::Colorize;
use std::time::Instant;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let mut colony = Colony::new(args.to_config(), rng)?;

    let sim_start = Instant::now();
    for _ in 0..args.ticks {
        colony.tick();
    }
    let elapsed = sim_start.elapsed();

    println!(
        "\n{}\n{} {:.3} ms {} {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Simulation Latency:".green().bold(),
        elapsed.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("ticks={}", colony.ticks).cyan(),
        format!("ants={}", colony.ants().len()).cyan(),
        format!("deaths={}", colony.deaths).cyan(),
        format!("food_left={}", colony.grid().food_remaining()).cyan(),
        format!("active_cells={}", colony.grid().active_cells().count()).cyan(),
    );

    Ok(())
}
