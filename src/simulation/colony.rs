use colored::Colorize;

use crate::ant::{Ant, Mode};
use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::grid::{Food, Nest, PheromoneGrid};
use crate::heading::Heading;

/// The colony controller: owns the grid, the population, and the random
/// source, and drives the per-tick update ordering.
///
/// Ants are processed sequentially and read the grid as earlier ants in
/// the same tick wrote it; that same-tick visibility is the stated
/// contract, not an accident (no double buffering).
pub struct Colony {
    pub grid: PheromoneGrid,
    pub ants: Vec<Ant>,
    pub config: SimConfig,
    /// Nest center; where new ants appear
    pub home: (i32, i32),
    /// Ticks run so far
    pub ticks: u64,
    /// Ants culled so far (old age or faulted updates)
    pub deaths: u64,
    population_cap: usize,
    rng: fastrand::Rng,
}

impl Colony {
    /// Build the world from the config: nest placed (or drawn near the
    /// origin corner), food piles scattered over the far region, and the
    /// initial population spawned on the nest.
    pub fn new(config: SimConfig, mut rng: fastrand::Rng) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(SimError::InvalidWorld(format!(
                "grid must be non-empty, got {}x{}",
                config.width, config.height
            )));
        }

        let (w, h) = (config.width as i32, config.height as i32);
        let home = match config.nest {
            Some((x, y)) => {
                if x < 0 || y < 0 || x >= w || y >= h {
                    return Err(SimError::InvalidWorld(format!(
                        "nest ({}, {}) outside {}x{} grid",
                        x, y, config.width, config.height
                    )));
                }
                (x, y)
            }
            None => (rng.i32(0..=(w - 1) / 10), rng.i32(0..=(h - 1) / 10)),
        };

        let mut grid = PheromoneGrid::new(config.width, config.height, config.max_level, config.horizon);
        grid.place_nest(Nest::new(home.0, home.1, config.nest_radius));

        // Piles go in the far nine tenths of the grid, away from the nest corner
        let (fx_lo, fy_lo) = ((w - 1) / 10, (h - 1) / 10);
        for _ in 0..config.food_sources {
            let x = rng.i32(fx_lo..=w - 1);
            let y = rng.i32(fy_lo..=h - 1);
            let amount = rng.u32(config.food_min_amount..=config.food_max_amount);
            grid.place_food(Food::new(x, y, config.food_size, amount));
        }

        let population_cap = config.population_cap;
        let mut colony = Self {
            grid,
            ants: Vec::with_capacity(population_cap),
            population_cap,
            home,
            ticks: 0,
            deaths: 0,
            config,
            rng,
        };
        for _ in 0..colony.config.initial_population.min(population_cap) {
            colony.spawn_ant();
        }
        Ok(colony)
    }

    /// Advance the whole simulation by one step: maybe spawn, update every
    /// ant in population order, cull the dead, decay the field.
    pub fn tick(&mut self) {
        self.maybe_spawn();

        let mut doomed: Vec<usize> = Vec::new();
        for (i, ant) in self.ants.iter_mut().enumerate() {
            ant.age += 1;
            if ant.age > self.config.age_threshold {
                mark_expiry(&mut self.grid, ant, &self.config);
                if !self.config.suppress_events {
                    println!(
                        "{} ant expired at ({}, {}) after {} ticks",
                        "💀".red(),
                        ant.x,
                        ant.y,
                        ant.age
                    );
                }
                doomed.push(i);
                continue;
            }
            if let Err(e) = ant.update(&mut self.grid, &self.config, &mut self.rng) {
                // one faulty ant never aborts the tick for the rest
                if !self.config.suppress_events {
                    eprintln!("{} dropping ant: {}", "⚠".yellow(), e);
                }
                doomed.push(i);
            }
        }

        if !doomed.is_empty() {
            self.deaths += doomed.len() as u64;
            let mut next = doomed.into_iter().peekable();
            let mut i = 0;
            self.ants.retain(|_| {
                let drop = next.peek() == Some(&i);
                if drop {
                    next.next();
                }
                i += 1;
                !drop
            });
        }

        self.grid.decay_step();
        self.ticks += 1;
    }

    /// Spawn one ant at the nest with a random heading
    pub fn spawn_ant(&mut self) {
        let heading = Heading::ALL[self.rng.usize(..Heading::ALL.len())];
        self.ants.push(Ant::new(self.home.0, self.home.1, heading));
    }

    /// Place an extra food pile at runtime (footprint side from the config)
    pub fn place_food(&mut self, x: i32, y: i32, amount: u32) {
        self.grid
            .place_food(Food::new(x, y, self.config.food_size, amount));
    }

    /// Retarget the population ceiling; only gates future spawns, live
    /// ants are never culled by it
    pub fn set_population_cap(&mut self, cap: usize) {
        self.population_cap = cap;
    }

    pub fn population_cap(&self) -> usize {
        self.population_cap
    }

    /// Read-only view of the live population, for drawing
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn grid(&self) -> &PheromoneGrid {
        &self.grid
    }

    /// Staggered arrivals: one ant per tick at most, and only when the
    /// random gate passes
    fn maybe_spawn(&mut self) {
        if self.ants.len() < self.population_cap && self.rng.f32() < self.config.spawn_chance {
            self.spawn_ant();
        }
    }
}

/// Stamp the expiry marker where an ant died of old age: its own cell plus
/// a horizon-radius disk, scaled by age and halved for homebound ants
/// (their trail is less wasteful to keep).
fn mark_expiry(grid: &mut PheromoneGrid, ant: &Ant, config: &SimConfig) {
    let mut amount = ant.age;
    if ant.mode == Mode::ToNest {
        amount /= 2;
    }
    let amount = amount.min(u16::MAX as u32) as u16;
    let r = config.horizon;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                grid.deposit_dead(ant.x + dx, ant.y + dy, amount);
            }
        }
    }
}
