use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::grid::{CellKind, Objective, PheromoneGrid};
use crate::heading::Heading;

/// Travel mode of an ant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Freshly spawned, still walking off the nest disk
    LeavingNest,
    /// Searching for food
    ToFood,
    /// Carrying a find back home
    ToNest,
}

impl Mode {
    /// What this mode senses for in the horizon
    #[inline]
    pub fn objective(self) -> Objective {
        match self {
            Mode::LeavingNest | Mode::ToFood => Objective::Food,
            Mode::ToNest => Objective::Nest,
        }
    }
}

/// Step choices for the random walk; zero dominates so ants mostly hold
/// their course
const WANDER_STEPS: [i32; 6] = [-1, 0, 0, 0, 0, 1];

/// A forager. Owned exclusively by the colony's population list.
#[derive(Clone, Debug)]
pub struct Ant {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    pub mode: Mode,
    /// Ticks since the last nest or food visit; the colony culls the ant
    /// once this passes the configured threshold
    pub age: u32,
    /// Set by an arrival early-return; the next update walks off the goal
    /// cell instead of re-triggering the arrival transition
    resting: bool,
}

impl Ant {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            x,
            y,
            heading,
            mode: Mode::LeavingNest,
            age: 0,
            resting: false,
        }
    }

    /// One simulation step: mode transitions, trail laying, steering, and
    /// a single move with boundary reflection.
    ///
    /// Arrival transitions end the step early; the ant rests on the goal
    /// cell for the remainder of the tick with its heading reversed, then
    /// walks off on the next update (the transitions fire on landing, not
    /// while standing still).
    pub fn update(
        &mut self,
        grid: &mut PheromoneGrid,
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<()> {
        if self.resting {
            self.resting = false;
        } else {
            let kind = grid.kind_at(self.x, self.y);
            match self.mode {
                Mode::LeavingNest => {
                    if kind != CellKind::Nest {
                        self.mode = Mode::ToFood;
                    }
                }
                Mode::ToFood => match kind {
                    CellKind::Food => {
                        grid.consume_food_at(self.x, self.y);
                        self.heading = self.heading.opposite();
                        self.mode = Mode::ToNest;
                        self.age = 0;
                        self.resting = true;
                        return Ok(());
                    }
                    CellKind::Nest => {
                        // collision guard: bounced into the nest while foraging
                        self.heading = self.heading.opposite();
                        self.resting = true;
                        return Ok(());
                    }
                    _ => {}
                },
                Mode::ToNest => match kind {
                    CellKind::Nest => {
                        self.heading = self.heading.opposite();
                        self.mode = Mode::ToFood;
                        self.age = 0;
                        self.resting = true;
                        return Ok(());
                    }
                    CellKind::Food => {
                        // collision guard: crossed another pile on the way home
                        self.heading = self.heading.opposite();
                        self.resting = true;
                        return Ok(());
                    }
                    _ => {}
                },
            }
        }

        self.lay_trail(grid, config);
        self.steer(grid, config, rng)?;
        self.advance(grid.width(), grid.height());
        Ok(())
    }

    /// Lay trail on the current cell. Outbound ants mark the way home,
    /// returning ants mark the way to food; strength fades with age so
    /// ants fresh from a goal reinforce hardest.
    fn lay_trail(&self, grid: &mut PheromoneGrid, config: &SimConfig) {
        let freshness = config.age_threshold.saturating_sub(self.age);
        match self.mode {
            Mode::LeavingNest | Mode::ToFood => {
                let amount = (freshness / config.to_nest_divisor).min(u16::MAX as u32) as u16;
                grid.deposit_to_nest(self.x, self.y, amount);
            }
            Mode::ToNest => {
                let amount = (freshness / config.to_food_divisor).min(u16::MAX as u32) as u16;
                grid.deposit_to_food(self.x, self.y, amount);
            }
        }
    }

    /// Pick the heading for this step: either the exploration random walk
    /// or the horizon search. No guidance leaves the heading unchanged.
    fn steer(
        &mut self,
        grid: &PheromoneGrid,
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) -> Result<()> {
        let explore = config.explore_chance > 0.0
            && (self.mode == Mode::LeavingNest || rng.f32() < config.explore_chance);
        if explore {
            let step = WANDER_STEPS[rng.usize(..WANDER_STEPS.len())];
            self.heading = self.heading.rotated(step);
            return Ok(());
        }
        if self.mode == Mode::LeavingNest {
            // nothing to sense for yet
            return Ok(());
        }

        let objective = self.mode.objective();
        if let Some((gx, gy)) =
            grid.best_cell_in_horizon(self.heading, self.x, self.y, objective, rng)
        {
            let dx = gx - self.x;
            let dy = gy - self.y;
            let dist = dx.abs().max(dy.abs());
            if dist == 0 {
                return Err(SimError::DegenerateGuidance { x: self.x, y: self.y });
            }
            match Heading::from_unit(dx / dist, dy / dist) {
                Some(h) => self.heading = h,
                None => return Err(SimError::DegenerateGuidance { x: self.x, y: self.y }),
            }
        }
        Ok(())
    }

    /// Move one cell along the heading; clamp to the grid and mirror the
    /// heading per axis on contact.
    fn advance(&mut self, width: usize, height: usize) {
        let (dx, dy) = self.heading.unit();
        self.x += dx;
        self.y += dy;

        if self.x < 0 {
            self.x = 0;
            self.heading = self.heading.mirror_x();
        } else if self.x >= width as i32 {
            self.x = width as i32 - 1;
            self.heading = self.heading.mirror_x();
        }
        if self.y < 0 {
            self.y = 0;
            self.heading = self.heading.mirror_y();
        } else if self.y >= height as i32 {
            self.y = height as i32 - 1;
            self.heading = self.heading.mirror_y();
        }
    }
}
