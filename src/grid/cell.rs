/// What currently occupies a grid location
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Nest,
    Food,
    Pheromone,
}

/// One grid location: compact and cache-friendly.
///
/// Holds the three decaying trail counters plus an index link to the food
/// or nest record covering it. Kind is `Pheromone` exactly while the cell
/// carries no resource and at least one counter is positive.
#[derive(Clone, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    /// Trail toward food, laid by ants returning home with a find
    pub to_food: u16,
    /// Trail toward the nest, laid by outbound ants
    pub to_nest: u16,
    /// Expiry marker; steers foragers away from unproductive ground
    pub dead: u16,
    pub kind: CellKind,
    /// Index into the grid's food records when kind is Food
    pub food: Option<u32>,
    /// Index into the grid's nest records when kind is Nest
    pub nest: Option<u32>,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            to_food: 0,
            to_nest: 0,
            dead: 0,
            kind: CellKind::Empty,
            food: None,
            nest: None,
        }
    }

    /// Check whether any trail counter is still positive
    #[inline]
    pub fn has_pheromone(&self) -> bool {
        self.to_food > 0 || self.to_nest > 0 || self.dead > 0
    }

    /// Zero every counter (used when a resource footprint is stamped over
    /// an existing trail)
    #[inline]
    pub fn clear_trails(&mut self) {
        self.to_food = 0;
        self.to_nest = 0;
        self.dead = 0;
    }
}
