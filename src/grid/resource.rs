/// A food pile: square footprint with one shared remaining amount.
///
/// Every cell the footprint covers links back to the same record, so an
/// ant arriving anywhere on the pile draws from the same stock.
#[derive(Clone, Debug)]
pub struct Food {
    /// Top-left corner of the footprint
    pub x: i32,
    pub y: i32,
    /// Side of the square footprint in cells
    pub size: i32,
    /// Units left; never goes negative
    pub amount: u32,
}

impl Food {
    pub fn new(x: i32, y: i32, size: i32, amount: u32) -> Self {
        Self { x, y, size, amount }
    }

    /// Take one unit; returns false once the pile is exhausted
    #[inline]
    pub fn consume(&mut self) -> bool {
        if self.amount > 0 {
            self.amount -= 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }
}

/// The colony's home: a Euclidean disk that never depletes.
#[derive(Clone, Debug)]
pub struct Nest {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

impl Nest {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self { x, y, radius }
    }

    /// True when (x, y) lies within the disk
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
