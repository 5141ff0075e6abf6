use std::collections::HashSet;

use crate::grid::cell::{Cell, CellKind};
use crate::grid::resource::{Food, Nest};
use crate::heading::Heading;

/// Which trail an ant is following; selects both the goal cell kind and
/// the counter used for ranking
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Objective {
    Food,
    Nest,
}

impl Objective {
    #[inline]
    const fn goal_kind(self) -> CellKind {
        match self {
            Objective::Food => CellKind::Food,
            Objective::Nest => CellKind::Nest,
        }
    }

    /// Effective trail level of a cell for this objective: the raw counter
    /// discounted by the expiry marker, floored at zero
    #[inline]
    fn effective_level(self, cell: &Cell) -> u16 {
        let raw = match self {
            Objective::Food => cell.to_food,
            Objective::Nest => cell.to_nest,
        };
        raw.saturating_sub(cell.dead)
    }
}

/// Trail counter selector for deposits
#[derive(Clone, Copy)]
enum Trail {
    ToFood,
    ToNest,
    Dead,
}

/// The shared pheromone field: a fixed W x H array of cells plus the set
/// of coordinates currently holding anything, so decay costs O(active)
/// instead of O(W * H).
pub struct PheromoneGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    active: HashSet<(i32, i32)>,
    foods: Vec<Food>,
    nests: Vec<Nest>,
    max_level: u16,
    horizon: i32,
}

impl PheromoneGrid {
    pub fn new(width: usize, height: usize, max_level: u16, horizon: i32) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell::new(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
            active: HashSet::new(),
            foods: Vec::new(),
            nests: Vec::new(),
            max_level,
            horizon,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    #[inline]
    fn idx(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Get a cell, or None when out of bounds
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.in_bounds(x, y).then(|| &self.cells[self.idx(x, y)])
    }

    /// Kind of the cell at (x, y); out of bounds reads as Empty
    #[inline]
    pub fn kind_at(&self, x: i32, y: i32) -> CellKind {
        self.cell(x, y).map_or(CellKind::Empty, |c| c.kind)
    }

    pub fn deposit_to_food(&mut self, x: i32, y: i32, amount: u16) {
        self.deposit(x, y, Trail::ToFood, amount);
    }

    pub fn deposit_to_nest(&mut self, x: i32, y: i32, amount: u16) {
        self.deposit(x, y, Trail::ToNest, amount);
    }

    pub fn deposit_dead(&mut self, x: i32, y: i32, amount: u16) {
        self.deposit(x, y, Trail::Dead, amount);
    }

    /// Add trail to a cell, saturating at the configured ceiling. No-op on
    /// nest and food cells and outside the grid.
    fn deposit(&mut self, x: i32, y: i32, trail: Trail, amount: u16) {
        if amount == 0 || !self.in_bounds(x, y) {
            return;
        }
        let max_level = self.max_level;
        let i = self.idx(x, y);
        let cell = &mut self.cells[i];
        if matches!(cell.kind, CellKind::Nest | CellKind::Food) {
            return;
        }
        let counter = match trail {
            Trail::ToFood => &mut cell.to_food,
            Trail::ToNest => &mut cell.to_nest,
            Trail::Dead => &mut cell.dead,
        };
        *counter = counter.saturating_add(amount).min(max_level);
        cell.kind = CellKind::Pheromone;
        self.active.insert((x, y));
    }

    /// One decay pass over the active set. Pheromone cells lose one unit
    /// per positive counter; cells whose counters all reach zero revert to
    /// Empty, as do food cells whose pile is exhausted. Removals are
    /// collected during the scan and applied afterwards so the iteration
    /// is never perturbed.
    pub fn decay_step(&mut self) {
        let width = self.width;
        let mut expired: Vec<(i32, i32)> = Vec::new();
        for &(x, y) in &self.active {
            let cell = &mut self.cells[y as usize * width + x as usize];
            match cell.kind {
                CellKind::Pheromone => {
                    if cell.to_food > 0 {
                        cell.to_food -= 1;
                    }
                    if cell.to_nest > 0 {
                        cell.to_nest -= 1;
                    }
                    if cell.dead > 0 {
                        cell.dead -= 1;
                    }
                    if !cell.has_pheromone() {
                        cell.kind = CellKind::Empty;
                        expired.push((x, y));
                    }
                }
                CellKind::Food => {
                    let exhausted = cell
                        .food
                        .is_some_and(|id| self.foods[id as usize].is_empty());
                    if exhausted {
                        cell.kind = CellKind::Empty;
                        cell.food = None;
                        expired.push((x, y));
                    }
                }
                CellKind::Nest | CellKind::Empty => {}
            }
        }
        for p in expired {
            self.active.remove(&p);
        }
    }

    /// Stamp a food footprint onto the grid, clipped to the bounds. All
    /// covered cells share the pile's single amount.
    pub fn place_food(&mut self, food: Food) {
        let id = self.foods.len() as u32;
        let (fx, fy, size) = (food.x, food.y, food.size);
        self.foods.push(food);
        for y in fy..fy + size {
            for x in fx..fx + size {
                if !self.in_bounds(x, y) {
                    continue;
                }
                let i = self.idx(x, y);
                let cell = &mut self.cells[i];
                cell.clear_trails();
                cell.kind = CellKind::Food;
                cell.food = Some(id);
                self.active.insert((x, y));
            }
        }
    }

    /// Stamp a nest disk onto the grid, clipped to the bounds.
    pub fn place_nest(&mut self, nest: Nest) {
        let id = self.nests.len() as u32;
        let (nx, ny, r) = (nest.x, nest.y, nest.radius);
        self.nests.push(nest);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let (x, y) = (nx + dx, ny + dy);
                if !self.in_bounds(x, y) {
                    continue;
                }
                let i = self.idx(x, y);
                let cell = &mut self.cells[i];
                cell.clear_trails();
                cell.kind = CellKind::Nest;
                cell.nest = Some(id);
                self.active.insert((x, y));
            }
        }
    }

    /// Take one unit from the pile covering (x, y), if any is left
    pub fn consume_food_at(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let i = self.idx(x, y);
        match self.cells[i].food {
            Some(id) => self.foods[id as usize].consume(),
            None => false,
        }
    }

    /// Directional sensing: scan the horizon region ahead of (x, y) and
    /// pick the most promising cell.
    ///
    /// Goal cells (the objective's own kind) win outright, nearest by
    /// Chebyshev distance. Failing that, cells are ranked by effective
    /// trail level; cells carrying any expiry marker are skipped entirely,
    /// and ties at the maximum are broken uniformly through `rng`. Returns
    /// None when the region holds no evidence at all.
    pub fn best_cell_in_horizon(
        &self,
        heading: Heading,
        x: i32,
        y: i32,
        objective: Objective,
        rng: &mut fastrand::Rng,
    ) -> Option<(i32, i32)> {
        let goal_kind = objective.goal_kind();
        let mut goal: Option<(i32, i32, i32)> = None;
        let mut max_level: u16 = 0;
        let mut ties: Vec<(i32, i32)> = Vec::new();

        for (dx, dy) in horizon_offsets(heading, self.horizon) {
            let (cx, cy) = (x + dx, y + dy);
            if !self.in_bounds(cx, cy) {
                continue;
            }
            let cell = &self.cells[self.idx(cx, cy)];
            if cell.kind == goal_kind {
                let dist = dx.abs().max(dy.abs());
                if goal.map_or(true, |(_, _, d)| dist < d) {
                    goal = Some((cx, cy, dist));
                }
                continue;
            }
            if cell.dead > 0 {
                continue;
            }
            let level = objective.effective_level(cell);
            if level == 0 {
                continue;
            }
            if level > max_level {
                max_level = level;
                ties.clear();
                ties.push((cx, cy));
            } else if level == max_level {
                ties.push((cx, cy));
            }
        }

        if let Some((gx, gy, _)) = goal {
            return Some((gx, gy));
        }
        if max_level > 0 {
            return Some(ties[rng.usize(..ties.len())]);
        }
        None
    }

    /// Read-only view of every non-empty cell, for drawing
    pub fn active_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.active
            .iter()
            .map(move |&(x, y)| &self.cells[self.idx(x, y)])
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn nests(&self) -> &[Nest] {
        &self.nests
    }

    /// Total units left across all piles
    pub fn food_remaining(&self) -> u32 {
        self.foods.iter().map(|f| f.amount).sum()
    }
}

/// Offsets of the sensing region for a heading.
///
/// Diagonals scan the square extending purely into the heading's quadrant
/// (both offset magnitudes in 1..horizon); cardinals scan a 90-degree
/// wedge that widens by one cell per step along the axis.
pub fn horizon_offsets(heading: Heading, horizon: i32) -> Vec<(i32, i32)> {
    let (ux, uy) = heading.unit();
    let mut offsets = Vec::with_capacity((horizon * horizon) as usize);
    if heading.is_cardinal() {
        for d in 1..horizon {
            for c in -d..=d {
                if ux == 0 {
                    offsets.push((c, uy * d));
                } else {
                    offsets.push((ux * d, c));
                }
            }
        }
    } else {
        for ax in 1..horizon {
            for ay in 1..horizon {
                offsets.push((ux * ax, uy * ay));
            }
        }
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> PheromoneGrid {
        PheromoneGrid::new(20, 20, 255, 5)
    }

    #[test]
    fn test_deposit_sets_kind_and_clamps() {
        let mut g = grid();
        g.deposit_to_nest(3, 3, 200);
        g.deposit_to_nest(3, 3, 200);
        let cell = g.cell(3, 3).unwrap();
        assert_eq!(cell.kind, CellKind::Pheromone);
        assert_eq!(cell.to_nest, 255);
        assert_eq!(g.active_cells().count(), 1);
    }

    #[test]
    fn test_deposit_out_of_bounds_is_ignored() {
        let mut g = grid();
        g.deposit_to_food(-1, 5, 10);
        g.deposit_dead(5, 20, 10);
        assert_eq!(g.active_cells().count(), 0);
    }

    #[test]
    fn test_deposit_on_resources_is_a_noop() {
        let mut g = grid();
        g.place_nest(Nest::new(5, 5, 0));
        g.place_food(Food::new(10, 10, 1, 3));
        g.deposit_to_food(5, 5, 90);
        g.deposit_dead(10, 10, 90);
        assert_eq!(g.cell(5, 5).unwrap().kind, CellKind::Nest);
        assert!(!g.cell(5, 5).unwrap().has_pheromone());
        assert_eq!(g.cell(10, 10).unwrap().kind, CellKind::Food);
        assert!(!g.cell(10, 10).unwrap().has_pheromone());
    }

    #[test]
    fn test_decay_reaches_empty_in_exactly_initial_level_steps() {
        let mut g = grid();
        g.deposit_to_nest(4, 4, 7);
        for _ in 0..6 {
            g.decay_step();
        }
        assert_eq!(g.cell(4, 4).unwrap().kind, CellKind::Pheromone);
        g.decay_step();
        assert_eq!(g.cell(4, 4).unwrap().kind, CellKind::Empty);
        assert_eq!(g.active_cells().count(), 0);
        // idempotent at the floor
        g.decay_step();
        assert_eq!(g.cell(4, 4).unwrap().to_nest, 0);
    }

    #[test]
    fn test_exhausted_food_leaves_active_set_on_decay() {
        let mut g = grid();
        g.place_food(Food::new(8, 8, 2, 1));
        assert_eq!(g.active_cells().count(), 4);
        assert!(g.consume_food_at(9, 9));
        assert!(!g.consume_food_at(8, 8));
        g.decay_step();
        assert_eq!(g.active_cells().count(), 0);
        assert_eq!(g.kind_at(8, 8), CellKind::Empty);
        assert_eq!(g.kind_at(9, 9), CellKind::Empty);
    }

    #[test]
    fn test_food_footprint_is_bounds_clipped() {
        let mut g = grid();
        g.place_food(Food::new(19, 19, 3, 5));
        assert_eq!(g.active_cells().count(), 1);
        assert_eq!(g.kind_at(19, 19), CellKind::Food);
    }

    #[test]
    fn test_cardinal_wedge_widens_with_distance() {
        let offsets = horizon_offsets(Heading::East, 5);
        // 3 + 5 + 7 + 9 cells for distances 1..=4
        assert_eq!(offsets.len(), 24);
        assert!(offsets.contains(&(1, -1)));
        assert!(offsets.contains(&(4, 4)));
        assert!(!offsets.contains(&(1, 2)));
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all(|&(dx, _)| dx >= 1));

        let north = horizon_offsets(Heading::North, 5);
        assert_eq!(north.len(), 24);
        assert!(north.iter().all(|&(_, dy)| dy <= -1));
        assert!(north.contains(&(-3, -3)));
    }

    #[test]
    fn test_diagonal_box_stays_in_quadrant() {
        let offsets = horizon_offsets(Heading::NorthEast, 5);
        assert_eq!(offsets.len(), 16);
        assert!(offsets.iter().all(|&(dx, dy)| dx >= 1 && dy <= -1));
        assert!(offsets.contains(&(4, -4)));
        assert!(offsets.contains(&(1, -1)));

        let sw = horizon_offsets(Heading::SouthWest, 5);
        assert!(sw.iter().all(|&(dx, dy)| dx <= -1 && dy >= 1));
    }

    #[test]
    fn test_goal_cell_wins_over_trail_and_nearest_goal_is_picked() {
        let mut g = grid();
        g.deposit_to_food(7, 5, 200);
        g.place_food(Food::new(8, 5, 1, 5));
        g.place_food(Food::new(6, 6, 1, 5));
        let mut rng = fastrand::Rng::with_seed(1);
        let best = g.best_cell_in_horizon(Heading::East, 5, 5, Objective::Food, &mut rng);
        // (6, 6) is Chebyshev distance 1, (8, 5) is 3
        assert_eq!(best, Some((6, 6)));
    }

    #[test]
    fn test_dead_marked_cells_never_rank() {
        let mut g = grid();
        g.deposit_to_food(7, 5, 100);
        g.deposit_dead(7, 5, 10);
        g.deposit_to_food(6, 5, 50);
        let mut rng = fastrand::Rng::with_seed(1);
        for _ in 0..50 {
            let best = g.best_cell_in_horizon(Heading::East, 5, 5, Objective::Food, &mut rng);
            assert_eq!(best, Some((6, 5)));
        }
    }

    #[test]
    fn test_no_evidence_returns_none() {
        let g = grid();
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(
            g.best_cell_in_horizon(Heading::South, 10, 10, Objective::Nest, &mut rng),
            None
        );
    }

    #[test]
    fn test_objective_reads_matching_counter() {
        let mut g = grid();
        g.deposit_to_nest(10, 12, 40);
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(
            g.best_cell_in_horizon(Heading::South, 10, 10, Objective::Nest, &mut rng),
            Some((10, 12))
        );
        assert_eq!(
            g.best_cell_in_horizon(Heading::South, 10, 10, Objective::Food, &mut rng),
            None
        );
    }
}
