/// 8 compass octants for tiny, predictable loops
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Heading {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    East = 3,
    SouthEast = 4,
    South = 5,
    SouthWest = 6,
    West = 7,
}

impl Heading {
    /// All octants in rotation order (stepping by one = 45 degrees)
    pub const ALL: [Heading; 8] = [
        Heading::NorthWest,
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
    ];

    /// Get octant index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit step vector on the grid (y grows downward)
    #[inline]
    pub const fn unit(self) -> (i32, i32) {
        match self {
            Heading::NorthWest => (-1, -1),
            Heading::North => (0, -1),
            Heading::NorthEast => (1, -1),
            Heading::East => (1, 0),
            Heading::SouthEast => (1, 1),
            Heading::South => (0, 1),
            Heading::SouthWest => (-1, 1),
            Heading::West => (-1, 0),
        }
    }

    /// True for N/S/E/W, false for the diagonals
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Heading::North | Heading::South | Heading::East | Heading::West
        )
    }

    /// Octant matching a unit offset, if the offset is one of the 8
    #[inline]
    pub fn from_unit(dx: i32, dy: i32) -> Option<Heading> {
        match (dx, dy) {
            (-1, -1) => Some(Heading::NorthWest),
            (0, -1) => Some(Heading::North),
            (1, -1) => Some(Heading::NorthEast),
            (1, 0) => Some(Heading::East),
            (1, 1) => Some(Heading::SouthEast),
            (0, 1) => Some(Heading::South),
            (-1, 1) => Some(Heading::SouthWest),
            (-1, 0) => Some(Heading::West),
            _ => None,
        }
    }

    /// Rotate by `step` octant positions, wrapping modulo 8
    #[inline]
    pub fn rotated(self, step: i32) -> Heading {
        let idx = (self.index() as i32 + step).rem_euclid(8) as usize;
        Heading::ALL[idx]
    }

    /// Reverse 180 degrees
    #[inline]
    pub fn opposite(self) -> Heading {
        self.rotated(4)
    }

    /// Mirror the horizontal component (bounce off a vertical wall)
    #[inline]
    pub const fn mirror_x(self) -> Heading {
        match self {
            Heading::NorthWest => Heading::NorthEast,
            Heading::NorthEast => Heading::NorthWest,
            Heading::West => Heading::East,
            Heading::East => Heading::West,
            Heading::SouthWest => Heading::SouthEast,
            Heading::SouthEast => Heading::SouthWest,
            other => other,
        }
    }

    /// Mirror the vertical component (bounce off a horizontal wall)
    #[inline]
    pub const fn mirror_y(self) -> Heading {
        match self {
            Heading::NorthWest => Heading::SouthWest,
            Heading::SouthWest => Heading::NorthWest,
            Heading::North => Heading::South,
            Heading::South => Heading::North,
            Heading::NorthEast => Heading::SouthEast,
            Heading::SouthEast => Heading::NorthEast,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_round_trip() {
        for h in Heading::ALL {
            let (dx, dy) = h.unit();
            assert_eq!(Heading::from_unit(dx, dy), Some(h));
        }
        assert_eq!(Heading::from_unit(0, 0), None);
        assert_eq!(Heading::from_unit(2, 1), None);
    }

    #[test]
    fn test_opposite_negates_unit() {
        for h in Heading::ALL {
            let (dx, dy) = h.unit();
            let (ox, oy) = h.opposite().unit();
            assert_eq!((ox, oy), (-dx, -dy));
        }
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(Heading::NorthWest.rotated(-1), Heading::West);
        assert_eq!(Heading::West.rotated(1), Heading::NorthWest);
        assert_eq!(Heading::East.rotated(0), Heading::East);
        for h in Heading::ALL {
            assert_eq!(h.rotated(8), h);
            assert_eq!(h.rotated(-8), h);
        }
    }

    #[test]
    fn test_mirrors_flip_one_axis() {
        for h in Heading::ALL {
            let (dx, dy) = h.unit();
            assert_eq!(h.mirror_x().unit(), (-dx, dy));
            assert_eq!(h.mirror_y().unit(), (dx, -dy));
        }
    }

    #[test]
    fn test_cardinals() {
        let cardinals: Vec<Heading> = Heading::ALL
            .into_iter()
            .filter(|h| h.is_cardinal())
            .collect();
        assert_eq!(
            cardinals,
            vec![Heading::North, Heading::East, Heading::South, Heading::West]
        );
    }
}
