use crate::Stones;

/// A single turn: remove one, two, or three stones.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    One = 1isize,
    Two = 2isize,
    Three = 3isize,
}

impl Move {
    /// All three moves, smallest first.
    pub const fn all() -> [Self; 3] {
        [Self::One, Self::Two, Self::Three]
    }
    /// Stones removed by this move.
    pub const fn stones(&self) -> Stones {
        *self as Stones
    }
}

impl From<Move> for Stones {
    fn from(m: Move) -> Stones {
        m.stones()
    }
}

impl TryFrom<Stones> for Move {
    type Error = String;
    fn try_from(n: Stones) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(format!("invalid move: {}", n)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "-{}", self.stones())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_stones() {
        for m in Move::all() {
            assert_eq!(Move::try_from(Stones::from(m)), Ok(m));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Move::try_from(0).is_err());
        assert!(Move::try_from(4).is_err());
    }

    #[test]
    fn ordered_smallest_first() {
        let stones = Move::all().map(|m| m.stones());
        assert_eq!(stones, [1, 2, 3]);
    }
}
