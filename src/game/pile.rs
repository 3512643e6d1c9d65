use crate::Arbitrary;
use crate::Error;
use crate::Move;
use crate::MOVES;
use crate::ARBITRARY_PILE_LIMIT;
use crate::PERIOD;
use crate::Stones;

/// Number of stones left on the table.
///
/// A `Pile` is non-negative by construction. Signed integers and strings go
/// through `TryFrom`, which rejects negative and non-integer input with
/// [`Error::InvalidInput`], so every solver receives an already-valid pile.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Pile(Stones);

impl Pile {
    pub const fn stones(&self) -> Stones {
        self.0
    }
    /// No stones left. The player to move has no legal move.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// The pile after `m`, or `None` if there are not enough stones.
    pub fn take(&self, m: Move) -> Option<Self> {
        self.0.checked_sub(m.stones()).map(Self)
    }
    /// The pile one full period smaller, or `None` for the base cases `0..4`.
    pub fn stride(&self) -> Option<Self> {
        match self.0 {
            n if n < PERIOD => None,
            n => Some(Self(n - PERIOD)),
        }
    }
    /// The pile reduced to its residue modulo the period.
    pub const fn residue(&self) -> Self {
        Self(self.0 % PERIOD)
    }
    /// Piles reachable in one legal move, largest first.
    pub fn children(self) -> impl Iterator<Item = Self> {
        MOVES.into_iter().filter_map(move |m| self.take(m))
    }
}

impl From<Stones> for Pile {
    fn from(n: Stones) -> Self {
        Self(n)
    }
}
impl From<Pile> for Stones {
    fn from(pile: Pile) -> Stones {
        pile.0
    }
}

impl TryFrom<i64> for Pile {
    type Error = Error;
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Stones::try_from(n)
            .map(Self)
            .map_err(|_| Error::InvalidInput(format!("pile must be >= 0, got {}", n)))
    }
}

/// str parsing accepts an optional sign so "-3" reports negativity
/// rather than a generic parse failure
impl TryFrom<&str> for Pile {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => Self::try_from(n),
            Err(_) => match s.parse::<Stones>() {
                Ok(n) => Ok(Self(n)),
                Err(_) => Err(Error::InvalidInput(format!(
                    "pile must be a non-negative integer, got {:?}",
                    s
                ))),
            },
        }
    }
}

impl std::str::FromStr for Pile {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl Arbitrary for Pile {
    fn random() -> Self {
        Self(rand::random_range(0..ARBITRARY_PILE_LIMIT))
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
