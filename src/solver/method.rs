use super::*;
use crate::Error;
use crate::Pile;
use crate::Stones;
use crate::MAX_EXHAUSTIVE_DEPTH;
use crate::MAX_RECURSION_DEPTH;
use crate::MEMO_CAPACITY;
use crate::PERIOD;

/// Which recursion technique evaluates the pile.
///
/// Labels are the names the command line accepts.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Method {
    #[cfg_attr(feature = "cli", value(name = "pura"))]
    Exhaustive,
    #[cfg_attr(feature = "cli", value(name = "memo_lru"))]
    Memoized,
    #[default]
    #[cfg_attr(feature = "cli", value(name = "trampolim"))]
    Trampoline,
    #[cfg_attr(feature = "cli", value(name = "modulo"))]
    Modular,
    #[cfg_attr(feature = "cli", value(name = "verdadeira"))]
    Stride,
}

impl Method {
    pub const fn all() -> [Self; 5] {
        [
            Self::Exhaustive,
            Self::Memoized,
            Self::Trampoline,
            Self::Modular,
            Self::Stride,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Exhaustive => "pura",
            Self::Memoized => "memo_lru",
            Self::Trampoline => "trampolim",
            Self::Modular => "modulo",
            Self::Stride => "verdadeira",
        }
    }
    /// Fresh solver for this method. Memoized solvers start with an empty cache.
    pub fn solver(&self) -> Box<dyn Solver> {
        match self {
            Self::Exhaustive => Box::new(Exhaustive),
            Self::Memoized => Box::new(Memoized::default()),
            Self::Trampoline => Box::new(Trampoline),
            Self::Modular => Box::new(Modular),
            Self::Stride => Box::new(Stride),
        }
    }
    /// Most call frames (or cache entries, for memoization) this method may use.
    /// `None` when usage is constant in the pile size.
    pub const fn limit(&self) -> Option<Stones> {
        match self {
            Self::Exhaustive => Some(MAX_EXHAUSTIVE_DEPTH),
            Self::Memoized => Some(MEMO_CAPACITY),
            Self::Stride => Some(MAX_RECURSION_DEPTH),
            Self::Trampoline => None,
            Self::Modular => None,
        }
    }
    /// Frames (or cache entries) needed to evaluate `pile`.
    pub const fn depth(&self, pile: Pile) -> Stones {
        match self {
            Self::Exhaustive => pile.stones(),
            Self::Memoized => pile.stones().saturating_add(1),
            Self::Stride => pile.stones() / PERIOD + 1,
            Self::Trampoline => 1,
            Self::Modular => 2,
        }
    }
    /// Fail before evaluation if `pile` is beyond this method's limit.
    pub fn guard(&self, pile: Pile) -> Result<(), Error> {
        match self.limit() {
            Some(limit) if self.depth(pile) > limit => Err(Error::DepthExceeded {
                method: *self,
                pile,
                limit,
            }),
            _ => Ok(()),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Method {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|m| m.label() == s.trim())
            .ok_or_else(|| format!("invalid método: {}", s))
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
