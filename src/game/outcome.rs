/// Result of optimal play for the player about to move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    /// No move avoids handing the opponent a winning position.
    Loss,
    /// Some move leaves the opponent in a losing position.
    Win,
}

impl Outcome {
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }
    /// Portuguese label used in report lines.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Win => "Vence",
            Self::Loss => "Perde",
        }
    }
}

/// bool isomorphism
impl From<bool> for Outcome {
    fn from(wins: bool) -> Self {
        if wins { Self::Win } else { Self::Loss }
    }
}
impl From<Outcome> for bool {
    fn from(outcome: Outcome) -> bool {
        outcome.is_win()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
