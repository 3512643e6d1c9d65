use super::*;
use crate::Pile;
use crate::PERIOD;

/// One recursive call on the residue `n % 4`, which is always a base case.
#[derive(Debug, Default, Clone, Copy)]
pub struct Modular;

impl Modular {
    fn recurse(pile: Pile) -> bool {
        match pile.stones() {
            n if n < PERIOD => n != 0,
            _ => Self::recurse(pile.residue()),
        }
    }
}

impl Solver for Modular {
    fn method(&self) -> Method {
        Method::Modular
    }
    fn wins(&mut self, pile: Pile) -> bool {
        Self::recurse(pile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stones;

    #[test]
    fn first_period() {
        let wins = (0..8u64).map(|n| Modular.wins(Pile::from(n))).collect::<Vec<_>>();
        assert_eq!(wins, [false, true, true, true, false, true, true, true]);
    }

    #[test]
    fn largest_pile() {
        assert!(Modular.wins(Pile::from(Stones::MAX)));
        assert!(!Modular.wins(Pile::from(Stones::MAX - 3)));
    }
}
