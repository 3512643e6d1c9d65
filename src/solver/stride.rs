use super::*;
use crate::Pile;

/// Native recursion that drops four stones per call until a base case.
///
/// Call depth is `n / 4 + 1`, a quarter of the exhaustive depth, but still
/// linear; [`Method::guard`] refuses piles past [`crate::MAX_RECURSION_DEPTH`]
/// frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stride;

impl Stride {
    fn recurse(pile: Pile) -> bool {
        match pile.stride() {
            None => !pile.is_empty(),
            Some(next) => Self::recurse(next),
        }
    }
}

impl Solver for Stride {
    fn method(&self) -> Method {
        Method::Stride
    }
    fn wins(&mut self, pile: Pile) -> bool {
        Self::recurse(pile)
    }
}
