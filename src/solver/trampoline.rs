use super::*;
use crate::Pile;

/// Stride recursion expressed as deferred [`Bounce`] steps.
///
/// Each step either lands on a base case in `0..4` or returns a thunk for
/// the pile four stones smaller. Stack depth is constant; time is `n / 4`
/// bounces.
#[derive(Debug, Default, Clone, Copy)]
pub struct Trampoline;

impl Trampoline {
    pub fn step(pile: Pile) -> Bounce<bool> {
        match pile.stride() {
            None => Bounce::done(!pile.is_empty()),
            Some(next) => Bounce::defer(move || Self::step(next)),
        }
    }
}

impl Solver for Trampoline {
    fn method(&self) -> Method {
        Method::Trampoline
    }
    fn wins(&mut self, pile: Pile) -> bool {
        Self::step(pile).run()
    }
}
