//! Five solvers for the same win predicate.
//!
//! Every solver implements [`Solver`]. Callers go through [`Solver::solve`]
//! or [`Solver::evaluate`], which validate the input and check the method's
//! resource limit before the first recursive step. The methods differ only in
//! how much stack, heap, and time they spend:
//!
//! | method       | time     | native stack | heap   |
//! |--------------|----------|--------------|--------|
//! | `pura`       | O(c^n)   | O(n)         | O(1)   |
//! | `memo_lru`   | O(n)     | O(1)         | O(n)   |
//! | `trampolim`  | O(n)     | O(1)         | O(1)   |
//! | `modulo`     | O(1)     | O(1)         | O(1)   |
//! | `verdadeira` | O(n)     | O(n/4)       | O(1)   |
mod bounce;
mod exhaustive;
mod memo;
mod memoized;
mod method;
mod modular;
mod stride;
mod trampoline;

pub use bounce::*;
pub use exhaustive::*;
pub use memo::*;
pub use memoized::*;
pub use method::*;
pub use modular::*;
pub use stride::*;
pub use trampoline::*;

use crate::Error;
use crate::Outcome;
use crate::Pile;

/// A procedure deciding whether the player to move wins.
pub trait Solver {
    /// The technique this solver implements.
    fn method(&self) -> Method;

    /// Raw predicate. Assumes `pile` already passed [`Method::guard`];
    /// deep methods may overflow the stack otherwise.
    fn wins(&mut self, pile: Pile) -> bool;

    /// Checked evaluation of a validated pile.
    fn solve(&mut self, pile: Pile) -> Result<Outcome, Error> {
        let method = self.method();
        if let Err(e) = method.guard(pile) {
            log::warn!("{}", e);
            return Err(e);
        }
        let outcome = Outcome::from(self.wins(pile));
        log::debug!("n = {} -> {} (método: {})", pile, outcome, method);
        Ok(outcome)
    }

    /// Validate raw input into a [`Pile`], then [`Solver::solve`] it.
    fn evaluate<N>(&mut self, n: N) -> Result<Outcome, Error>
    where
        Self: Sized,
        Pile: TryFrom<N, Error = Error>,
    {
        self.solve(Pile::try_from(n)?)
    }
}
