use super::*;
use crate::Pile;

/// The exhaustive recursion with every subproblem cached in a [`Memo`].
///
/// Each pile is solved at most once per memo. Recursion depth is still `n`,
/// so pending subproblems live on an explicit heap stack instead of the
/// call stack; any pile up to [`crate::MEMO_CAPACITY`] evaluates without
/// touching a recursion limit.
#[derive(Debug, Default, Clone)]
pub struct Memoized {
    memo: Memo,
}

impl Memoized {
    /// Continue with an existing cache.
    pub fn with(memo: Memo) -> Self {
        Self { memo }
    }
    pub fn memo(&self) -> &Memo {
        &self.memo
    }
}

impl From<Memoized> for Memo {
    fn from(solver: Memoized) -> Self {
        solver.memo
    }
}

impl Solver for Memoized {
    fn method(&self) -> Method {
        Method::Memoized
    }
    /// A pile is resolved once all of its children are cached.
    /// Until then its unresolved children are pushed above it.
    fn wins(&mut self, pile: Pile) -> bool {
        let mut stack = vec![pile];
        while let Some(&top) = stack.last() {
            if self.memo.lookup(top).is_some() {
                stack.pop();
                continue;
            }
            let pending = top
                .children()
                .filter(|child| !self.memo.contains(*child))
                .collect::<Vec<Pile>>();
            if pending.is_empty() {
                let wins = top
                    .children()
                    .any(|child| self.memo.peek(child) == Some(false));
                self.memo.insert(top, wins);
                stack.pop();
            } else {
                stack.extend(pending);
            }
        }
        log::trace!("{}", self.memo.info());
        self.memo.peek(pile).unwrap_or_default()
    }
}
