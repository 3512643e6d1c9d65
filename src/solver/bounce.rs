/// One step of a trampolined computation.
///
/// A recursive function returns `Pending` with a thunk for its next call
/// instead of making the call. [`Bounce::run`] keeps forcing thunks in a
/// loop until one yields `Done`, so native stack depth stays constant no
/// matter how long the chain is.
pub enum Bounce<T> {
    Done(T),
    Pending(Box<dyn FnOnce() -> Bounce<T>>),
}

impl<T> Bounce<T> {
    pub fn done(value: T) -> Self {
        Self::Done(value)
    }
    /// Defer `next` until the trampoline reaches it.
    pub fn defer<F>(next: F) -> Self
    where
        F: FnOnce() -> Bounce<T> + 'static,
    {
        Self::Pending(Box::new(next))
    }
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
    /// Drive the chain to completion.
    pub fn run(self) -> T {
        let mut bounce = self;
        let mut steps = 0usize;
        loop {
            match bounce {
                Self::Done(value) => {
                    log::trace!("trampoline landed after {} bounces", steps);
                    return value;
                }
                Self::Pending(thunk) => {
                    bounce = thunk();
                    steps += 1;
                }
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bounce<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => f.debug_tuple("Done").field(value).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(n: u64, acc: u64) -> Bounce<u64> {
        match n {
            0 => Bounce::done(acc),
            n => Bounce::defer(move || countdown(n - 1, acc + n)),
        }
    }

    #[test]
    fn done_is_immediate() {
        assert_eq!(Bounce::done(7).run(), 7);
    }

    #[test]
    fn pending_defers_work() {
        let bounce = countdown(3, 0);
        assert!(!bounce.is_done());
        assert_eq!(format!("{:?}", bounce), "Pending(..)");
        assert_eq!(bounce.run(), 6);
    }

    #[test]
    fn long_chain_keeps_stack_flat() {
        assert_eq!(countdown(1_000_000, 0).run(), 500_000_500_000);
    }
}
