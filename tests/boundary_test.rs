//! Input validation, resource limits, and memo behavior at the public API.

use stones::Error;
use stones::MAX_EXHAUSTIVE_DEPTH;
use stones::MAX_RECURSION_DEPTH;
use stones::Memoized;
use stones::Method;
use stones::Outcome;
use stones::Pile;
use stones::Solver;
use stones::Stones;

#[test]
fn negative_input_is_invalid_for_every_method() {
    for method in Method::all() {
        let mut solver = method.solver();
        for n in [-1i64, -4, i64::MIN] {
            let result = Pile::try_from(n).and_then(|pile| solver.solve(pile));
            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "{} accepted {}",
                method,
                n
            );
        }
    }
}

#[test]
fn non_integer_input_is_invalid_for_every_method() {
    for method in Method::all() {
        let mut solver = method.solver();
        for s in ["", "dez", "4.0", "0x10", "1_000"] {
            let result = Pile::try_from(s).and_then(|pile| solver.solve(pile));
            assert!(
                matches!(result, Err(Error::InvalidInput(_))),
                "{} accepted {:?}",
                method,
                s
            );
        }
    }
}

#[test]
fn deep_methods_signal_exhaustion() {
    let pile = Pile::from(4 * MAX_RECURSION_DEPTH);
    for (method, expected) in [
        (Method::Exhaustive, MAX_EXHAUSTIVE_DEPTH),
        (Method::Stride, MAX_RECURSION_DEPTH),
    ] {
        match method.solver().solve(pile) {
            Err(Error::DepthExceeded {
                method: reported,
                pile: p,
                limit,
            }) => {
                assert_eq!(reported, method);
                assert_eq!(p, pile);
                assert_eq!(limit, expected);
            }
            other => panic!("{} returned {:?}", method, other),
        }
    }
}

/// Spawned threads get 2 MiB of stack unless told otherwise.
fn on_small_stack<F>(f: F) -> Result<Outcome, Error>
where
    F: FnOnce() -> Result<Outcome, Error> + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .expect("spawn thread")
        .join()
        .expect("thread finished without overflow")
}

const SMALL_STACK: usize = 2 << 20;

#[test]
fn stride_at_limit_fits_small_stack() {
    let pile = Pile::from(4 * MAX_RECURSION_DEPTH - 1);
    let result = on_small_stack(move || Method::Stride.solver().solve(pile));
    assert_eq!(result, Ok(Outcome::Win));
}

#[test]
fn exhaustive_search_fits_small_stack() {
    let result = on_small_stack(|| Method::Exhaustive.solver().solve(Pile::from(24u64)));
    assert_eq!(result, Ok(Outcome::Loss));
    let pile = Pile::from(MAX_EXHAUSTIVE_DEPTH + 1);
    let result = on_small_stack(move || Method::Exhaustive.solver().solve(pile));
    assert!(matches!(result, Err(Error::DepthExceeded { .. })));
}

#[test]
fn exhaustive_limit_is_guarded_not_searched() {
    assert!(Method::Exhaustive.guard(Pile::from(MAX_EXHAUSTIVE_DEPTH)).is_ok());
    assert!(MAX_EXHAUSTIVE_DEPTH < MAX_RECURSION_DEPTH);
}

#[test]
fn shallow_methods_handle_huge_piles() {
    let pile = Pile::from(Stones::MAX - 3);
    assert_eq!(Method::Modular.solver().solve(pile), Ok(Outcome::Loss));
    let pile = Pile::from(1u64 << 22);
    assert_eq!(Method::Trampoline.solver().solve(pile), Ok(Outcome::Loss));
}

#[test]
fn memo_is_idempotent() {
    let mut solver = Memoized::default();
    let first = solver.evaluate(37i64);
    let size = solver.memo().len();
    for _ in 0..8 {
        assert_eq!(solver.evaluate(37i64), first);
    }
    assert_eq!(solver.memo().len(), size);
    assert_eq!(first, Ok(Outcome::Win));
}

#[test]
fn memo_does_not_disturb_other_piles() {
    let mut warm = Memoized::default();
    warm.evaluate(500i64).expect("within capacity");
    for n in 0..600u64 {
        let pile = Pile::from(n);
        let mut cold = Memoized::default();
        assert_eq!(warm.solve(pile), cold.solve(pile), "diverged at n = {}", n);
    }
}

#[test]
fn memo_reports_hits_on_reuse() {
    let mut solver = Memoized::default();
    solver.evaluate("64").expect("valid pile");
    let before = solver.memo().info();
    solver.evaluate("63").expect("valid pile");
    let after = solver.memo().info();
    assert_eq!(after.misses, before.misses);
    assert_eq!(after.hits, before.hits + 1);
    assert_eq!(after.size, 65);
}
