//! Win predicate for the subtraction game where each turn removes 1, 2, or 3
//! stones from a single pile. The player facing an empty pile loses.
//!
//! The same predicate is solved five ways, one per recursion technique:
//!
//! - [`Exhaustive`] — plain recursion over every move, exponential
//! - [`Memoized`] — the same recursion, each pile solved at most once
//! - [`Trampoline`] — deferred steps of −4 driven by a flat loop
//! - [`Modular`] — one recursive call on `n % 4`
//! - [`Stride`] — native recursion in steps of −4
//!
//! All five agree on every pile they accept: a pile is lost iff `n % 4 == 0`.
//! Inputs are validated into a [`Pile`] before any recursion starts.
pub mod error;
pub mod game;
pub mod solver;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::*;
pub use game::*;
pub use solver::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of stones in a pile.
pub type Stones = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Every legal move, smallest first.
pub const MOVES: [Move; 3] = Move::all();
/// Period of the win/loss pattern. Multiples of it are losing positions.
pub const PERIOD: Stones = 4;

// ============================================================================
// RESOURCE LIMITS
// Deep piles fail with an error instead of overflowing the thread stack
// (2 MiB for spawned threads) or searching forever.
// ============================================================================
/// Maximum native call depth for the stride solver.
pub const MAX_RECURSION_DEPTH: Stones = 8192;
/// Largest pile the exhaustive solver accepts, as deep as a default
/// interpreter recursion ceiling. Its search frames live on the heap.
pub const MAX_EXHAUSTIVE_DEPTH: Stones = 1000;
/// Maximum number of cached piles held by a memo.
pub const MEMO_CAPACITY: Stones = 1 << 24;
/// Upper bound (exclusive) for randomly generated piles.
pub const ARBITRARY_PILE_LIMIT: Stones = 1 << 16;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Logs go to stderr so report lines on stdout stay clean.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
