//! Positions of the stone game.
//!
//! - [`Pile`] — a validated, non-negative pile size
//! - [`Move`] — removal of one, two, or three stones
//! - [`Outcome`] — whether the player to move wins or loses
mod moves;
mod outcome;
mod pile;

pub use moves::*;
pub use outcome::*;
pub use pile::*;
