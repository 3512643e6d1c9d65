use super::*;
use crate::Move;
use crate::Pile;
use crate::MOVES;

/// Plain recursion over every legal move, with no caching.
///
/// Exponential in the pile size and only practical for small piles.
/// Each recursive call is a [`Frame`] on a heap stack, so native stack use
/// is constant; piles past [`crate::MAX_EXHAUSTIVE_DEPTH`] are still refused
/// by [`Method::guard`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Exhaustive;

/// One pending call: the pile and the moves it has not tried yet.
type Frame = (Pile, std::array::IntoIter<Move, 3>);

enum Step {
    Call(Pile),
    Return(bool),
}

impl Exhaustive {
    /// A frame returns `true` as soon as a child loses,
    /// and `false` once every move has been tried.
    fn search(pile: Pile) -> bool {
        let mut stack: Vec<Frame> = vec![(pile, MOVES.into_iter())];
        let mut returned = None;
        while let Some((top, moves)) = stack.last_mut() {
            let step = match returned.take() {
                Some(false) => Step::Return(true),
                _ => match moves.find_map(|m| top.take(m)) {
                    Some(child) => Step::Call(child),
                    None => Step::Return(false),
                },
            };
            match step {
                Step::Call(child) => stack.push((child, MOVES.into_iter())),
                Step::Return(wins) => {
                    stack.pop();
                    returned = Some(wins);
                }
            }
        }
        returned.unwrap_or_default()
    }
}

impl Solver for Exhaustive {
    fn method(&self) -> Method {
        Method::Exhaustive
    }
    fn wins(&mut self, pile: Pile) -> bool {
        Self::search(pile)
    }
}
