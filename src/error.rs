use crate::Method;
use crate::Pile;
use crate::Stones;

/// Errors that can occur while evaluating a pile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pile is negative or not an integer. Raised before any recursion.
    InvalidInput(String),
    /// The pile needs more stack frames (or cache entries) than the method allows.
    /// A resource boundary of the deep methods, not a wrong answer.
    DepthExceeded {
        method: Method,
        pile: Pile,
        limit: Stones,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::DepthExceeded {
                method,
                pile,
                limit,
            } => write!(
                f,
                "depth exceeded: n = {} needs more than {} steps with método {}",
                pile, limit, method
            ),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_invalid_input() {
        let e = Error::InvalidInput("pile must be >= 0, got -1".to_string());
        assert_eq!(e.to_string(), "invalid input: pile must be >= 0, got -1");
    }

    #[test]
    fn displays_depth_exceeded() {
        let e = Error::DepthExceeded {
            method: Method::Stride,
            pile: Pile::from(1u64 << 20),
            limit: 8192,
        };
        let message = e.to_string();
        assert!(message.contains("verdadeira"));
        assert!(message.contains("1048576"));
    }
}
