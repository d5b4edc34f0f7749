//! Error types for strict rank parsing.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when a rank is parsed strictly.
///
/// The lenient constructors never produce this error; they normalize an
/// unrecognized rank to [`Rank::Unknown`](crate::Rank::Unknown) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// The input is not one of the 13 canonical rank tokens.
    #[error("unrecognized rank {0:?}")]
    Unrecognized(String),
}
