//! Card ranks, rank normalization, and value derivation.

use core::fmt;
use core::str::FromStr;

use crate::error::RankError;

/// Card rank.
///
/// Each rank has a canonical string token (`"2"` through `"10"`, `"JACK"`,
/// `"QUEEN"`, `"KING"`, `"ACE"`). Input that matches none of them becomes
/// [`Rank::Unknown`], whose token is `"UNKNOWN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Sentinel for input that is not a canonical rank token.
    Unknown,
}

/// Token of [`Rank::Unknown`].
pub const UNKNOWN_TOKEN: &str = "UNKNOWN";

fn lookup(token: &str) -> Option<Rank> {
    Rank::ALL.into_iter().find(|rank| rank.as_str() == token)
}

impl Rank {
    /// The 13 canonical ranks, from two to ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Normalizes a rank token.
    ///
    /// Matching is exact and case-sensitive: `"jack"`, `" 5"` and `""` all
    /// become [`Rank::Unknown`].
    ///
    /// # Example
    ///
    /// ```
    /// use termcard::Rank;
    ///
    /// assert_eq!(Rank::from_token("QUEEN"), Rank::Queen);
    /// assert_eq!(Rank::from_token("queen"), Rank::Unknown);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        lookup(token).unwrap_or_else(|| {
            log::debug!("unrecognized rank {token:?}, using {UNKNOWN_TOKEN}");
            Self::Unknown
        })
    }

    /// Returns the canonical token of the rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Ace => "ACE",
            Self::Unknown => UNKNOWN_TOKEN,
        }
    }

    /// Returns the derived value of the rank.
    ///
    /// Number cards are worth their number, jack 11, queen 12, king 13, and
    /// ace 1. [`Rank::Unknown`] is worth 0.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 1,
            Self::Unknown => 0,
        }
    }

    /// Returns whether this is one of the 13 canonical ranks.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl FromStr for Rank {
    type Err = RankError;

    /// Parses a canonical rank token, rejecting anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| RankError::Unrecognized(s.into()))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a rank string to its canonical token, or `"UNKNOWN"`.
///
/// ```
/// assert_eq!(termcard::normalize_rank("10"), "10");
/// assert_eq!(termcard::normalize_rank("11"), "UNKNOWN");
/// ```
#[must_use]
pub fn normalize_rank(input: &str) -> &'static str {
    Rank::from_token(input).as_str()
}

/// Derives the value of a normalized rank token.
///
/// Any string that is not a canonical token, including `"UNKNOWN"`, is worth 0.
#[must_use]
pub fn derive_value(normalized_rank: &str) -> i32 {
    lookup(normalized_rank).map_or(0, Rank::value)
}
