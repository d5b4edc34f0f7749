//! Card and suit types.

use alloc::string::String;
use core::fmt;
#[cfg(feature = "std")]
use std::io;

use crate::error::RankError;
use crate::rank::Rank;
use crate::render;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Clubs.
    Club,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Diamond, Self::Club, Self::Spade];

    /// Returns the suit glyph.
    ///
    /// Spades, and any suit without its own glyph, use ♠.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Heart => '\u{2665}',
            Self::Diamond => '\u{2666}',
            Self::Club => '\u{2663}',
            // Spades and anything unmapped.
            _ => '\u{2660}',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card.
///
/// The rendering is built once when the card is created and never changes.
///
/// # Example
///
/// ```
/// use termcard::{Card, Suit};
///
/// let card = Card::new(Suit::Diamond, "5");
/// assert_eq!(card.value(), 5);
/// assert_eq!(card.lines().nth(1), Some("\u{258F}5  \u{2666}\u{2595}"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    value: i32,
    rendering: String,
}

impl Card {
    /// Creates a new card, deriving its value from the rank.
    ///
    /// Note: an unrecognized rank is not an error. It is stored as
    /// [`Rank::Unknown`] with a value of 0.
    #[must_use]
    pub fn new(suit: Suit, rank: &str) -> Self {
        Self::from_rank(suit, Rank::from_token(rank))
    }

    /// Creates a new card with an explicit value.
    ///
    /// The rank is normalized as in [`Card::new`], but the value is stored
    /// as given and never checked against the rank.
    #[must_use]
    pub fn with_value(suit: Suit, rank: &str, value: i32) -> Self {
        Self::build(suit, Rank::from_token(rank), value)
    }

    /// Creates a new card from an already parsed rank.
    #[must_use]
    pub fn from_rank(suit: Suit, rank: Rank) -> Self {
        Self::build(suit, rank, rank.value())
    }

    /// Creates a new card, rejecting unrecognized ranks.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::Unrecognized`] if `rank` is not one of the 13
    /// canonical rank tokens.
    pub fn try_new(suit: Suit, rank: &str) -> Result<Self, RankError> {
        Ok(Self::from_rank(suit, rank.parse()?))
    }

    fn build(suit: Suit, rank: Rank, value: i32) -> Self {
        Self {
            suit,
            rank,
            value,
            rendering: render::render(suit, rank),
        }
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the normalized rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the normalized rank token, `"UNKNOWN"` for unrecognized input.
    #[must_use]
    pub const fn rank_str(&self) -> &'static str {
        self.rank.as_str()
    }

    /// Returns the card value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Returns the 5-line text rendering.
    #[must_use]
    pub fn to_text(&self) -> &str {
        &self.rendering
    }

    /// Returns the lines of the rendering, top to bottom.
    pub fn lines(&self) -> core::str::Lines<'_> {
        self.rendering.lines()
    }

    /// Writes the rendering followed by a line break.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{}", self.rendering)?;
        out.flush()
    }

    /// Prints the rendering to standard output followed by a line break.
    ///
    /// Write failures are logged and otherwise ignored.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn display(&self) {
        if let Err(err) = self.write_to(io::stdout().lock()) {
            log::warn!("failed to print card: {err}");
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendering)
    }
}
