//! Terminal text-art layout for a card.
//!
//! A card renders as a block of [`CARD_HEIGHT`] lines, each [`CARD_WIDTH`]
//! glyphs wide:
//!
//! ```text
//! ▁▁▁▁▁▁
//! ▏5  ♦▕
//! ▏ ┓┗ ▕
//! ▏♦  5▕
//! ▔▔▔▔▔▔
//! ```

use alloc::string::String;

use crate::card::Suit;
use crate::rank::Rank;

/// Number of glyphs in every rendered line.
pub const CARD_WIDTH: usize = 6;

/// Number of lines in a rendered card.
pub const CARD_HEIGHT: usize = 5;

/// Top border, lower one eighth blocks.
pub const TOP_BORDER: &str = "\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}";

/// Constant middle line.
pub const MIDDLE_LINE: &str = "\u{258F} \u{2513}\u{2517} \u{2595}";

/// Bottom border, upper one eighth blocks.
pub const BOTTOM_BORDER: &str = "\u{2594}\u{2594}\u{2594}\u{2594}\u{2594}\u{2594}";

/// Left edge of the content lines.
pub const LEFT_EDGE: char = '\u{258F}';

/// Right edge of the content lines.
pub const RIGHT_EDGE: char = '\u{2595}';

/// Renders a card as a 5-line block joined by `'\n'`, without a trailing
/// line break.
///
/// ```
/// use termcard::{Rank, Suit, render::render};
///
/// let text = render(Suit::Club, Rank::Ten);
/// assert_eq!(text.lines().nth(1), Some("\u{258F}10 \u{2663}\u{2595}"));
/// ```
#[must_use]
pub fn render(suit: Suit, rank: Rank) -> String {
    log::trace!("rendering {rank} of {suit:?}");

    let glyph = suit.glyph();
    // Borders and edges are 3-byte glyphs, so this covers the whole block.
    let mut out = String::with_capacity(CARD_WIDTH * CARD_HEIGHT * 3 + CARD_HEIGHT);

    out.push_str(TOP_BORDER);
    out.push('\n');

    out.push(LEFT_EDGE);
    push_rank(&mut out, rank, true);
    out.push(glyph);
    out.push(RIGHT_EDGE);
    out.push('\n');

    out.push_str(MIDDLE_LINE);
    out.push('\n');

    out.push(LEFT_EDGE);
    out.push(glyph);
    push_rank(&mut out, rank, false);
    out.push(RIGHT_EDGE);
    out.push('\n');

    out.push_str(BOTTOM_BORDER);
    out
}

/// Pushes the rank marker and its padding, 3 glyphs in total.
///
/// Ten keeps both digits and one space; every other rank, including
/// [`Rank::Unknown`], shows the first character of its token and two spaces.
/// The padding sits between the marker and the suit glyph.
fn push_rank(out: &mut String, rank: Rank, marker_first: bool) {
    let (marker, padding) = match rank {
        Rank::Ten => (rank.as_str(), " "),
        _ => (first_char(rank.as_str()), "  "),
    };

    if marker_first {
        out.push_str(marker);
        out.push_str(padding);
    } else {
        out.push_str(padding);
        out.push_str(marker);
    }
}

fn first_char(token: &str) -> &str {
    token
        .char_indices()
        .nth(1)
        .map_or(token, |(end, _)| &token[..end])
}
