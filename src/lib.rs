//! A single playing card with terminal text-art rendering and optional
//! `no_std` support.
//!
//! A [`Card`] takes a [`Suit`] and a rank string. Unrecognized ranks are not
//! errors: they normalize to [`Rank::Unknown`] with a value of 0. The card's
//! 5-line rendering is built once at construction.
//!
//! # Example
//!
//! ```
//! use termcard::{Card, Suit};
//!
//! let card = Card::new(Suit::Diamond, "5");
//! assert_eq!(
//!     card.to_text(),
//!     "▁▁▁▁▁▁\n▏5  ♦▕\n▏ ┓┗ ▕\n▏♦  5▕\n▔▔▔▔▔▔",
//! );
//! ```
//!
//! Use [`Card::try_new`] to reject unrecognized ranks instead.
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod rank;
pub mod render;

// Re-export main types
pub use card::{Card, Suit};
pub use error::RankError;
pub use rank::{Rank, derive_value, normalize_rank};
