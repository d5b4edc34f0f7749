//! Card construction and rendering tests.

use termcard::render::{BOTTOM_BORDER, CARD_HEIGHT, CARD_WIDTH, MIDDLE_LINE, TOP_BORDER};
use termcard::{Card, Rank, RankError, Suit};

const CANONICAL: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "JACK", "QUEEN", "KING", "ACE",
];

fn content_lines(card: &Card) -> (String, String) {
    let lines: Vec<&str> = card.lines().collect();
    let strip = |line: &str| {
        let inner: Vec<char> = line.chars().collect();
        inner[1..inner.len() - 1].iter().collect::<String>()
    };
    (strip(lines[1]), strip(lines[3]))
}

#[test]
fn five_of_diamonds_renders_exactly() {
    let card = Card::new(Suit::Diamond, "5");

    let expected = [
        "\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}\u{2581}",
        "\u{258F}5  \u{2666}\u{2595}",
        "\u{258F} \u{2513}\u{2517} \u{2595}",
        "\u{258F}\u{2666}  5\u{2595}",
        "\u{2594}\u{2594}\u{2594}\u{2594}\u{2594}\u{2594}",
    ]
    .join("\n");

    assert_eq!(card.to_text(), expected);
    assert_eq!(card.to_string(), expected);
    assert_eq!(content_lines(&card), ("5  ♦".into(), "♦  5".into()));
}

#[test]
fn ten_uses_both_digits() {
    let card = Card::new(Suit::Club, "10");
    assert_eq!(content_lines(&card), ("10 ♣".into(), "♣ 10".into()));
    assert_eq!(card.value(), 10);
}

#[test]
fn face_cards_show_first_letter() {
    let cases = [
        (Suit::Heart, "JACK", "J  ♥", "♥  J", 11),
        (Suit::Diamond, "QUEEN", "Q  ♦", "♦  Q", 12),
        (Suit::Club, "KING", "K  ♣", "♣  K", 13),
        (Suit::Spade, "ACE", "A  ♠", "♠  A", 1),
    ];

    for (suit, rank, top, bottom, value) in cases {
        let card = Card::new(suit, rank);
        assert_eq!(content_lines(&card), (top.into(), bottom.into()), "{rank}");
        assert_eq!(card.value(), value, "{rank}");
        assert_eq!(card.rank_str(), rank);
    }
}

#[test]
fn unknown_rank_renders_sentinel_initial() {
    let card = Card::new(Suit::Heart, "joker");
    assert_eq!(card.rank(), Rank::Unknown);
    assert_eq!(card.rank_str(), "UNKNOWN");
    assert_eq!(card.value(), 0);
    assert_eq!(content_lines(&card), ("U  ♥".into(), "♥  U".into()));
}

#[test]
fn borders_and_middle_are_constant() {
    for suit in Suit::ALL {
        for rank in CANONICAL.iter().copied().chain(["", "bogus"]) {
            let card = Card::new(suit, rank);
            let lines: Vec<&str> = card.lines().collect();
            assert_eq!(lines.len(), CARD_HEIGHT);
            assert_eq!(lines[0], TOP_BORDER);
            assert_eq!(lines[2], MIDDLE_LINE);
            assert_eq!(lines[2], "▏ ┓┗ ▕");
            assert_eq!(lines[4], BOTTOM_BORDER);
        }
    }
}

#[test]
fn every_line_has_the_same_width() {
    for suit in Suit::ALL {
        for rank in CANONICAL.iter().copied().chain(["UNKNOWN", "11"]) {
            let card = Card::new(suit, rank);
            for line in card.lines() {
                assert_eq!(line.chars().count(), CARD_WIDTH, "{rank} of {suit:?}: {line}");
            }
            assert!(!card.to_text().ends_with('\n'));
        }
    }
}

#[test]
fn suit_glyphs() {
    assert_eq!(Suit::Heart.glyph(), '♥');
    assert_eq!(Suit::Diamond.glyph(), '♦');
    assert_eq!(Suit::Club.glyph(), '♣');
    assert_eq!(Suit::Spade.glyph(), '♠');
    assert_eq!(Suit::Spade.to_string(), "♠");
}

#[test]
fn explicit_value_is_not_checked() {
    let card = Card::with_value(Suit::Spade, "5", 99);
    assert_eq!(card.value(), 99);
    assert_eq!(card.rank(), Rank::Five);

    let negative = Card::with_value(Suit::Heart, "nope", -3);
    assert_eq!(negative.value(), -3);
    assert_eq!(negative.rank(), Rank::Unknown);
}

#[test]
fn rendering_depends_only_on_suit_and_rank() {
    for suit in Suit::ALL {
        for rank in CANONICAL {
            let derived = Card::new(suit, rank);
            let explicit = Card::with_value(suit, rank, 42);
            let typed = Card::from_rank(suit, rank.parse().unwrap());

            assert_eq!(derived.to_text(), explicit.to_text());
            assert_eq!(derived, typed);
        }
    }

    assert_eq!(
        Card::new(Suit::Club, "").to_text(),
        Card::new(Suit::Club, "UNKNOWN").to_text()
    );
}

#[test]
fn try_new_rejects_unrecognized_ranks() {
    for rank in CANONICAL {
        assert_eq!(
            Card::try_new(Suit::Diamond, rank).unwrap(),
            Card::new(Suit::Diamond, rank)
        );
    }

    for rank in ["jack", "11", "", " 5", "UNKNOWN"] {
        assert_eq!(
            Card::try_new(Suit::Diamond, rank).unwrap_err(),
            RankError::Unrecognized(rank.into())
        );
    }
}

#[test]
fn write_to_appends_one_line_break() {
    let card = Card::new(Suit::Diamond, "5");
    let mut out = Vec::new();
    card.write_to(&mut out).unwrap();

    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed, format!("{}\n", card.to_text()));
    assert_eq!(printed.matches('\n').count(), CARD_HEIGHT);
}
