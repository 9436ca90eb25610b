//! Immutable card values.
//!
//! A card is either one of the 52 suited cards or one of the two jokers.
//! Its cipher value is fixed by the table clubs 1-13, diamonds 14-26,
//! hearts 27-39, spades 40-52, jokers 53.

use serde::{Deserialize, Serialize};

use super::suit::Suit;

/// Both jokers share this cipher value.
pub const JOKER_VALUE: u8 = 53;

/// Identity tag for the two jokers.
///
/// The jokers are numerically equal but must stay distinguishable: each
/// one advances through the deck by a different step size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JokerTag {
    A,
    B,
}

/// One of the 54 cards in a cipher deck.
///
/// Cards are immutable values: equality compares the full identity
/// (suit and rank, or joker tag), while [`Card::value`] collapses both
/// jokers to 53.
///
/// ## Example
///
/// ```
/// use pontifex::{Card, JokerTag, Suit};
///
/// let qc = Card::suited(Suit::Clubs, 12);
/// assert_eq!(qc.value(), 12);
///
/// let ad = Card::suited(Suit::Diamonds, 1);
/// assert_eq!(ad.value(), 14);
///
/// // Jokers: same value, distinct identity.
/// let a = Card::joker(JokerTag::A);
/// let b = Card::joker(JokerTag::B);
/// assert_eq!(a.value(), b.value());
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// A suited card with rank 1 (ace) through 13 (king).
    Suited { suit: Suit, rank: u8 },
    /// One of the two jokers.
    Joker(JokerTag),
}

impl Card {
    /// Create a suited card.
    ///
    /// Ranks run 1 (ace) through 13 (king). Call sites construct ranks
    /// from controlled loops, so the range is only debug-checked.
    #[must_use]
    pub fn suited(suit: Suit, rank: u8) -> Self {
        debug_assert!((1..=13).contains(&rank), "rank {} out of range", rank);
        Card::Suited { suit, rank }
    }

    /// Create a joker.
    #[must_use]
    pub const fn joker(tag: JokerTag) -> Self {
        Card::Joker(tag)
    }

    /// Cipher value in 1..=53. Both jokers yield 53.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Card::Suited { suit, rank } => suit.base() + rank,
            Card::Joker(_) => JOKER_VALUE,
        }
    }

    /// Whether this card is a joker (of either identity).
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Card::Joker(_))
    }

    /// Dense 0-based index over the 54 distinct cards.
    ///
    /// Unlike [`Card::value`] this keeps the jokers apart (52 and 53),
    /// which is what permutation checks need.
    #[must_use]
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Card::Suited { suit, rank } => (suit.base() + rank) as usize - 1,
            Card::Joker(JokerTag::A) => 52,
            Card::Joker(JokerTag::B) => 53,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Suited { suit, rank } => {
                let rank = match rank {
                    1 => "A".to_string(),
                    10 => "T".to_string(),
                    11 => "J".to_string(),
                    12 => "Q".to_string(),
                    13 => "K".to_string(),
                    n => n.to_string(),
                };
                write!(f, "{}{}", rank, suit)
            }
            Card::Joker(JokerTag::A) => write!(f, "JA"),
            Card::Joker(JokerTag::B) => write!(f, "JB"),
        }
    }
}
