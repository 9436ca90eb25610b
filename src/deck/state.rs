//! Deck construction, accessors, and validated snapshots.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cards::{Card, JokerTag, Suit};
use crate::error::CipherError;

/// A cipher deck always holds exactly this many cards.
pub const DECK_SIZE: usize = 54;

/// An ordered permutation of the 54 cards, the cipher's entire state.
///
/// Index 0 is the top of the deck, index 53 the bottom. A fresh deck
/// starts in the fixed order clubs A-K, diamonds A-K, hearts A-K,
/// spades A-K, joker A, joker B.
///
/// The deck is mutated in place by every keystream value it emits and
/// there is no reset: construct a fresh `Deck` to restart a session.
/// Cloning is explicit and yields a fully independent deck.
///
/// ## Example
///
/// ```
/// use pontifex::Deck;
///
/// let mut deck = Deck::new();
/// let first = deck.keystream(2);
/// let next = deck.keystream(2);
///
/// // Generation continues the permutation, it never restarts.
/// let mut fresh = Deck::new();
/// assert_eq!([first, next].concat(), fresh.keystream(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub(super) cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Create a deck in the fixed starting order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = [Card::joker(JokerTag::B); DECK_SIZE];
        let mut i = 0;
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards[i] = Card::suited(suit, rank);
                i += 1;
            }
        }
        cards[52] = Card::joker(JokerTag::A);
        cards[53] = Card::joker(JokerTag::B);
        Self { cards }
    }

    /// The cards in order, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// Current position of a joker.
    ///
    /// Panics if the joker is missing, which would mean the permutation
    /// invariant has been broken.
    pub(super) fn joker_index(&self, tag: JokerTag) -> usize {
        let target = Card::joker(tag);
        self.cards
            .iter()
            .position(|&card| card == target)
            .expect("deck invariant broken: joker missing")
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a deck from an explicit card sequence, validating that it is
/// a permutation of the standard 54 cards.
impl TryFrom<Vec<Card>> for Deck {
    type Error = CipherError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let cards: [Card; DECK_SIZE] = cards
            .try_into()
            .map_err(|v: Vec<Card>| CipherError::InvalidDeckSize(v.len()))?;

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            if std::mem::replace(&mut seen[card.ordinal()], true) {
                return Err(CipherError::NotAPermutation);
            }
        }
        Ok(Self { cards })
    }
}

impl Serialize for Deck {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.cards.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cards = Vec::<Card>::deserialize(deserializer)?;
        Deck::try_from(cards).map_err(D::Error::custom)
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
