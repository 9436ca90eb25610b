//! Keystream generation: the five-stage deck permutation step.
//!
//! Each output value costs one full step: advance joker A by one, advance
//! joker B by two, triple-split around the jokers, count-cut by the bottom
//! card's value, then read the output through the top card. A step whose
//! output lands on a joker is discarded and retried.
//!
//! Every stage keeps all 54 cards present exactly once; the arithmetic in
//! the wraparound cases exists precisely to keep every index in 0..=53.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::cards::{JokerTag, JOKER_VALUE};

use super::state::{Deck, DECK_SIZE};

const BOTTOM: usize = DECK_SIZE - 1;

impl Deck {
    /// Generate the next `n` keystream values, each in 1..=52.
    ///
    /// Joker outputs (53) are discarded and regenerated without counting
    /// toward `n`. The deck is permuted in place by every step, so the
    /// call is stateful: two consecutive calls produce continuation
    /// values, never the same ones.
    ///
    /// ```
    /// use pontifex::Deck;
    ///
    /// let mut deck = Deck::new();
    /// let ks = deck.keystream(10);
    ///
    /// assert_eq!(ks.len(), 10);
    /// assert!(ks.iter().all(|&v| (1..=52).contains(&v)));
    /// ```
    pub fn keystream(&mut self, n: usize) -> Vec<u8> {
        let mut values = Vec::with_capacity(n);
        let mut discarded = 0usize;
        while values.len() < n {
            let value = self.step();
            if value == JOKER_VALUE {
                trace!("joker output discarded, retrying");
                discarded += 1;
            } else {
                values.push(value);
            }
        }
        debug!(
            "emitted {} keystream values ({} joker outputs discarded)",
            n, discarded
        );
        values
    }

    /// Advance the permutation by one full step and read the output value.
    ///
    /// Returns a value in 1..=53; 53 means the step must be discarded.
    fn step(&mut self) -> u8 {
        self.advance_joker_a();
        self.advance_joker_b();
        self.triple_split();
        self.count_cut();
        self.output_value()
    }

    /// Move joker A down one position.
    ///
    /// From the bottom it wraps to index 1, just below the top card; it
    /// never becomes the new top.
    fn advance_joker_a(&mut self) {
        let i = self.joker_index(JokerTag::A);
        if i == BOTTOM {
            let joker = self.cards[BOTTOM];
            self.cards.copy_within(1..BOTTOM, 2);
            self.cards[1] = joker;
        } else {
            self.cards.swap(i, i + 1);
        }
    }

    /// Move joker B down two positions.
    ///
    /// From the bottom it wraps to index 2, from second-to-bottom to
    /// index 1; otherwise two single swaps.
    fn advance_joker_b(&mut self) {
        let i = self.joker_index(JokerTag::B);
        if i == BOTTOM {
            let joker = self.cards[BOTTOM];
            self.cards.copy_within(2..BOTTOM, 3);
            self.cards[2] = joker;
        } else if i == BOTTOM - 1 {
            let joker = self.cards[BOTTOM - 1];
            self.cards.copy_within(1..BOTTOM - 1, 2);
            self.cards[1] = joker;
        } else {
            self.cards.swap(i, i + 1);
            self.cards.swap(i + 1, i + 2);
        }
    }

    /// Exchange everything above the first joker with everything below
    /// the second. The joker-bracketed middle run is pinned in place and
    /// never reordered internally.
    fn triple_split(&mut self) {
        let a = self.joker_index(JokerTag::A);
        let b = self.joker_index(JokerTag::B);
        let top = a.min(b);
        let bottom = a.max(b);

        let mut next: SmallVec<[_; DECK_SIZE]> = SmallVec::new();
        next.extend_from_slice(&self.cards[bottom + 1..]);
        next.extend_from_slice(&self.cards[top..=bottom]);
        next.extend_from_slice(&self.cards[..top]);
        self.cards.copy_from_slice(&next);
    }

    /// Move the top `v` cards, order preserved, to just above the bottom
    /// card, where `v` is the bottom card's value. The bottom card never
    /// moves; a joker on the bottom counts as 53, which cuts the whole
    /// deck above it and changes nothing.
    fn count_cut(&mut self) {
        let count = usize::from(self.cards[BOTTOM].value());
        trace!("count cut of {} cards", count);

        let mut next: SmallVec<[_; DECK_SIZE]> = SmallVec::new();
        next.extend_from_slice(&self.cards[count..BOTTOM]);
        next.extend_from_slice(&self.cards[..count]);
        next.push(self.cards[BOTTOM]);
        self.cards.copy_from_slice(&next);
    }

    /// Read the output: the value of the card found by stepping down from
    /// the top by the top card's value. The top card's value is 1..=53,
    /// so the lookup always lands on a valid index.
    fn output_value(&self) -> u8 {
        let top = usize::from(self.cards[0].value());
        self.cards[top].value()
    }
}
