//! The deck permutation engine.
//!
//! A [`Deck`] is an ordered permutation of all 54 cards and the entire
//! state of the cipher. Keystream generation advances the permutation in
//! place, one five-stage step per output value; see [`Deck::keystream`].
//!
//! The permutation invariant (every one of the 54 cards present exactly
//! once) holds after every stage of every step. Snapshots taken through
//! serde re-validate it on the way back in.

pub mod keystream;
pub mod state;

pub use state::{Deck, DECK_SIZE};
