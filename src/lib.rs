//! # pontifex
//!
//! A deck-of-cards stream cipher engine implementing the Solitaire
//! ("Pontifex") cipher: a deterministic keystream generator driven by
//! repeatedly permuting a 54-card deck, combined with a mod-26 text
//! cipher for alphabetic messages.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: A deck in a given order always produces the same
//!    keystream. There is no hidden randomness anywhere in the engine.
//!
//! 2. **Exclusive State**: A `Deck` owns its permutation and is mutated in
//!    place by every keystream value it emits. Two consecutive
//!    `keystream` calls continue the same permutation; they are never
//!    independent. Separate `Deck` instances share nothing.
//!
//! 3. **Explicit Preconditions**: The one caller-facing contract (a
//!    keystream must cover the whole message) is checked and reported as
//!    an error rather than trusted.
//!
//! ## Modules
//!
//! - `cards`: Suits, jokers, and the 54 card values
//! - `deck`: The deck permutation engine and keystream generation
//! - `message`: Message normalization and the mod-26 cipher
//! - `error`: Crate error type
//!
//! ## Example
//!
//! ```
//! use pontifex::{Deck, Message};
//!
//! let message = Message::new("Hey, king!");
//!
//! let mut deck = Deck::new();
//! let keystream = deck.keystream(message.len());
//! let ciphertext = message.encrypt(&keystream).unwrap();
//!
//! // The receiver starts from the same deck order.
//! let mut deck = Deck::new();
//! let keystream = deck.keystream(message.len());
//! let plaintext = Message::new(&ciphertext).decrypt(&keystream).unwrap();
//!
//! assert_eq!(plaintext, message.text());
//! ```

pub mod cards;
pub mod deck;
pub mod error;
pub mod message;

// Re-export commonly used types
pub use crate::cards::{Card, JokerTag, Suit, JOKER_VALUE};
pub use crate::deck::{Deck, DECK_SIZE};
pub use crate::error::{CipherError, Result};
pub use crate::message::Message;
