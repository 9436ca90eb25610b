//! Crate error type.

use thiserror::Error;

/// Convenience alias for results carrying a [`CipherError`].
pub type Result<T> = std::result::Result<T, CipherError>;

/// Errors produced by the cipher engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The keystream is shorter than the message it must cover.
    #[error("keystream supplies {supplied} values but the message needs {required}")]
    InsufficientKeystream {
        /// Message length in letters.
        required: usize,
        /// Keystream values supplied by the caller.
        supplied: usize,
    },

    /// A deck snapshot did not hold exactly 54 cards.
    #[error("deck snapshot holds {0} cards, expected 54")]
    InvalidDeckSize(usize),

    /// A deck snapshot held 54 cards that are not a permutation of the
    /// standard deck (a card is duplicated or missing).
    #[error("deck snapshot is not a permutation of the standard 54 cards")]
    NotAPermutation,
}
