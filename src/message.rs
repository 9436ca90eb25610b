//! Normalized messages and keystream-driven encryption.
//!
//! A [`Message`] holds only uppercase ASCII letters, padded with trailing
//! `X` to a positive multiple of five. Encryption and decryption combine
//! each letter with one keystream value mod 26; positions are fully
//! independent of each other.

use serde::{Deserialize, Serialize};

use crate::error::{CipherError, Result};

/// Output letters group into blocks of this many characters.
const BLOCK_WIDTH: usize = 5;

/// A normalized message: uppercase letters, length a positive multiple
/// of five.
///
/// Construction never fails. Input that contains no letters at all
/// normalizes to `"XXXXX"`; that is the intended degenerate case, not an
/// error. A `Message` is immutable once built.
///
/// ## Example
///
/// ```
/// use pontifex::Message;
///
/// let message = Message::new("Hey, king!");
/// assert_eq!(message.text(), "HEYKINGXXX");
/// assert_eq!(message.len(), 10);
/// assert_eq!(format!("{}", message), "HEYKI NGXXX");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    text: String,
}

impl Message {
    /// Normalize raw text into a message.
    ///
    /// Every character that is not an ASCII letter is stripped, the rest
    /// are uppercased, and trailing `X` padding brings the length to the
    /// next multiple of five (minimum five).
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut text: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let target = text.len().div_ceil(BLOCK_WIDTH).max(1) * BLOCK_WIDTH;
        text.push_str(&"X".repeat(target - text.len()));
        Self { text }
    }

    /// The normalized letters.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message length in letters; always a positive multiple of five.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a message is never shorter than five letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The letters in blocks of five, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &str> {
        (0..self.text.len())
            .step_by(BLOCK_WIDTH)
            .map(move |i| &self.text[i..i + BLOCK_WIDTH])
    }

    /// Encrypt against a keystream, returning the ciphertext letters.
    ///
    /// Each plaintext letter position `b` (A=1..Z=26) is shifted by its
    /// keystream value reduced mod 26 (0 maps to 26), wrapping back into
    /// 1..=26. The keystream must supply at least [`Message::len`]
    /// values; excess values are ignored.
    ///
    /// # Errors
    ///
    /// [`CipherError::InsufficientKeystream`] when the keystream is
    /// shorter than the message.
    pub fn encrypt(&self, keystream: &[u8]) -> Result<String> {
        self.check_keystream(keystream)?;
        Ok(self
            .letters()
            .zip(keystream)
            .map(|(b, &k)| {
                let a = key_shift(k);
                let sum = a + b;
                letter(if sum > 26 { sum - 26 } else { sum })
            })
            .collect())
    }

    /// Decrypt against a keystream, returning the plaintext letters.
    ///
    /// Exact inverse of [`Message::encrypt`] under the same keystream.
    ///
    /// # Errors
    ///
    /// [`CipherError::InsufficientKeystream`] when the keystream is
    /// shorter than the message.
    pub fn decrypt(&self, keystream: &[u8]) -> Result<String> {
        self.check_keystream(keystream)?;
        Ok(self
            .letters()
            .zip(keystream)
            .map(|(b, &k)| {
                let a = key_shift(k);
                letter(if b > a { b - a } else { b + 26 - a })
            })
            .collect())
    }

    /// Alphabet positions of the letters, A=1 .. Z=26.
    fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.text.bytes().map(|ch| ch - b'A' + 1)
    }

    fn check_keystream(&self, keystream: &[u8]) -> Result<()> {
        if keystream.len() < self.len() {
            return Err(CipherError::InsufficientKeystream {
                required: self.len(),
                supplied: keystream.len(),
            });
        }
        Ok(())
    }
}

/// Reduce a keystream value into a shift in 1..=26 (multiples of 26 map
/// to 26, never 0).
fn key_shift(value: u8) -> u8 {
    match value % 26 {
        0 => 26,
        r => r,
    }
}

/// Alphabet position 1..=26 back to its letter.
fn letter(position: u8) -> char {
    (position + b'A' - 1) as char
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, block) in self.blocks().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_strips_and_uppercases() {
        let message = Message::new("Hey, king!");
        assert_eq!(message.text(), "HEYKINGXXX");
        assert_eq!(message.len(), 10);
    }

    #[test]
    fn test_normalization_of_letterless_input() {
        assert_eq!(Message::new("").text(), "XXXXX");
        assert_eq!(Message::new("123 !?").text(), "XXXXX");
    }

    #[test]
    fn test_short_input_pads_to_five() {
        assert_eq!(Message::new("ab").text(), "ABXXX");
    }

    #[test]
    fn test_exact_multiple_is_not_padded() {
        assert_eq!(Message::new("hello").text(), "HELLO");
        assert_eq!(Message::new("helloworld").text(), "HELLOWORLD");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = Message::new("Code in Ruby, live longer!");
        let twice = Message::new(once.text());
        assert_eq!(once, twice);
        assert_eq!(once.len() % 5, 0);
    }

    #[test]
    fn test_encrypt_golden_vector() {
        let keystream = [4, 49, 10, 24, 8, 51, 44, 6, 4, 33];
        let message = Message::new("Hey, king!");
        assert_eq!(message.encrypt(&keystream).unwrap(), "LBIIQMYDBE");
    }

    #[test]
    fn test_decrypt_golden_vector() {
        let keystream = [4, 49, 10, 24, 8, 51, 44, 6, 4, 33];
        let message = Message::new("LBIIQMYDBE");
        assert_eq!(message.decrypt(&keystream).unwrap(), "HEYKINGXXX");
    }

    #[test]
    fn test_shift_wraps_mod_26() {
        // shifts: 26, 26 (52 % 26 == 0), 1, 25, 13
        let keystream = [26, 52, 1, 25, 13];
        let message = Message::new("AAAAA");

        assert_eq!(message.encrypt(&keystream).unwrap(), "AABZN");

        let ciphertext = Message::new("AABZN");
        assert_eq!(ciphertext.decrypt(&keystream).unwrap(), "AAAAA");
    }

    #[test]
    fn test_round_trip() {
        let keystream: Vec<u8> = (1..=30).collect();
        let message = Message::new("The quick brown fox jumps");

        let ciphertext = message.encrypt(&keystream).unwrap();
        let round_trip = Message::new(&ciphertext).decrypt(&keystream).unwrap();
        assert_eq!(round_trip, message.text());
    }

    #[test]
    fn test_short_keystream_is_rejected() {
        let message = Message::new("hello");
        let keystream = [1, 2, 3, 4];

        assert_eq!(
            message.encrypt(&keystream),
            Err(CipherError::InsufficientKeystream {
                required: 5,
                supplied: 4,
            })
        );
        assert_eq!(
            message.decrypt(&keystream),
            Err(CipherError::InsufficientKeystream {
                required: 5,
                supplied: 4,
            })
        );
    }

    #[test]
    fn test_excess_keystream_is_ignored() {
        let short = [1, 2, 3, 4, 5];
        let long = [1, 2, 3, 4, 5, 40, 41, 42];
        let message = Message::new("hello");

        assert_eq!(
            message.encrypt(&short).unwrap(),
            message.encrypt(&long).unwrap()
        );
    }

    #[test]
    fn test_blocks_and_display() {
        let message = Message::new("Hey, king!");
        let blocks: Vec<&str> = message.blocks().collect();
        assert_eq!(blocks, vec!["HEYKI", "NGXXX"]);
        assert_eq!(format!("{}", message), "HEYKI NGXXX");
    }

    #[test]
    fn test_serialization() {
        let message = Message::new("Hey, king!");
        let json = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(message, back);
    }
}
