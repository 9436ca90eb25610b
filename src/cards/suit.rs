use serde::{Deserialize, Serialize};

/// The four French suits, in value-table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits, in the order they stack in a fresh deck.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Value-table offset: a suited card's value is `base() + rank`.
    #[must_use]
    pub const fn base(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 13,
            Suit::Hearts => 26,
            Suit::Spades => 39,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Clubs => "c",
                Suit::Diamonds => "d",
                Suit::Hearts => "h",
                Suit::Spades => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bases() {
        assert_eq!(Suit::Clubs.base(), 0);
        assert_eq!(Suit::Diamonds.base(), 13);
        assert_eq!(Suit::Hearts.base(), 26);
        assert_eq!(Suit::Spades.base(), 39);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Suit::Clubs), "c");
        assert_eq!(format!("{}", Suit::Spades), "s");
    }

    #[test]
    fn test_all_ordering() {
        let bases: Vec<u8> = Suit::ALL.iter().map(|s| s.base()).collect();
        assert_eq!(bases, vec![0, 13, 26, 39]);
    }
}
