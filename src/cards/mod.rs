//! Card values: suits, jokers, and the fixed 1-53 value table.
//!
//! ## Key Types
//!
//! - `Suit`: One of the four French suits
//! - `JokerTag`: Distinguishes the two jokers (`A` and `B`)
//! - `Card`: An immutable card with a cipher value in 1..=53
//!
//! Both jokers carry the value 53 but keep distinct identities, so value
//! arithmetic treats them interchangeably while position lookups can still
//! tell them apart.

pub mod card;
pub mod suit;

pub use card::{Card, JokerTag, JOKER_VALUE};
pub use suit::Suit;
