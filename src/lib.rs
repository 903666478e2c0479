pub mod cards;
pub mod gameplay;

/// comparable power of a classified hand.
///
/// ordinary shapes live on the 1..=15 Rank scale,
/// nukes on their own 1..=3 scale.
pub type Strength = u8;

/// seat index at the table
pub type Position = usize;
