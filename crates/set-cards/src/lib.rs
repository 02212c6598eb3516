//! Card, deck, and board primitives with set legality rules.
//!
//! ## Core Types
//!
//! - [`Card`] — An opaque card identifier, decoded into features by [`Rules`]
//! - [`Deck`] — Cards not on the board, drawn uniformly at random
//! - [`Board`] — Fixed grid of slots with a slot↔card bijection and token markers
//!
//! ## Legality
//!
//! - [`Rules`] — The set-validity predicate and set search
//! - [`Features`] — Classic rules: every feature all-equal or all-distinct
mod board;
mod card;
mod deck;
mod rules;

pub use board::*;
pub use card::*;
pub use deck::*;
pub use rules::*;
