//! Poker hand classification.
//!
//! [`Evaluator`] maps a 5-card [`Hand`](crate::cards::Hand) to its
//! [`Ranking`], one of nine categories from high card to straight flush.
pub mod evaluator;
pub use evaluator::*;

pub mod ranking;
pub use ranking::*;
