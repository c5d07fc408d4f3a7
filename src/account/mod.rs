//! Bank account numbers read from scanned 3-row ASCII art.
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```
//!
//! A block is parsed into a [`Grid`], sliced into nine [`Cell`]s, and each
//! cell is classified as a [`Digit`]. [`decode`] does all three.
pub mod cell;
pub use cell::*;

pub mod digit;
pub use digit::*;

pub mod error;
pub use error::*;

pub mod grid;
pub use grid::*;

pub mod number;
pub use number::*;
