//! # proust
//!
//! Segments a literary text into a book → paragraph → sentence → phrase → word
//! tree, exports it as S-expressions, and walks it one word at a time.
//!
//! ## Testing
//!
//! Shared fixtures live in the [testing module](proust::testing). Integration
//! tests under `tests/` exercise the public pipeline end to end.

pub mod proust;
