//! Testing utilities
//!
//! Segmenter tests check tree shape and content, not counts alone. Use the
//! fluent API rather than matching units by hand:
//!
//! ```rust-example
//! use proust::proust::testing::{assert_tree, factories};
//!
//! let tree = factories::scenario_tree();
//! assert_tree(&tree)
//!     .paragraph_count(2)
//!     .paragraph(1, |paragraph| {
//!         paragraph.child(0, |sentence| {
//!             sentence
//!                 .child_kinds(&["PHRASE", "PUNCT", "PHRASE", "PUNCT"])
//!                 .child(0, |phrase| phrase.text("Il part").terminal_texts(&["Il", "part"]))
//!         })
//!     });
//! ```
//!
//! Sample text lives in [`factories`] so every test reads the same French.

mod testing_assertions;
mod testing_factories;
mod testing_matchers;

pub use testing_assertions::{assert_tree, TreeAssertion, UnitAssertion};
pub use testing_matchers::TextMatch;

// Public submodule path: crate::proust::testing::factories
pub mod factories {
    pub use super::testing_factories::*;
}
