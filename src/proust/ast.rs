//! Unit tree data model
//!
//! The tree is an arena: every unit lives in one `Vec` owned by [`UnitTree`],
//! children are stored as ordered indices and the parent link is a plain
//! index, so ownership flows strictly from the BOOK root downwards.
//!
//! Trees are only built through [`TreeBuilder`]; `finish` consumes the
//! builder, and the resulting [`UnitTree`] has no mutating API.

pub mod kind;
pub mod metadata;
pub mod tree;

pub use kind::{Tag, UnitKind};
pub use metadata::{MetaValue, Metadata};
pub use tree::{TreeBuilder, Unit, UnitId, UnitTree};
