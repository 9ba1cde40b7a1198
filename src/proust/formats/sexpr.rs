//! S-expression export
//!
//! Terminals fit on one line:
//!
//!     (PRON "Je")
//!     (V "vois" :metadata {:lemma "voir", :pos "VER:pres"})
//!
//! Non-terminals carry their derived id and metadata, then one child per line,
//! indented two spaces per level, and close on a line of their own:
//!
//!     (PHRASE :id "book-p0-s0-p0" :metadata {:position 0}
//!       (PRON "Je")
//!       (WORD "vois")
//!     )
//!
//! Metadata keys keep insertion order so exports are reproducible. The text of
//! non-terminal units is not written; it is the concatenation of their leaves.

pub mod reader;
pub mod serializer;

pub use reader::{parse_sexpr, parse_sexpr_all, SExprError, SExprNode};
pub use serializer::to_sexpr;

use super::registry::{FormatError, Formatter};
use crate::proust::ast::Unit;

pub struct SExprFormatter;

impl Formatter for SExprFormatter {
    fn name(&self) -> &str {
        "sexpr"
    }

    fn serialize(&self, units: &[Unit<'_>]) -> Result<String, FormatError> {
        Ok(units.iter().map(|unit| to_sexpr(*unit)).collect())
    }

    fn description(&self) -> &str {
        "Nested S-expressions, one block per unit"
    }
}
