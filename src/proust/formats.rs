//! Output formats for unit trees
//!
//!     sexpr     nested S-expressions, the export format; has a reader for round trips
//!     json      serde_json dump of the same structure
//!     treeviz   one line per unit, for eyeballing segmentation

pub mod json;
pub mod registry;
pub mod sexpr;
pub mod treeviz;

pub use json::{to_json, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use sexpr::{parse_sexpr, parse_sexpr_all, to_sexpr, SExprError, SExprFormatter, SExprNode};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
