//! Treeviz formatter
//!
//! One line per unit, nesting drawn with box connectors:
//!
//!     └─ ¶ Il part, elle reste.
//!       └─ ↵ Il part, elle reste.
//!         ├─ ◇ Il part
//!         │ ├─ PRON Il
//!         │ └─ WORD part
//!         ├─ PUNCT ,
//!         ...
//!
//! Icons
//!     Book: ⧉
//!     Paragraph: ¶
//!     Sentence: ↵
//!     Phrase: ◇
//! Terminals are labelled with their tag instead of an icon. Labels are
//! truncated to 30 characters.

use super::registry::{FormatError, Formatter};
use crate::proust::ast::{Unit, UnitKind};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Book => "⧉",
        UnitKind::Paragraph => "¶",
        UnitKind::Sentence => "↵",
        UnitKind::Phrase => "◇",
        UnitKind::Terminal(tag) => tag.as_str(),
    }
}

pub fn to_treeviz_str(units: &[Unit<'_>]) -> String {
    let mut result = String::new();
    append_children(&mut result, units.iter().copied(), units.len(), "");
    result
}

fn append_unit(result: &mut String, unit: Unit<'_>, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon(unit.kind()),
        truncate(unit.text(), LABEL_WIDTH)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, unit.children(), unit.child_count(), &new_prefix);
}

fn append_children<'t>(
    result: &mut String,
    children: impl Iterator<Item = Unit<'t>>,
    count: usize,
    prefix: &str,
) {
    for (i, child) in children.enumerate() {
        append_unit(result, child, prefix, i + 1 == count);
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, units: &[Unit<'_>]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(units))
    }

    fn description(&self) -> &str {
        "One line per unit with box-drawing connectors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proust::segmenting::segment;

    #[test]
    fn test_treeviz_paragraph() {
        let tree = segment(&["Il part, elle reste."]);
        let paragraphs: Vec<_> = tree.paragraphs().collect();

        insta::assert_snapshot!(to_treeviz_str(&paragraphs), @r"
        └─ ¶ Il part, elle reste.
          └─ ↵ Il part, elle reste.
            ├─ ◇ Il part
            │ ├─ PRON Il
            │ └─ WORD part
            ├─ PUNCT ,
            ├─ ◇ elle reste
            │ ├─ PRON elle
            │ └─ WORD reste
            └─ PUNCT .
        ");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let tree = segment(&["Longtemps je me suis couché de bonne heure"]);
        let output = to_treeviz_str(&[tree.paragraph(0).unwrap()]);
        let first = output.lines().next().unwrap();
        assert_eq!(first, "└─ ¶ Longtemps je me suis couché de...");
    }
}
