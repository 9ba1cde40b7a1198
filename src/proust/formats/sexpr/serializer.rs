use crate::proust::ast::{MetaValue, Metadata, Unit};

/// Render `unit` and its subtree. Indentation is relative to `unit`.
pub fn to_sexpr(unit: Unit<'_>) -> String {
    let mut out = String::new();
    write_unit(&mut out, unit, 0);
    out
}

fn write_unit(out: &mut String, unit: Unit<'_>, level: usize) {
    let indent = "  ".repeat(level);
    out.push_str(&indent);
    out.push('(');
    out.push_str(unit.kind().as_str());

    if unit.is_terminal() {
        out.push(' ');
        push_quoted(out, unit.text());
        if !unit.metadata().is_empty() {
            out.push_str(" :metadata ");
            push_metadata(out, unit.metadata());
        }
        out.push_str(")\n");
        return;
    }

    out.push_str(" :id ");
    push_quoted(out, &unit.id());
    out.push_str(" :metadata ");
    push_metadata(out, unit.metadata());
    out.push('\n');
    for child in unit.children() {
        write_unit(out, child, level + 1);
    }
    out.push_str(&indent);
    out.push_str(")\n");
}

fn push_metadata(out: &mut String, metadata: &Metadata) {
    out.push('{');
    for (i, (key, value)) in metadata.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push(':');
        out.push_str(key);
        out.push(' ');
        match value {
            MetaValue::Int(n) => out.push_str(&n.to_string()),
            MetaValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            MetaValue::Text(text) => push_quoted(out, text),
        }
    }
    out.push('}');
}

pub(super) fn push_quoted(out: &mut String, text: &str) {
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proust::ast::{Tag, TreeBuilder, UnitKind};
    use crate::proust::segmenting::segment;

    #[test]
    fn test_paragraph_block() {
        let tree = segment(&["Je vois."]);
        let paragraph = tree.paragraph(0).unwrap();

        insta::assert_snapshot!(to_sexpr(paragraph), @r#"
        (PARAGRAPH :id "book-p0" :metadata {:position 0, :length 8}
          (SENTENCE :id "book-p0-s0" :metadata {:position 0, :length 8}
            (PHRASE :id "book-p0-s0-p0" :metadata {:position 0}
              (PRON "Je")
              (WORD "vois")
            )
            (PUNCT ".")
          )
        )
        "#);
    }

    #[test]
    fn test_terminal_with_metadata_and_escapes() {
        let mut builder = TreeBuilder::new("");
        let root = builder.root();
        let leaf = builder.push(
            root,
            UnitKind::Terminal(Tag::Word),
            r#"dit "non\""#,
            Metadata::new().with("lemma", "dire").with("proper", false),
        );
        let tree = builder.finish();

        assert_eq!(
            to_sexpr(tree.get(leaf).unwrap()),
            "(WORD \"dit \\\"non\\\\\\\"\" :metadata {:lemma \"dire\", :proper false})\n"
        );
    }

    #[test]
    fn test_empty_book() {
        let tree = segment::<&str>(&[]);
        assert_eq!(to_sexpr(tree.root()), "(BOOK :id \"book\" :metadata {}\n)\n");
    }
}
