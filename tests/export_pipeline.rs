//! End-to-end tests: text file → paragraphs → tree → export formats

use proptest::prelude::*;
use proust::proust::ast::UnitKind;
use proust::proust::classify::DefaultTag;
use proust::proust::formats::{
    parse_sexpr, parse_sexpr_all, to_json, to_sexpr, FormatRegistry, SExprNode,
};
use proust::proust::loading::{load_paragraphs, LoadOptions};
use proust::proust::segmenting::{segment, Segmenter, SegmenterOptions};
use proust::proust::testing::factories::{swann_tree, SWANN_OPENING};
use std::io::Write;

#[test]
fn test_swann_opening_parses_back() {
    let tree = swann_tree();
    let registry = FormatRegistry::default();
    let paragraphs: Vec<_> = tree.paragraphs().collect();

    let exported = registry.serialize(&paragraphs, "sexpr").unwrap();
    let parsed = parse_sexpr_all(&exported).unwrap();

    assert_eq!(parsed.len(), 3);
    for (node, unit) in parsed.iter().zip(&paragraphs) {
        assert_eq!(node, &SExprNode::from_unit(*unit));
    }
}

#[test]
fn test_whole_book_export_counts_every_unit() {
    let tree = swann_tree();
    let exported = FormatRegistry::default()
        .serialize(&[tree.root()], "sexpr")
        .unwrap();

    let book = parse_sexpr(&exported).unwrap();
    assert_eq!(book.kind, UnitKind::Book);
    assert_eq!(book.node_count(), tree.len());
}

#[test]
fn test_every_line_ends_with_a_newline() {
    let tree = segment(&SWANN_OPENING);
    let exported = FormatRegistry::default()
        .serialize(&[tree.root()], "sexpr")
        .unwrap();

    assert!(exported.ends_with(")\n"));
    assert!(exported.lines().all(|line| !line.is_empty()));
    assert!(exported.lines().all(|line| !line.ends_with(' ')));
}

#[test]
fn test_json_lists_the_selected_paragraphs() {
    let tree = swann_tree();
    let units: Vec<_> = tree.paragraphs().skip(1).collect();
    let value: serde_json::Value = serde_json::from_str(&to_json(&units).unwrap()).unwrap();

    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], "book-p1");
    assert_eq!(array[0]["kind"], "PARAGRAPH");
    assert_eq!(array[1]["metadata"]["position"], 2);
}

#[test]
fn test_file_to_export() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Titre").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Je vois.").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Il part,").unwrap();
    writeln!(file, "elle reste.").unwrap();

    let options = LoadOptions {
        header_lines: 2,
        paragraph_limit: 0,
    };
    let paragraphs = load_paragraphs(file.path(), &options).unwrap();
    let tree = segment(&paragraphs);
    let exported = FormatRegistry::default()
        .serialize(&tree.paragraphs().collect::<Vec<_>>(), "sexpr")
        .unwrap();

    insta::assert_snapshot!(exported, @r#"
    (PARAGRAPH :id "book-p0" :metadata {:position 0, :length 8}
      (SENTENCE :id "book-p0-s0" :metadata {:position 0, :length 8}
        (PHRASE :id "book-p0-s0-p0" :metadata {:position 0}
          (PRON "Je")
          (WORD "vois")
        )
        (PUNCT ".")
      )
    )
    (PARAGRAPH :id "book-p1" :metadata {:position 1, :length 20}
      (SENTENCE :id "book-p1-s0" :metadata {:position 0, :length 20}
        (PHRASE :id "book-p1-s0-p0" :metadata {:position 0}
          (PRON "Il")
          (WORD "part")
        )
        (PUNCT ",")
        (PHRASE :id "book-p1-s0-p1" :metadata {:position 1}
          (PRON "elle")
          (WORD "reste")
        )
        (PUNCT ".")
      )
    )
    "#);
}

fn paragraph_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            "[a-zA-Zéàç0-9]{1,8}",
            prop_oneof![Just(" "), Just(", "), Just("; "), Just(". "), Just(" ? "), Just(": ")],
        ),
        1..20,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, separator)| format!("{word}{separator}"))
            .collect::<String>()
    })
}

proptest! {
    #[test]
    fn export_parses_back_to_its_tree(
        title in r#"[a-zA-Zé "\\]{0,20}"#,
        paragraphs in prop::collection::vec(paragraph_strategy(), 0..4),
    ) {
        let segmenter = Segmenter::new(SegmenterOptions {
            title,
            default_tag: DefaultTag::Noun,
        });
        let tree = segmenter.segment(&paragraphs);

        let book = parse_sexpr(&to_sexpr(tree.root())).unwrap();
        prop_assert_eq!(book, SExprNode::from_unit(tree.root()));

        let exported: String = tree.paragraphs().map(to_sexpr).collect();
        let parsed = parse_sexpr_all(&exported).unwrap();
        let expected: Vec<_> = tree.paragraphs().map(SExprNode::from_unit).collect();
        prop_assert_eq!(parsed, expected);
    }
}
