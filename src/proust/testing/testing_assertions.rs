//! Fluent assertions over unit trees

use super::testing_matchers::TextMatch;
use crate::proust::ast::{MetaValue, Tag, Unit, UnitKind, UnitTree};

pub fn assert_tree(tree: &UnitTree) -> TreeAssertion<'_> {
    TreeAssertion { tree }
}

pub struct TreeAssertion<'t> {
    tree: &'t UnitTree,
}

impl<'t> TreeAssertion<'t> {
    pub fn paragraph_count(self, expected: usize) -> Self {
        let actual = self.tree.paragraph_count();
        assert_eq!(
            actual,
            expected,
            "expected {expected} paragraphs, found {actual}: [{}]",
            summarize(self.tree.paragraphs())
        );
        self
    }

    pub fn paragraph<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'t>) -> R,
    {
        let unit = self.tree.paragraph(index).unwrap_or_else(|| {
            panic!(
                "paragraph index {index} out of bounds (book has {} paragraphs)",
                self.tree.paragraph_count()
            )
        });
        assertion(UnitAssertion {
            unit,
            context: format!("paragraphs[{index}]"),
        });
        self
    }

    pub fn root<F, R>(self, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'t>) -> R,
    {
        assertion(UnitAssertion {
            unit: self.tree.root(),
            context: "root".to_string(),
        });
        self
    }
}

pub struct UnitAssertion<'t> {
    unit: Unit<'t>,
    context: String,
}

impl<'t> UnitAssertion<'t> {
    pub fn unit(&self) -> Unit<'t> {
        self.unit
    }

    pub fn kind(self, expected: UnitKind) -> Self {
        assert_eq!(
            self.unit.kind(),
            expected,
            "{}: expected a {expected} unit, found {} '{}'",
            self.context,
            self.unit.kind(),
            self.unit.text()
        );
        self
    }

    /// Terminal tagged `tag`.
    pub fn tag(self, tag: Tag) -> Self {
        self.kind(UnitKind::Terminal(tag))
    }

    /// PUNCT terminal with exactly `mark` as text.
    pub fn punct(self, mark: &str) -> Self {
        self.tag(Tag::Punct).text(mark)
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.unit.text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(self.unit.text(), &self.context);
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        TextMatch::Contains(needle.to_string()).assert(self.unit.text(), &self.context);
        self
    }

    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.unit.id(), expected, "{}: id mismatch", self.context);
        self
    }

    pub fn metadata(self, key: &str, expected: impl Into<MetaValue>) -> Self {
        let expected = expected.into();
        assert_eq!(
            self.unit.metadata().get(key),
            Some(&expected),
            "{}: metadata '{key}' mismatch in {:?}",
            self.context,
            self.unit.metadata()
        );
        self
    }

    pub fn no_metadata(self, key: &str) -> Self {
        assert!(
            self.unit.metadata().get(key).is_none(),
            "{}: unexpected metadata '{key}' in {:?}",
            self.context,
            self.unit.metadata()
        );
        self
    }

    pub fn position(self, expected: usize) -> Self {
        self.metadata("position", expected)
    }

    pub fn length(self, expected: usize) -> Self {
        self.metadata("length", expected)
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.unit.child_count();
        assert_eq!(
            actual,
            expected,
            "{}: expected {expected} children, found {actual}: [{}]",
            self.context,
            summarize(self.unit.children())
        );
        self
    }

    /// Kind names of the children, in order.
    pub fn child_kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.unit.children().map(|c| c.kind().as_str()).collect();
        assert_eq!(actual, expected, "{}: child kinds mismatch", self.context);
        self
    }

    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(UnitAssertion<'t>) -> R,
    {
        let unit = self.unit.child(index).unwrap_or_else(|| {
            panic!(
                "{}: child index {index} out of bounds ({} children: [{}])",
                self.context,
                self.unit.child_count(),
                summarize(self.unit.children())
            )
        });
        assertion(UnitAssertion {
            unit,
            context: format!("{}.children[{index}]", self.context),
        });
        self
    }

    /// Texts of the flattened terminal descendants.
    pub fn terminal_texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.unit.terminals().iter().map(|t| t.text()).collect();
        assert_eq!(actual, expected, "{}: terminal texts mismatch", self.context);
        self
    }

    pub fn terminal_tags(self, expected: &[Tag]) -> Self {
        let actual: Vec<UnitKind> = self.unit.terminals().iter().map(|t| t.kind()).collect();
        let expected: Vec<UnitKind> = expected.iter().copied().map(UnitKind::Terminal).collect();
        assert_eq!(actual, expected, "{}: terminal tags mismatch", self.context);
        self
    }
}

fn summarize<'t>(units: impl Iterator<Item = Unit<'t>>) -> String {
    units
        .map(|unit| {
            let text = unit.text();
            if text.chars().count() > 30 {
                format!("{} '{}...'", unit.kind(), text.chars().take(30).collect::<String>())
            } else {
                format!("{} '{text}'", unit.kind())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
