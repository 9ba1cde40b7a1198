//! Unit kinds and terminal tags

use serde::{Serialize, Serializer};
use std::fmt;

/// Coarse grammatical tag carried by a terminal unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Word,
    Punct,
    Num,
    Pron,
    Det,
    Conj,
    /// Preposition
    P,
    /// Subordinator
    Sub,
    Adj,
    Adv,
    /// Noun
    N,
    /// Verb
    V,
}

impl Tag {
    pub const ALL: [Tag; 12] = [
        Tag::Word,
        Tag::Punct,
        Tag::Num,
        Tag::Pron,
        Tag::Det,
        Tag::Conj,
        Tag::P,
        Tag::Sub,
        Tag::Adj,
        Tag::Adv,
        Tag::N,
        Tag::V,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Word => "WORD",
            Tag::Punct => "PUNCT",
            Tag::Num => "NUM",
            Tag::Pron => "PRON",
            Tag::Det => "DET",
            Tag::Conj => "CONJ",
            Tag::P => "P",
            Tag::Sub => "SUB",
            Tag::Adj => "ADJ",
            Tag::Adv => "ADV",
            Tag::N => "N",
            Tag::V => "V",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of a unit: one of the four structural levels or a tagged leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Book,
    Paragraph,
    Sentence,
    Phrase,
    Terminal(Tag),
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitKind::Book => "BOOK",
            UnitKind::Paragraph => "PARAGRAPH",
            UnitKind::Sentence => "SENTENCE",
            UnitKind::Phrase => "PHRASE",
            UnitKind::Terminal(tag) => tag.as_str(),
        }
    }

    pub fn from_name(name: &str) -> Option<UnitKind> {
        match name {
            "BOOK" => Some(UnitKind::Book),
            "PARAGRAPH" => Some(UnitKind::Paragraph),
            "SENTENCE" => Some(UnitKind::Sentence),
            "PHRASE" => Some(UnitKind::Phrase),
            other => Tag::from_name(other).map(UnitKind::Terminal),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UnitKind::Terminal(_))
    }

    /// Lowercase first letter of the kind name, used in derived ids.
    pub fn initial(&self) -> char {
        self.as_str()
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or('u')
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UnitKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
