//! Grammatical classification of terminal tokens
//!
//! The segmenter talks to one [`Classify`] implementation, chosen once when
//! the segmenter is built:
//!
//!     HeuristicClassifier  closed lexicon + suffix rules, never fails
//!     TaggerClassifier     wraps an external [`Tagger`] and aligns its output
//!                          with the segmenter's own tokens
//!
//! A tagger is the sole source of truth for the tokens it annotates. The two
//! paths are never mixed for the same token: if the tagger fails, the
//! segmenter re-annotates the whole paragraph with the heuristic.

pub mod command;
pub mod heuristic;
pub mod lexicon;
pub mod tagger;

pub use command::CommandTagger;
pub use heuristic::{DefaultTag, HeuristicClassifier};
pub use lexicon::Lexicon;
pub use tagger::{TaggedToken, Tagger, TaggerClassifier, TaggerError};

use crate::proust::ast::Tag;

/// A terminal waiting for its tag, in text order within its paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalToken<'a> {
    pub text: &'a str,
    /// Index of the token within its phrase (0 for sentence-level punctuation).
    pub position: usize,
}

impl<'a> TerminalToken<'a> {
    pub fn new(text: &'a str, position: usize) -> Self {
        TerminalToken { text, position }
    }
}

/// Tag plus the optional extras an external tagger can supply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub tag: Tag,
    pub lemma: Option<String>,
    /// The tagger's own part-of-speech label, before mapping onto [`Tag`].
    pub pos: Option<String>,
}

impl Annotation {
    pub fn tag(tag: Tag) -> Self {
        Annotation {
            tag,
            lemma: None,
            pos: None,
        }
    }
}

/// Classification capability used by the segmenter.
pub trait Classify {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Annotate every terminal of `paragraph`, one annotation per token, in order.
    fn annotate(
        &self,
        paragraph: &str,
        tokens: &[TerminalToken<'_>],
    ) -> Result<Vec<Annotation>, TaggerError>;
}
