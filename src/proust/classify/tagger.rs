//! External linguistic tagger interface
//!
//! A [`Tagger`] receives a whole paragraph and returns its own token stream.
//! Its tokenization rarely matches ours exactly (elisions, multi-word
//! expressions), so [`TaggerClassifier`] aligns the two streams by text:
//! each of our tokens takes the next tagged token with the same text within a
//! short lookahead window. Tokens without a counterpart get a bare `WORD` tag
//! and no lemma, never a heuristic guess.

use super::{Annotation, Classify, TerminalToken};
use crate::proust::ast::Tag;
use thiserror::Error;

/// How far ahead in the tagger's stream a token may be matched.
const ALIGNMENT_LOOKAHEAD: usize = 8;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("tagger '{name}' is unavailable: {reason}")]
    Unavailable { name: String, reason: String },

    #[error("tagger '{name}' failed: {reason}")]
    Failed { name: String, reason: String },

    #[error("tagger output line {line} is malformed: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("I/O error talking to the tagger: {0}")]
    Io(#[from] std::io::Error),
}

/// One token as reported by an external tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: Tag,
    pub lemma: Option<String>,
    pub pos: Option<String>,
    /// The tagger believes a sentence starts at this token.
    pub sentence_start: bool,
}

/// A pluggable document tagger.
pub trait Tagger {
    fn name(&self) -> &str;

    /// Check the backend can be used. Called once, before any document.
    fn probe(&self) -> Result<(), TaggerError> {
        Ok(())
    }

    fn tag_document(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError>;
}

/// [`Classify`] implementation backed by a [`Tagger`].
pub struct TaggerClassifier {
    tagger: Box<dyn Tagger>,
}

impl TaggerClassifier {
    pub fn new(tagger: Box<dyn Tagger>) -> Self {
        TaggerClassifier { tagger }
    }
}

impl Classify for TaggerClassifier {
    fn name(&self) -> &str {
        self.tagger.name()
    }

    fn annotate(
        &self,
        paragraph: &str,
        tokens: &[TerminalToken<'_>],
    ) -> Result<Vec<Annotation>, TaggerError> {
        let tagged = self.tagger.tag_document(paragraph)?;
        Ok(align(tokens, &tagged))
    }
}

fn align(tokens: &[TerminalToken<'_>], tagged: &[TaggedToken]) -> Vec<Annotation> {
    let mut next = 0;
    tokens
        .iter()
        .map(|token| {
            let window_end = (next + ALIGNMENT_LOOKAHEAD).min(tagged.len());
            let found = tagged[next..window_end]
                .iter()
                .position(|candidate| candidate.text == token.text);
            match found {
                Some(offset) => {
                    let matched = &tagged[next + offset];
                    next += offset + 1;
                    Annotation {
                        tag: matched.tag,
                        lemma: matched.lemma.clone(),
                        pos: matched.pos.clone(),
                    }
                }
                None => Annotation::tag(Tag::Word),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTagger(Vec<TaggedToken>);

    impl Tagger for FixedTagger {
        fn name(&self) -> &str {
            "fixed"
        }

        fn tag_document(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
            Ok(self.0.clone())
        }
    }

    fn tagged(text: &str, tag: Tag, lemma: &str) -> TaggedToken {
        TaggedToken {
            text: text.to_string(),
            tag,
            lemma: Some(lemma.to_string()),
            pos: None,
            sentence_start: false,
        }
    }

    #[test]
    fn test_aligned_tokens_take_tagger_output() {
        let classifier = TaggerClassifier::new(Box::new(FixedTagger(vec![
            tagged("Je", Tag::Pron, "je"),
            tagged("vois", Tag::V, "voir"),
            tagged(".", Tag::Punct, "."),
        ])));
        let tokens = [
            TerminalToken::new("Je", 0),
            TerminalToken::new("vois", 1),
            TerminalToken::new(".", 0),
        ];
        let annotations = classifier.annotate("Je vois.", &tokens).unwrap();
        assert_eq!(annotations[1].tag, Tag::V);
        assert_eq!(annotations[1].lemma.as_deref(), Some("voir"));
        assert_eq!(annotations.len(), 3);
    }

    #[test]
    fn test_unmatched_tokens_fall_back_to_word_without_lemma() {
        // The tagger keeps the elision "l'" as one token; we split it.
        let classifier = TaggerClassifier::new(Box::new(FixedTagger(vec![
            tagged("l'", Tag::Det, "le"),
            tagged("enfant", Tag::N, "enfant"),
        ])));
        let tokens = [TerminalToken::new("l", 0), TerminalToken::new("enfant", 1)];
        let annotations = classifier.annotate("l'enfant", &tokens).unwrap();
        assert_eq!(annotations[0], Annotation::tag(Tag::Word));
        assert_eq!(annotations[1].tag, Tag::N);
    }

    #[test]
    fn test_alignment_skips_extra_tagger_tokens() {
        let classifier = TaggerClassifier::new(Box::new(FixedTagger(vec![
            tagged("«", Tag::Punct, "«"),
            tagged("Il", Tag::Pron, "il"),
            tagged("part", Tag::V, "partir"),
        ])));
        let tokens = [TerminalToken::new("Il", 0), TerminalToken::new("part", 1)];
        let annotations = classifier.annotate("« Il part", &tokens).unwrap();
        assert_eq!(annotations[0].tag, Tag::Pron);
        assert_eq!(annotations[1].lemma.as_deref(), Some("partir"));
    }

    #[test]
    fn test_empty_tagger_output() {
        let classifier = TaggerClassifier::new(Box::new(FixedTagger(Vec::new())));
        let tokens = [TerminalToken::new("Il", 0)];
        let annotations = classifier.annotate("Il", &tokens).unwrap();
        assert_eq!(annotations, vec![Annotation::tag(Tag::Word)]);
    }
}
