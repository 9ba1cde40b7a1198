//! Built-in rule-based classifier
//!
//! Rules, first match wins:
//!
//!     1. punctuation character                           PUNCT
//!     2. first token of the phrase and a pronoun         PRON
//!     3. conjunction, determiner, preposition,
//!        subordinator (in that order)                    CONJ / DET / P / SUB
//!     4. digits                                          NUM
//!     5. verbal suffix                                   V
//!     6. anything else                                   the configured default

use super::lexicon::Lexicon;
use super::{Annotation, Classify, TaggerError, TerminalToken};
use crate::proust::ast::Tag;
use crate::proust::lexing::{is_number, is_punctuation};

/// Tag given when no rule matches.
///
/// The lenient mode labels unknown words `WORD`; the strict phrase mode
/// commits to `N`. Both are kept as explicit settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultTag {
    #[default]
    Word,
    Noun,
}

impl DefaultTag {
    pub fn tag(&self) -> Tag {
        match self {
            DefaultTag::Word => Tag::Word,
            DefaultTag::Noun => Tag::N,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier {
    lexicon: Lexicon,
    default_tag: DefaultTag,
}

impl HeuristicClassifier {
    pub fn new(default_tag: DefaultTag) -> Self {
        HeuristicClassifier {
            lexicon: Lexicon::FRENCH,
            default_tag,
        }
    }

    pub fn with_lexicon(lexicon: Lexicon, default_tag: DefaultTag) -> Self {
        HeuristicClassifier {
            lexicon,
            default_tag,
        }
    }

    pub fn default_tag(&self) -> DefaultTag {
        self.default_tag
    }

    /// Tag `token`, the `position`-th token of its phrase.
    pub fn classify(&self, token: &str, position: usize) -> Tag {
        if is_punctuation(token) {
            return Tag::Punct;
        }

        let lower = token.to_lowercase();
        let lexicon = &self.lexicon;

        if position == 0 && lexicon.is_pronoun(&lower) {
            Tag::Pron
        } else if lexicon.is_conjunction(&lower) {
            Tag::Conj
        } else if lexicon.is_determiner(&lower) {
            Tag::Det
        } else if lexicon.is_preposition(&lower) {
            Tag::P
        } else if lexicon.is_subordinator(&lower) {
            Tag::Sub
        } else if is_number(token) {
            Tag::Num
        } else if lexicon.has_verbal_suffix(&lower) {
            Tag::V
        } else {
            self.default_tag.tag()
        }
    }

    pub fn annotate_tokens(&self, tokens: &[TerminalToken<'_>]) -> Vec<Annotation> {
        tokens
            .iter()
            .map(|token| Annotation::tag(self.classify(token.text, token.position)))
            .collect()
    }
}

impl Classify for HeuristicClassifier {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn annotate(
        &self,
        _paragraph: &str,
        tokens: &[TerminalToken<'_>],
    ) -> Result<Vec<Annotation>, TaggerError> {
        Ok(self.annotate_tokens(tokens))
    }
}
