//! Sample texts, trees and taggers for tests

use crate::proust::ast::{Metadata, Tag, TreeBuilder, UnitKind, UnitTree};
use crate::proust::classify::{TaggedToken, Tagger, TaggerError};
use crate::proust::segmenting::segment;

/// Two short paragraphs covering both phrase delimiters and sentence ends.
pub const SCENARIO: [&str; 2] = ["Je vois.", "Il part, elle reste."];

/// Opening paragraphs of *Du côté de chez Swann*.
pub const SWANN_OPENING: [&str; 3] = [
    "Longtemps, je me suis couché de bonne heure. Parfois, à peine ma bougie éteinte, \
     mes yeux se fermaient si vite que je n'avais pas le temps de me dire: «Je m'endors.»",
    "Et, une demi-heure après, la pensée qu'il était temps de chercher le sommeil \
     m'éveillait; je voulais poser le volume que je croyais avoir dans les mains et \
     souffler ma lumière.",
    "Je me rendormais, et parfois je n'avais plus que de courts réveils d'un instant, \
     le temps d'entendre les craquements organiques des boiseries, d'ouvrir les yeux \
     pour fixer le kaléidoscope de l'obscurité!",
];

/// [`SCENARIO`] segmented with the default heuristic.
pub fn scenario_tree() -> UnitTree {
    segment(&SCENARIO)
}

pub fn swann_tree() -> UnitTree {
    segment(&SWANN_OPENING)
}

/// Tree built directly from a shape: `shape[p][s]` is the number of words
/// of sentence `s` in paragraph `p`. Words are named `w0`, `w1`, ... across the book.
///
/// Unlike the segmenter this can produce paragraphs without sentences and
/// sentences without words.
pub fn tree_from_shape(shape: &[Vec<usize>]) -> UnitTree {
    let mut builder = TreeBuilder::new("");
    let root = builder.root();
    let mut next_word = 0;

    for (p, sentences) in shape.iter().enumerate() {
        let paragraph = builder.push(
            root,
            UnitKind::Paragraph,
            format!("paragraph {p}"),
            Metadata::new().with("position", p),
        );
        for (s, &words) in sentences.iter().enumerate() {
            let sentence = builder.push(
                paragraph,
                UnitKind::Sentence,
                format!("sentence {s}"),
                Metadata::new().with("position", s),
            );
            for _ in 0..words {
                builder.push(
                    sentence,
                    UnitKind::Terminal(Tag::Word),
                    format!("w{next_word}"),
                    Metadata::new(),
                );
                next_word += 1;
            }
        }
    }
    builder.finish()
}

/// Tagger whose backend is never reachable.
pub struct UnavailableTagger;

impl Tagger for UnavailableTagger {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn probe(&self) -> Result<(), TaggerError> {
        Err(TaggerError::Unavailable {
            name: self.name().to_string(),
            reason: "not installed".to_string(),
        })
    }

    fn tag_document(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Err(TaggerError::Unavailable {
            name: self.name().to_string(),
            reason: "not installed".to_string(),
        })
    }
}

/// Tagger that passes its probe and then fails on every document.
pub struct BrokenTagger;

impl Tagger for BrokenTagger {
    fn name(&self) -> &str {
        "broken"
    }

    fn tag_document(&self, _text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        Err(TaggerError::Failed {
            name: self.name().to_string(),
            reason: "segmentation fault".to_string(),
        })
    }
}

/// Tagger answering from a fixed vocabulary, one token per whitespace- or
/// punctuation-separated word. Unknown words are tagged `N` with no lemma.
pub struct LexiconTagger {
    entries: Vec<(&'static str, Tag, &'static str)>,
}

impl LexiconTagger {
    pub fn new(entries: Vec<(&'static str, Tag, &'static str)>) -> Self {
        LexiconTagger { entries }
    }

    /// Entries for [`SCENARIO`].
    pub fn scenario() -> Self {
        LexiconTagger::new(vec![
            ("Je", Tag::Pron, "je"),
            ("vois", Tag::V, "voir"),
            ("Il", Tag::Pron, "il"),
            ("part", Tag::V, "partir"),
            ("elle", Tag::Pron, "elle"),
            ("reste", Tag::V, "rester"),
            (",", Tag::Punct, ","),
            (".", Tag::Punct, "."),
        ])
    }
}

impl Tagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tag_document(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;
        for token in crate::proust::lexing::tokenize(text) {
            let found = self.entries.iter().find(|(word, _, _)| *word == token.text);
            let (tag, lemma) = match found {
                Some((_, tag, lemma)) => (*tag, Some(lemma.to_string())),
                None => (Tag::N, None),
            };
            tokens.push(TaggedToken {
                text: token.text.clone(),
                tag,
                lemma,
                pos: Some(tag.as_str().to_string()),
                sentence_start,
            });
            sentence_start = token.text == ".";
        }
        Ok(tokens)
    }
}
