//! Paragraph segmentation into the unit tree
//!
//! Each paragraph goes through three passes:
//!
//!     1. plan       whitespace is collapsed, the text is cut into sentences and
//!                   each sentence into phrase regions and punctuation marks
//!     2. annotate   every terminal of the paragraph is classified in one call,
//!                   so an external tagger sees the whole paragraph at once
//!     3. build      units are appended to the tree in text order
//!
//! Boundary rules:
//!
//!     sentence  cut right after `.`, `!` or `?` when followed by whitespace;
//!               the whitespace is consumed
//!     phrase    cut on `,` and `;`, which become PUNCT children of the sentence;
//!               `.`, `!`, `?` closing the sentence are attached the same way
//!
//! Blank paragraphs, blank sentences and phrase regions without any token are
//! dropped silently.

pub mod boundaries;

use crate::proust::ast::metadata::keys;
use crate::proust::ast::{Metadata, Tag, TreeBuilder, UnitId, UnitKind, UnitTree};
use crate::proust::classify::{
    Annotation, Classify, DefaultTag, HeuristicClassifier, Tagger, TaggerClassifier,
    TerminalToken,
};
use crate::proust::lexing::{tokenize, Token};
use boundaries::{collapse_whitespace, split_phrases, split_sentences, Part};
use std::cell::Cell;
use tracing::{debug, warn};

/// Settings resolved once, before any text is segmented.
#[derive(Debug, Clone)]
pub struct SegmenterOptions {
    /// Text and `title` metadata of the BOOK root.
    pub title: String,
    pub default_tag: DefaultTag,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        SegmenterOptions {
            title: String::new(),
            default_tag: DefaultTag::Word,
        }
    }
}

/// Builds [`UnitTree`]s from raw paragraphs.
pub struct Segmenter {
    title: String,
    classifier: Box<dyn Classify>,
    fallback: HeuristicClassifier,
    /// Set on the first classifier failure; from then on only the fallback is used.
    degraded: Cell<bool>,
}

impl Segmenter {
    /// Segmenter classifying with the built-in heuristic only.
    pub fn new(options: SegmenterOptions) -> Self {
        let heuristic = HeuristicClassifier::new(options.default_tag);
        Segmenter {
            title: options.title,
            classifier: Box::new(heuristic),
            fallback: heuristic,
            degraded: Cell::new(false),
        }
    }

    /// Segmenter delegating classification to `tagger`.
    ///
    /// The tagger is probed once here. If the probe fails the failure is
    /// logged and the segmenter uses the heuristic for its whole lifetime.
    pub fn with_tagger(options: SegmenterOptions, tagger: Box<dyn Tagger>) -> Self {
        match tagger.probe() {
            Ok(()) => {
                debug!(tagger = tagger.name(), "external tagger available");
                let fallback = HeuristicClassifier::new(options.default_tag);
                Segmenter {
                    title: options.title,
                    classifier: Box::new(TaggerClassifier::new(tagger)),
                    fallback,
                    degraded: Cell::new(false),
                }
            }
            Err(e) => {
                warn!("{e}; using the heuristic classifier");
                Segmenter::new(options)
            }
        }
    }

    /// Segmenter using `classifier` directly. The heuristic built from
    /// `options` still stands in if the classifier fails.
    pub fn with_classifier(options: SegmenterOptions, classifier: Box<dyn Classify>) -> Self {
        Segmenter {
            title: options.title,
            classifier,
            fallback: HeuristicClassifier::new(options.default_tag),
            degraded: Cell::new(false),
        }
    }

    /// Name of the classifier in use, `heuristic` once the selected one has failed.
    pub fn classifier_name(&self) -> &str {
        self.active_classifier().name()
    }

    fn active_classifier(&self) -> &dyn Classify {
        if self.degraded.get() {
            &self.fallback
        } else {
            self.classifier.as_ref()
        }
    }

    /// Build the unit tree for `paragraphs`.
    pub fn segment<S: AsRef<str>>(&self, paragraphs: &[S]) -> UnitTree {
        let mut builder = TreeBuilder::new(&self.title);
        let root = builder.root();
        let mut classifier = self.active_classifier();

        for raw in paragraphs {
            let text = collapse_whitespace(raw.as_ref());
            if text.is_empty() {
                continue;
            }

            let plan = plan_paragraph(&text);
            let terminals = plan.terminal_tokens();
            let annotations = match classifier.annotate(&text, &terminals) {
                Ok(annotations) if annotations.len() == terminals.len() => annotations,
                Ok(annotations) => {
                    warn!(
                        classifier = classifier.name(),
                        expected = terminals.len(),
                        got = annotations.len(),
                        "classifier returned a wrong number of annotations; using the heuristic from now on"
                    );
                    self.degraded.set(true);
                    classifier = &self.fallback;
                    self.fallback_annotations(&terminals)
                }
                Err(e) => {
                    warn!("{e}; using the heuristic classifier from now on");
                    self.degraded.set(true);
                    classifier = &self.fallback;
                    self.fallback_annotations(&terminals)
                }
            };

            build_paragraph(&mut builder, root, &text, &plan, annotations);
        }

        let tree = builder.finish();
        debug!(
            paragraphs = tree.paragraph_count(),
            units = tree.len(),
            terminals = tree.terminal_count(),
            classifier = classifier.name(),
            "segmented document"
        );
        tree
    }

    fn fallback_annotations(&self, terminals: &[TerminalToken<'_>]) -> Vec<Annotation> {
        self.fallback.annotate_tokens(terminals)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Segmenter::new(SegmenterOptions::default())
    }
}

/// Segment `paragraphs` with the default heuristic segmenter.
pub fn segment<S: AsRef<str>>(paragraphs: &[S]) -> UnitTree {
    Segmenter::default().segment(paragraphs)
}

struct ParagraphPlan<'a> {
    sentences: Vec<SentencePlan<'a>>,
}

struct SentencePlan<'a> {
    text: &'a str,
    parts: Vec<PartPlan<'a>>,
}

enum PartPlan<'a> {
    Phrase { text: &'a str, tokens: Vec<Token> },
    Punct(&'a str),
}

impl<'a> ParagraphPlan<'a> {
    fn terminal_tokens(&self) -> Vec<TerminalToken<'_>> {
        let mut out = Vec::new();
        for sentence in &self.sentences {
            for part in &sentence.parts {
                match part {
                    PartPlan::Phrase { tokens, .. } => out.extend(
                        tokens
                            .iter()
                            .enumerate()
                            .map(|(position, token)| TerminalToken::new(&token.text, position)),
                    ),
                    PartPlan::Punct(mark) => out.push(TerminalToken::new(mark, 0)),
                }
            }
        }
        out
    }
}

fn plan_paragraph(text: &str) -> ParagraphPlan<'_> {
    let sentences = split_sentences(text)
        .into_iter()
        .map(|sentence| SentencePlan {
            text: sentence,
            parts: split_phrases(sentence)
                .into_iter()
                .filter_map(|part| match part {
                    Part::Punct(mark) => Some(PartPlan::Punct(mark)),
                    Part::Phrase(region) => {
                        let tokens = tokenize(region);
                        // Token-less regions (a trailing comma, a lone dash) are dropped.
                        (!tokens.is_empty()).then(|| PartPlan::Phrase {
                            text: region.trim(),
                            tokens,
                        })
                    }
                })
                .collect(),
        })
        .collect();
    ParagraphPlan { sentences }
}

fn build_paragraph(
    builder: &mut TreeBuilder,
    root: UnitId,
    text: &str,
    plan: &ParagraphPlan<'_>,
    annotations: Vec<Annotation>,
) {
    let mut annotations = annotations.into_iter();
    let paragraph = push_positioned(builder, root, UnitKind::Paragraph, text, true);

    for sentence in &plan.sentences {
        let sentence_id =
            push_positioned(builder, paragraph, UnitKind::Sentence, sentence.text, true);

        for part in &sentence.parts {
            match part {
                PartPlan::Punct(mark) => {
                    let annotation = annotations.next();
                    push_terminal(builder, sentence_id, mark, annotation, Tag::Punct);
                }
                PartPlan::Phrase { text, tokens } => {
                    let phrase =
                        push_positioned(builder, sentence_id, UnitKind::Phrase, text, false);
                    for token in tokens {
                        let annotation = annotations.next();
                        push_terminal(builder, phrase, &token.text, annotation, Tag::Word);
                    }
                }
            }
        }
    }
}

fn push_positioned(
    builder: &mut TreeBuilder,
    parent: UnitId,
    kind: UnitKind,
    text: &str,
    with_length: bool,
) -> UnitId {
    let mut metadata = Metadata::new().with(keys::POSITION, builder.child_count(parent));
    if with_length {
        metadata.insert(keys::LENGTH, text.chars().count());
    }
    builder.push(parent, kind, text, metadata)
}

fn push_terminal(
    builder: &mut TreeBuilder,
    parent: UnitId,
    text: &str,
    annotation: Option<Annotation>,
    missing: Tag,
) -> UnitId {
    let annotation = annotation.unwrap_or_else(|| Annotation::tag(missing));
    let mut metadata = Metadata::new();
    if let Some(lemma) = annotation.lemma {
        metadata.insert(keys::LEMMA, lemma);
    }
    if let Some(pos) = annotation.pos {
        metadata.insert(keys::POS, pos);
    }
    builder.push(parent, UnitKind::Terminal(annotation.tag), text, metadata)
}
