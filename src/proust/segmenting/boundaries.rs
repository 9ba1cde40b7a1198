//! Sentence and phrase boundary detection

use crate::proust::lexing::{PHRASE_DELIMITERS, SENTENCE_TERMINATORS};
use once_cell::sync::Lazy;
use regex::Regex;

/// A terminator followed by the whitespace that separates it from the next sentence.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` right after each `.`, `!` or `?` that is followed by whitespace.
///
/// The separating whitespace belongs to neither side. Blank fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // Terminators are ASCII, so one byte past the match start closes the sentence.
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .filter(|sentence| !sentence.trim().is_empty())
        .collect()
}

/// One piece of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part<'a> {
    /// Text between delimiters, untrimmed; may be blank.
    Phrase(&'a str),
    /// A single delimiter or closing terminator.
    Punct(&'a str),
}

/// Split a sentence on `,` and `;`, then detach the terminators closing it.
///
/// Closing terminators may be separated from the last word by spaces, as in
/// French typography (`Quoi ?`). Blank phrase regions are kept here and
/// discarded by the caller once tokenized.
pub fn split_phrases(sentence: &str) -> Vec<Part<'_>> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (index, c) in sentence.char_indices() {
        if PHRASE_DELIMITERS.contains(&c) {
            parts.push(Part::Phrase(&sentence[start..index]));
            parts.push(Part::Punct(&sentence[index..index + c.len_utf8()]));
            start = index + c.len_utf8();
        }
    }

    let tail = &sentence[start..];
    let mut body_end = tail.len();
    let mut closing = Vec::new();
    loop {
        let body = tail[..body_end].trim_end();
        match body.char_indices().next_back() {
            Some((index, c)) if SENTENCE_TERMINATORS.contains(&c) => {
                closing.push(Part::Punct(&tail[index..index + c.len_utf8()]));
                body_end = index;
            }
            _ => break,
        }
    }

    parts.push(Part::Phrase(&tail[..body_end]));
    parts.extend(closing.into_iter().rev());

    parts
        .into_iter()
        .filter(|part| !matches!(part, Part::Phrase(text) if text.trim().is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Je \n vois\t bien. "), "Je vois bien.");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("Je vois. Il part! Vraiment? Oui"),
            vec!["Je vois.", "Il part!", "Vraiment?", "Oui"]
        );
    }

    #[test]
    fn test_split_requires_following_whitespace() {
        assert_eq!(split_sentences("M.Swann arrive."), vec!["M.Swann arrive."]);
        assert_eq!(split_sentences("Quoi?!  Non."), vec!["Quoi?!", "Non."]);
    }

    #[test]
    fn test_trailing_whitespace_leaves_no_empty_sentence() {
        assert_eq!(split_sentences("Je vois. "), vec!["Je vois."]);
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_split_phrases() {
        assert_eq!(
            split_phrases("Il part, elle reste."),
            vec![
                Part::Phrase("Il part"),
                Part::Punct(","),
                Part::Phrase(" elle reste"),
                Part::Punct("."),
            ]
        );
    }

    #[test]
    fn test_trailing_delimiter_leaves_no_empty_phrase() {
        assert_eq!(
            split_phrases("Il part ;"),
            vec![Part::Phrase("Il part "), Part::Punct(";")]
        );
        assert_eq!(split_phrases(",;"), vec![Part::Punct(","), Part::Punct(";")]);
    }

    #[test]
    fn test_closing_terminators_with_french_spacing() {
        assert_eq!(
            split_phrases("Quoi ? !"),
            vec![Part::Phrase("Quoi "), Part::Punct("?"), Part::Punct("!")]
        );
        assert_eq!(
            split_phrases("Non..."),
            vec![
                Part::Phrase("Non"),
                Part::Punct("."),
                Part::Punct("."),
                Part::Punct("."),
            ]
        );
    }

    #[test]
    fn test_inner_terminators_stay_in_phrase() {
        assert_eq!(
            split_phrases("M.Swann: arrive"),
            vec![Part::Phrase("M.Swann: arrive")]
        );
    }
}
