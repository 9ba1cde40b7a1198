//! Tokenization of sentence and phrase text
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where phrase strings become word, number and
//! punctuation tokens.
//!
//! Two modes exist:
//!
//!     tokenize        whitespace separates tokens and is never emitted; used by
//!                     the segmenter.
//!     display_tokens  whitespace runs are kept as tokens so a renderer can lay the
//!                     sentence out again exactly as read.
//!
//! Characters outside the word class, the punctuation set and whitespace
//! (apostrophes, dashes, guillemets) are skipped in both modes.

use logos::Logos;
use serde::Serialize;
use std::ops::Range;

/// Raw lexemes recognised by logos.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    #[regex(r"[\p{L}\p{M}\p{N}_]+")]
    Word,

    #[regex(r"[.,;:!?]")]
    Punct,

    #[regex(r"\s+")]
    Whitespace,
}

/// Characters emitted as individual punctuation tokens.
pub const PUNCTUATION: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Characters that close a sentence when followed by whitespace.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Characters that split a sentence into phrases.
pub const PHRASE_DELIMITERS: [char; 2] = [',', ';'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Word,
    Num,
    Punct,
    /// Only produced by [`display_tokens`].
    Space,
}

/// A token with its byte span in the tokenized string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn is_punct(&self) -> bool {
        self.kind == TokenKind::Punct
    }

    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }
}

/// True when `text` is a run of ASCII digits.
pub fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// True when `text` is a single punctuation character from [`PUNCTUATION`].
pub fn is_punctuation(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if PUNCTUATION.contains(&c))
}

/// Tokenize `source` into words, numbers and punctuation.
///
/// Empty or whitespace-only input yields an empty vector.
pub fn tokenize(source: &str) -> Vec<Token> {
    lex(source, false)
}

/// Tokenize `source` keeping whitespace runs, for display purposes.
pub fn display_tokens(source: &str) -> Vec<Token> {
    lex(source, true)
}

fn lex(source: &str, keep_space: bool) -> Vec<Token> {
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(Lexeme::Word) if is_number(lexer.slice()) => TokenKind::Num,
            Ok(Lexeme::Word) => TokenKind::Word,
            Ok(Lexeme::Punct) => TokenKind::Punct,
            Ok(Lexeme::Whitespace) if keep_space => TokenKind::Space,
            Ok(Lexeme::Whitespace) | Err(_) => continue,
        };
        tokens.push(Token {
            kind,
            text: lexer.slice().to_string(),
            span: lexer.span(),
        });
    }

    tokens
}
