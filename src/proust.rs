//! Main module for proust library functionality
//!
//! Data flows leaf-first through these modules:
//!
//!     lexing      raw string → word / number / punctuation tokens
//!     classify    token → coarse grammatical tag (heuristic or external tagger)
//!     segmenting  paragraphs → UnitTree, using lexing and classify
//!     ast         the immutable unit tree and its derived identifiers
//!     formats     UnitTree → S-expression / JSON / treeviz text
//!     cursor      word-by-word cyclic walk over a UnitTree
//!
//! `loading` sits in front of segmenting and turns a text file into paragraphs.

pub mod ast;
pub mod classify;
pub mod cursor;
pub mod formats;
pub mod lexing;
pub mod loading;
pub mod segmenting;
pub mod testing;
