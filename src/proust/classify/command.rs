//! Tagger backed by an external program
//!
//! The program receives the paragraph on stdin and prints one token per line
//! in the TreeTagger layout:
//!
//!     token<TAB>POS<TAB>lemma
//!
//! POS labels follow the TreeTagger French tagset (`NOM`, `VER:impf`,
//! `PRO:PER`, `SENT`, ...) and are mapped onto [`Tag`]. The raw label is kept
//! as `pos` metadata.

use super::tagger::{TaggedToken, Tagger, TaggerError};
use crate::proust::ast::Tag;
use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Lemma TreeTagger prints when it does not know a word.
const UNKNOWN_LEMMA: &str = "<unknown>";

#[derive(Debug, Clone)]
pub struct CommandTagger {
    program: String,
    args: Vec<String>,
}

impl CommandTagger {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandTagger {
            program: program.into(),
            args,
        }
    }

    fn run(&self, input: &str) -> Result<Output, TaggerError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TaggerError::Unavailable {
                name: self.program.clone(),
                reason: e.to_string(),
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| TaggerError::Failed {
            name: self.program.clone(),
            reason: "stdin was not captured".to_string(),
        })?;

        // Feed stdin from a second thread so a large output cannot block the write.
        let output = std::thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(input.as_bytes()));
            let output = child.wait_with_output();
            let written = writer.join().unwrap_or_else(|_| {
                Err(std::io::Error::other("tagger stdin writer panicked"))
            });
            written.and(output)
        })?;

        if !output.status.success() {
            return Err(TaggerError::Failed {
                name: self.program.clone(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl Tagger for CommandTagger {
    fn name(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> Result<(), TaggerError> {
        self.run("").map(|_| ()).map_err(|e| match e {
            TaggerError::Failed { name, reason } => TaggerError::Unavailable { name, reason },
            other => other,
        })
    }

    fn tag_document(&self, text: &str) -> Result<Vec<TaggedToken>, TaggerError> {
        let output = self.run(text)?;
        parse_tagger_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `token\tPOS\tlemma` lines. Blank lines are ignored; the lemma column is optional.
pub fn parse_tagger_output(output: &str) -> Result<Vec<TaggedToken>, TaggerError> {
    let mut tokens = Vec::new();
    let mut sentence_start = true;

    for (index, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let (text, pos) = match (fields.next(), fields.next()) {
            (Some(text), Some(pos)) if !text.is_empty() && !pos.is_empty() => (text, pos),
            _ => {
                return Err(TaggerError::Malformed {
                    line: index + 1,
                    content: line.to_string(),
                })
            }
        };
        let lemma = fields
            .next()
            .map(str::trim)
            .filter(|lemma| !lemma.is_empty() && *lemma != UNKNOWN_LEMMA)
            .map(str::to_string);

        tokens.push(TaggedToken {
            text: text.to_string(),
            tag: map_treetagger_pos(pos),
            lemma,
            pos: Some(pos.to_string()),
            sentence_start,
        });
        sentence_start = pos == "SENT";
    }

    Ok(tokens)
}

/// Map a TreeTagger French POS label onto [`Tag`].
pub fn map_treetagger_pos(pos: &str) -> Tag {
    match pos {
        "NOM" | "NAM" | "ABR" => Tag::N,
        "ADJ" => Tag::Adj,
        "ADV" => Tag::Adv,
        "KON" => Tag::Conj,
        "NUM" => Tag::Num,
        "SENT" => Tag::Punct,
        "PRO:REL" => Tag::Sub,
        _ if pos.starts_with("VER") => Tag::V,
        _ if pos.starts_with("DET") => Tag::Det,
        _ if pos.starts_with("PRP") => Tag::P,
        _ if pos.starts_with("PRO") => Tag::Pron,
        _ if pos.starts_with("PUN") => Tag::Punct,
        _ => Tag::Word,
    }
}
