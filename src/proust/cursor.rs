//! Reading cursor
//!
//! A [`Cursor`] walks a [`UnitTree`] one terminal at a time. Its state is the
//! triple (paragraph, sentence, word), where `word` indexes the flattened
//! terminals of the current sentence, phrases included:
//!
//!     0 <= paragraph < paragraphs in the book
//!     0 <= sentence  < sentences in the paragraph   (0 when there are none)
//!     0 <= word      < terminals in the sentence    (0 when there are none)
//!
//! The walk is cyclic: stepping past the last word of the book wraps back to
//! (0, 0, 0). Level sizes are read from the tree on every step, never cached.
//!
//! An index outside these bounds means the tree or the cursor is broken; the
//! accessors panic rather than clamp.

use crate::proust::ast::{Unit, UnitTree};
use std::time::Duration;
use thiserror::Error;

/// Paragraphs shown above the current one by [`Cursor::visible_window`].
pub const DEFAULT_CONTEXT_PARAGRAPHS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    #[error("no units available")]
    NoUnits,
}

/// The outermost level that rolled over during an [`Cursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next word of the same sentence.
    Word,
    /// Moved to the first word of the next sentence.
    Sentence,
    /// Moved to the first sentence of the next paragraph.
    Paragraph,
    /// Went past the last paragraph and restarted at the beginning of the book.
    Wrapped,
}

/// Reading speed, in seconds per word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pace {
    seconds_per_word: f64,
    step: f64,
    min: f64,
    max: f64,
}

impl Pace {
    pub const DEFAULT_SECONDS_PER_WORD: f64 = 0.3;
    pub const DEFAULT_STEP: f64 = 0.05;
    pub const MIN_SECONDS_PER_WORD: f64 = 0.05;
    pub const MAX_SECONDS_PER_WORD: f64 = 1.0;

    /// A pace starting at `seconds_per_word`, clamped to `[min, max]`.
    ///
    /// Bounds are themselves kept within
    /// [`MIN_SECONDS_PER_WORD`](Self::MIN_SECONDS_PER_WORD)..=[`MAX_SECONDS_PER_WORD`](Self::MAX_SECONDS_PER_WORD).
    /// Non-finite values and a non-positive step fall back to the defaults.
    pub fn new(seconds_per_word: f64, step: f64, min: f64, max: f64) -> Self {
        let min = within_bounds(min, Self::MIN_SECONDS_PER_WORD);
        let max = within_bounds(max, Self::MAX_SECONDS_PER_WORD);
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            Self::DEFAULT_STEP
        };
        let start = if seconds_per_word.is_finite() {
            seconds_per_word
        } else {
            Self::DEFAULT_SECONDS_PER_WORD
        };
        Pace {
            seconds_per_word: start.clamp(min, max),
            step,
            min,
            max,
        }
    }

    pub fn seconds_per_word(&self) -> f64 {
        self.seconds_per_word
    }

    pub fn words_per_second(&self) -> f64 {
        1.0 / self.seconds_per_word
    }

    /// Delay between two ticks.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(self.seconds_per_word)
    }

    /// Shorten the delay by one step.
    pub fn speed_up(&mut self) {
        self.set(self.seconds_per_word - self.step);
    }

    /// Lengthen the delay by one step.
    pub fn slow_down(&mut self) {
        self.set(self.seconds_per_word + self.step);
    }

    fn set(&mut self, seconds: f64) {
        // Snap to the step grid so repeated steps land on the bounds exactly.
        let snapped = if self.step > 0.0 {
            ((seconds - self.min) / self.step).round() * self.step + self.min
        } else {
            seconds
        };
        self.seconds_per_word = snapped.clamp(self.min, self.max);
    }
}

impl Default for Pace {
    fn default() -> Self {
        Pace::new(
            Self::DEFAULT_SECONDS_PER_WORD,
            Self::DEFAULT_STEP,
            Self::MIN_SECONDS_PER_WORD,
            Self::MAX_SECONDS_PER_WORD,
        )
    }
}

/// `value` clamped to the supported pace range, or `fallback` when not a number.
fn within_bounds(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(Pace::MIN_SECONDS_PER_WORD, Pace::MAX_SECONDS_PER_WORD)
    } else {
        fallback
    }
}

/// Reading position over a borrowed tree.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tree: &'t UnitTree,
    paragraph: usize,
    sentence: usize,
    word: usize,
    paused: bool,
    pace: Pace,
    context: usize,
}

impl<'t> Cursor<'t> {
    /// Cursor at (0, 0, 0). An empty tree is accepted; every query then
    /// reports that nothing is available.
    pub fn new(tree: &'t UnitTree) -> Self {
        Cursor {
            tree,
            paragraph: 0,
            sentence: 0,
            word: 0,
            paused: false,
            pace: Pace::default(),
            context: DEFAULT_CONTEXT_PARAGRAPHS,
        }
    }

    pub fn with_pace(mut self, pace: Pace) -> Self {
        self.pace = pace;
        self
    }

    /// Number of paragraphs kept above the current one in the visible window.
    pub fn with_context(mut self, paragraphs: usize) -> Self {
        self.context = paragraphs;
        self
    }

    pub fn tree(&self) -> &'t UnitTree {
        self.tree
    }

    /// The (paragraph, sentence, word) triple.
    pub fn position(&self) -> (usize, usize, usize) {
        (self.paragraph, self.sentence, self.word)
    }

    pub fn current_paragraph(&self) -> Option<Unit<'t>> {
        if self.tree.is_empty() {
            return None;
        }
        match self.tree.paragraph(self.paragraph) {
            Some(paragraph) => Some(paragraph),
            None => drift("paragraph", self.paragraph, self.tree.paragraph_count()),
        }
    }

    pub fn current_sentence(&self) -> Option<Unit<'t>> {
        let paragraph = self.current_paragraph()?;
        child_or_drift(
            paragraph.child(self.sentence),
            "sentence",
            self.sentence,
            paragraph.child_count(),
        )
    }

    /// The current terminal, looked up through any intermediate phrase.
    pub fn current_word(&self) -> Option<Unit<'t>> {
        let sentence = self.current_sentence()?;
        let terminals = sentence.terminals();
        let count = terminals.len();
        child_or_drift(terminals.get(self.word).copied(), "word", self.word, count)
    }

    /// Step to the next word, rolling over sentences, paragraphs and finally the book.
    pub fn advance(&mut self) -> Result<Advance, CursorError> {
        let paragraph = self.current_paragraph().ok_or(CursorError::NoUnits)?;
        let words = self
            .current_sentence()
            .map_or(0, |sentence| sentence.terminal_count());

        self.word += 1;
        if self.word < words {
            return Ok(Advance::Word);
        }
        self.word = 0;

        self.sentence += 1;
        if self.sentence < paragraph.child_count() {
            return Ok(Advance::Sentence);
        }
        self.sentence = 0;

        self.paragraph += 1;
        if self.paragraph < self.tree.paragraph_count() {
            return Ok(Advance::Paragraph);
        }
        self.paragraph = 0;
        Ok(Advance::Wrapped)
    }

    /// Advance once unless paused. Called by the driver once per elapsed interval.
    pub fn tick(&mut self) -> Result<Option<Advance>, CursorError> {
        if self.paused {
            if self.tree.is_empty() {
                return Err(CursorError::NoUnits);
            }
            return Ok(None);
        }
        self.advance().map(Some)
    }

    /// Flip the pause flag and return the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pace(&self) -> &Pace {
        &self.pace
    }

    pub fn speed_up(&mut self) {
        self.pace.speed_up();
    }

    pub fn slow_down(&mut self) {
        self.pace.slow_down();
    }

    /// Up to `height` paragraph texts starting a few paragraphs above the
    /// current one, and the index of the first.
    pub fn visible_window(&self, height: usize) -> (Vec<&'t str>, usize) {
        let start = self.paragraph.saturating_sub(self.context);
        let texts = self
            .tree
            .paragraphs()
            .skip(start)
            .take(height)
            .map(|paragraph| paragraph.text())
            .collect();
        (texts, start)
    }
}

fn child_or_drift<'t>(
    found: Option<Unit<'t>>,
    level: &str,
    index: usize,
    count: usize,
) -> Option<Unit<'t>> {
    match found {
        Some(unit) => Some(unit),
        None if count == 0 && index == 0 => None,
        None => drift(level, index, count),
    }
}

fn drift(level: &str, index: usize, count: usize) -> ! {
    unreachable!("cursor {level} index {index} is out of bounds (count {count})")
}
