//! Reader state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proust::proust::ast::{Unit, UnitTree};
use proust::proust::cursor::{Advance, Cursor, CursorError, Pace};
use proust::proust::lexing::display_tokens;
use proust_config::ReaderConfig;
use std::ops::Range;
use std::time::Duration;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Quit,
    /// The pace changed; restart the wait with the new interval.
    Repace,
    Continue,
}

pub struct App<'t> {
    pub cursor: Cursor<'t>,
    pub title: String,
    /// Times the walk went past the end of the book.
    pub laps: usize,
}

impl<'t> App<'t> {
    pub fn new(tree: &'t UnitTree, config: &ReaderConfig, title: &str) -> Result<Self, CursorError> {
        if tree.is_empty() {
            return Err(CursorError::NoUnits);
        }
        let pace = Pace::new(
            config.seconds_per_word,
            config.step,
            config.min_seconds_per_word,
            config.max_seconds_per_word,
        );
        Ok(App {
            cursor: Cursor::new(tree)
                .with_pace(pace)
                .with_context(config.context_paragraphs),
            title: title.to_string(),
            laps: 0,
        })
    }

    pub fn interval(&self) -> Duration {
        self.cursor.pace().interval()
    }

    pub fn tick(&mut self) -> Result<(), CursorError> {
        if let Some(Advance::Wrapped) = self.cursor.tick()? {
            self.laps += 1;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => Control::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                self.cursor.toggle_pause();
                Control::Continue
            }
            KeyCode::Right => {
                self.cursor.speed_up();
                Control::Repace
            }
            KeyCode::Left => {
                self.cursor.slow_down();
                Control::Repace
            }
            _ => Control::Continue,
        }
    }
}

/// Byte ranges, within `paragraph`'s text, of its `sentence`-th sentence and
/// of the `word`-th terminal of that sentence.
///
/// Sentence texts are slices of the paragraph text, and their display tokens
/// (spaces aside) line up one to one with the sentence terminals.
pub fn highlight_ranges(
    paragraph: Unit<'_>,
    sentence: usize,
    word: usize,
) -> Option<(Range<usize>, Option<Range<usize>>)> {
    let text = paragraph.text();
    let mut from = 0;
    for (index, unit) in paragraph.children().enumerate() {
        let start = from + text[from..].find(unit.text())?;
        let end = start + unit.text().len();
        if index == sentence {
            let word_range = display_tokens(unit.text())
                .into_iter()
                .filter(|token| !token.is_space())
                .nth(word)
                .map(|token| start + token.span.start..start + token.span.end);
            return Some((start..end, word_range));
        }
        from = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proust::proust::segmenting::segment;

    fn config() -> ReaderConfig {
        ReaderConfig {
            seconds_per_word: 0.3,
            step: 0.05,
            min_seconds_per_word: 0.05,
            max_seconds_per_word: 1.0,
            context_paragraphs: 3,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_empty_book_is_refused() {
        let tree = segment::<&str>(&[]);
        assert!(matches!(App::new(&tree, &config(), "vide"), Err(CursorError::NoUnits)));
    }

    #[test]
    fn test_keys() {
        let tree = segment(&["Je vois."]);
        let mut app = App::new(&tree, &config(), "swann").unwrap();

        assert_eq!(app.handle_key(key(KeyCode::Char('p'))), Control::Continue);
        assert!(app.cursor.is_paused());
        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.cursor.is_paused());

        assert_eq!(app.handle_key(key(KeyCode::Right)), Control::Repace);
        assert!((app.interval().as_secs_f64() - 0.25).abs() < 1e-9);
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        assert!((app.cursor.pace().seconds_per_word() - 0.35).abs() < 1e-9);

        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Control::Quit
        );
    }

    #[test]
    fn test_out_of_range_config_keeps_a_usable_interval() {
        let tree = segment(&["Je vois."]);
        let config = ReaderConfig {
            min_seconds_per_word: -0.5,
            max_seconds_per_word: 20.0,
            ..config()
        };
        let mut app = App::new(&tree, &config, "swann").unwrap();

        for _ in 0..20 {
            app.handle_key(key(KeyCode::Right));
        }
        assert!((app.interval().as_secs_f64() - 0.05).abs() < 1e-9);
        for _ in 0..40 {
            app.handle_key(key(KeyCode::Left));
        }
        assert!((app.interval().as_secs_f64() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tick_counts_laps_and_respects_pause() {
        let tree = segment(&["Je vois"]);
        let mut app = App::new(&tree, &config(), "swann").unwrap();

        app.cursor.toggle_pause();
        app.tick().unwrap();
        assert_eq!(app.cursor.position(), (0, 0, 0));

        app.cursor.toggle_pause();
        app.tick().unwrap();
        app.tick().unwrap();
        assert_eq!(app.laps, 1);
        assert_eq!(app.cursor.position(), (0, 0, 0));
    }

    #[test]
    fn test_highlight_ranges() {
        let tree = segment(&["Il part, elle reste. Oui « vraiment »."]);
        let paragraph = tree.paragraph(0).unwrap();
        let text = paragraph.text();

        let (sentence, word) = highlight_ranges(paragraph, 0, 3).unwrap();
        assert_eq!(&text[sentence], "Il part, elle reste.");
        assert_eq!(&text[word.unwrap()], "elle");

        let (sentence, word) = highlight_ranges(paragraph, 1, 1).unwrap();
        assert_eq!(&text[sentence], "Oui « vraiment ».");
        assert_eq!(&text[word.unwrap()], "vraiment");

        assert!(highlight_ranges(paragraph, 2, 0).is_none());
    }
}
