//! Reader rendering
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Text area: paragraphs around the current one, with the current
//!   sentence and word highlighted
//! - Status line (1 line, fixed)

use super::app::{highlight_ranges, App};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 40;
const STATUS_LINE_HEIGHT: u16 = 1;
const KEY_HELP: &str = "space pause  ←/→ pace  q quit";

pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(STATUS_LINE_HEIGHT),
        ])
        .split(size);

    render_title_bar(frame, chunks[0], &app.title);
    render_text(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(KEY_HELP.chars().count() as u16 + 1)])
        .split(area);
    let style = Style::default().fg(Color::Black).bg(Color::Cyan);

    frame.render_widget(
        Paragraph::new(format!("proust:: {title}")).style(style.add_modifier(Modifier::BOLD)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(KEY_HELP).style(style), chunks[1]);
}

fn render_text(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    let (paragraph, sentence, word) = app.cursor.position();
    let (texts, start) = app.cursor.visible_window(inner.height as usize);

    let mut lines = Vec::new();
    for (offset, text) in texts.into_iter().enumerate() {
        if offset > 0 {
            lines.push(Line::default());
        }
        if start + offset == paragraph {
            lines.push(current_paragraph_line(app, text, sentence, word));
        } else {
            lines.push(Line::from(Span::styled(text, Style::default().fg(Color::Gray))));
        }
    }

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn current_paragraph_line<'a>(app: &App<'a>, text: &'a str, sentence: usize, word: usize) -> Line<'a> {
    let paragraph_style = Style::default().fg(Color::White).bg(Color::DarkGray);
    let ranges = app
        .cursor
        .current_paragraph()
        .and_then(|unit| highlight_ranges(unit, sentence, word));

    let Some((sentence_range, word_range)) = ranges else {
        return Line::from(Span::styled(text, paragraph_style));
    };
    let sentence_style = Style::default().fg(Color::Black).bg(Color::Yellow);
    let word_style = sentence_style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    let word_range = word_range.unwrap_or(sentence_range.end..sentence_range.end);

    Line::from(vec![
        Span::styled(&text[..sentence_range.start], paragraph_style),
        Span::styled(&text[sentence_range.start..word_range.start], sentence_style),
        Span::styled(&text[word_range.clone()], word_style),
        Span::styled(&text[word_range.end..sentence_range.end], sentence_style),
        Span::styled(&text[sentence_range.end..], paragraph_style),
    ])
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let (paragraph, _, _) = app.cursor.position();
    let state = if app.cursor.is_paused() { "PAUSED" } else { "RUNNING" };
    let status = format!(
        "{:.1} words/s | {state} | paragraph {}/{}",
        app.cursor.pace().words_per_second(),
        paragraph + 1,
        app.cursor.tree().paragraph_count(),
    );
    let style = if app.cursor.is_paused() {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Black).bg(Color::Green)
    };
    frame.render_widget(Paragraph::new(status).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proust::proust::segmenting::segment;
    use proust_config::ReaderConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn config() -> ReaderConfig {
        ReaderConfig {
            seconds_per_word: 0.5,
            step: 0.05,
            min_seconds_per_word: 0.05,
            max_seconds_per_word: 1.0,
            context_paragraphs: 3,
        }
    }

    fn terminal_output(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let backend = terminal.backend();
        let mut output = String::new();
        for y in 0..height {
            for x in 0..width {
                if let Some(cell) = backend.buffer().cell((x, y)) {
                    output.push_str(cell.symbol());
                }
            }
            output.push('\n');
        }
        output
    }

    #[test]
    fn test_render_shows_title_text_and_status() {
        let tree = segment(&["Je vois.", "Il part, elle reste."]);
        let app = App::new(&tree, &config(), "swann.txt").unwrap();

        let output = terminal_output(&app, 80, 24);
        assert!(output.contains("proust:: swann.txt"));
        assert!(output.contains("Je vois."));
        assert!(output.contains("Il part, elle reste."));
        assert!(output.contains("2.0 words/s | RUNNING | paragraph 1/2"));
    }

    #[test]
    fn test_render_reports_pause_and_progress() {
        let tree = segment(&["Je vois.", "Il part, elle reste."]);
        let mut app = App::new(&tree, &config(), "swann.txt").unwrap();
        for _ in 0..3 {
            app.tick().unwrap();
        }
        app.cursor.toggle_pause();

        let output = terminal_output(&app, 80, 24);
        assert!(output.contains("PAUSED | paragraph 2/2"));
    }

    #[test]
    fn test_render_too_narrow() {
        let tree = segment(&["Je vois."]);
        let app = App::new(&tree, &config(), "swann.txt").unwrap();

        let output = terminal_output(&app, 30, 5);
        assert!(output.contains("Terminal too narrow"));
    }
}
