use crate::types::{AnalysisResult, FrequencyEntry, SpanKind};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

const PAGE: u16 = 10;

pub struct App {
    pub label: String,
    pub result: AnalysisResult,
    pub selected_index: usize,
    pub suspicious_only: bool,
    pub scroll_offset: u16,
    pub running: bool,
}

impl App {
    #[must_use]
    pub fn new(label: &str, result: AnalysisResult) -> Self {
        Self {
            label: label.to_string(),
            result,
            selected_index: 0,
            suspicious_only: false,
            scroll_offset: 0,
            running: true,
        }
    }

    /// Rows currently shown in the table.
    #[must_use]
    pub fn rows(&self) -> Vec<&FrequencyEntry> {
        if self.suspicious_only {
            self.result.suspicious_entries().collect()
        } else {
            self.result.frequencies.iter().collect()
        }
    }

    /// Runs the TUI loop.
    ///
    /// # Errors
    ///
    /// Returns error if drawing to terminal fails or event polling errors.
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> anyhow::Result<()> {
        while self.running {
            terminal.draw(|f| crate::tui::view::draw(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(PAGE),
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(PAGE).min(self.max_scroll());
            }
            KeyCode::Char('s') => self.toggle_suspicious_only(),
            _ => {}
        }
    }

    /// Lines in the annotated text pane. Line feeds are never suspicious, so
    /// they only occur in normal spans.
    #[must_use]
    pub fn line_count(&self) -> usize {
        let feeds: usize = self
            .result
            .annotated
            .spans
            .iter()
            .filter(|s| s.kind == SpanKind::Normal)
            .map(|s| s.text.matches('\n').count())
            .sum();
        feeds + 1
    }

    /// Keeps the last line in view.
    fn max_scroll(&self) -> u16 {
        u16::try_from(self.line_count() - 1).unwrap_or(u16::MAX)
    }

    fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    fn move_down(&mut self) {
        let len = self.rows().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    fn toggle_suspicious_only(&mut self) {
        self.suspicious_only = !self.suspicious_only;
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn test_navigation_clamps() {
        let mut app = App::new("x", analyze("ab"));
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_index, 0);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_toggle_filters_rows() {
        let mut app = App::new("x", analyze("a\tb\t"));
        assert_eq!(app.rows().len(), 3);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.rows().len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_page_down_stops_at_last_line() {
        let mut app = App::new("x", analyze("a\nb\nc"));
        assert_eq!(app.line_count(), 3);
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.scroll_offset, 2);
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.scroll_offset, 2);
        app.handle_key(KeyCode::PageUp);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_page_down_scrolls_long_text() {
        let text = "line\n".repeat(25);
        let mut app = App::new("x", analyze(&text));
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.scroll_offset, PAGE);
        app.handle_key(KeyCode::PageDown);
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.scroll_offset, 25);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new("x", analyze(""));
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }
}
