use crate::reporting::pluralize;
use crate::tui::state::App;
use crate::types::SpanKind;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(rows[1]);

    draw_header(f, app, rows[0]);
    draw_table(f, app, chunks[0]);
    draw_text(f, app, chunks[1]);
    draw_help(f, rows[2]);
}

fn suspicious_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::LightYellow)
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let n = app.result.suspicious_count();
    let status = if n == 0 {
        Span::styled("No suspicious characters found.", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("ATTENTION: {n} suspicious {} found!", pluralize("character", n)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![
        Span::styled(
            format!("{} ({} characters)  ", app.label, app.result.total_units()),
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        ),
        status,
    ]);
    let block = Block::default().borders(Borders::ALL).title("glyphwatch");
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_table(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .map(|entry| {
            let label = format!("{:^9}", entry.label);
            let rest = format!(" {:>8} {:>7}", entry.codepoint, entry.count);
            if entry.is_suspicious() {
                ListItem::new(Line::from(vec![
                    Span::styled(label, suspicious_style()),
                    Span::styled(rest, Style::default().fg(Color::Red)),
                ]))
            } else {
                ListItem::new(Line::from(vec![Span::raw(label), Span::raw(rest)]))
            }
        })
        .collect();

    let title = if app.suspicious_only {
        "Suspicious Characters"
    } else {
        "Character Frequency"
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(app.selected_index));

    f.render_stateful_widget(list, area, &mut state);
}

/// Rebuilds the annotated text as styled lines, splitting spans on line feeds.
fn annotated_lines(app: &App) -> Vec<Line<'_>> {
    let mut lines = vec![Line::default()];
    for span in &app.result.annotated.spans {
        match span.kind {
            SpanKind::Suspicious => {
                if let Some(line) = lines.last_mut() {
                    line.spans.push(Span::styled(span.text.as_str(), suspicious_style()));
                }
            }
            SpanKind::Normal => {
                for (i, part) in span.text.split('\n').enumerate() {
                    if i > 0 {
                        lines.push(Line::default());
                    }
                    if !part.is_empty() {
                        if let Some(line) = lines.last_mut() {
                            line.spans.push(Span::raw(part));
                        }
                    }
                }
            }
        }
    }
    lines
}

fn draw_text(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Annotated Text");
    let paragraph = Paragraph::new(annotated_lines(app))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));
    f.render_widget(paragraph, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " q quit  j/k move  PgUp/PgDn scroll  s suspicious only",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(help), area);
}
