//! UI rendering

mod battle_view;
mod help_view;
mod result_view;
mod start_view;

use crate::app::{App, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_title(f, app, chunks[0]);

    if app.show_help {
        help_view::draw(f, app, chunks[1]);
    } else {
        match app.screen {
            Screen::Start => start_view::draw(f, app, chunks[1]),
            Screen::Battle => battle_view::draw(f, app, chunks[1]),
            Screen::Result => result_view::draw(f, app, chunks[1]),
        }
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "Poké Battle",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];

    if let Some(engine) = &app.engine {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            engine.phase().name(),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(seed) = app.seed {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            format!("seed {}", seed),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![
        ("?", "Help"),
        ("q", "Quit"),
    ];

    let screen_keys: Vec<(&str, &str)> = match app.screen {
        Screen::Start => vec![("Enter", "Start battle"), ("r", "New teams")],
        Screen::Battle => vec![
            ("↑/↓", "Select move"),
            ("Enter/1-4", "Attack"),
            ("PgUp/PgDn", "Scroll log"),
            ("r", "Restart"),
        ],
        Screen::Result => vec![("Enter/r", "Play again")],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in screen_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !screen_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

/// Color for an hp percentage
pub fn hp_color(percent: f64) -> Color {
    if percent > 50.0 {
        Color::Green
    } else if percent > 25.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Text hp bar
pub fn hp_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64) as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hp_bar_bounds() {
        assert_eq!(hp_bar(100.0, 4), "████");
        assert_eq!(hp_bar(0.0, 4), "░░░░");
        assert_eq!(hp_bar(50.0, 4), "██░░");
        assert_eq!(hp_bar(150.0, 4), "████");
    }

    #[test]
    fn test_hp_color_thresholds() {
        assert_eq!(hp_color(80.0), Color::Green);
        assert_eq!(hp_color(40.0), Color::Yellow);
        assert_eq!(hp_color(10.0), Color::Red);
    }
}
