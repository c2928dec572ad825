//! Help view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "═══ Controls ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("↑/k  ↓/j", "Select move"),
        key_line("Enter / Space", "Attack with selected move (or start / play again)"),
        key_line("1-4", "Attack with that move"),
        key_line("PgUp / PgDn", "Scroll battle log"),
        key_line("r", "New teams"),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Turn Order ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "One strike per turn:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  The front creature with higher Speed attacks, the other does not"),
        Line::from("  Equal Speed: your creature attacks"),
        Line::from(""),
        Line::from(Span::styled(
            "Move choice:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Your move is only used when your creature is the faster one"),
        Line::from("  The AI always uses its highest-power move (first one on ties)"),
        Line::from(""),
        Line::from(Span::styled(
            "Damage:",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  HP lost = move power, no types, no status effects"),
        Line::from("  Struggle (50) fills in for creatures with fewer than 4 attacks"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
