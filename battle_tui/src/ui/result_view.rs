//! Result screen

use crate::app::App;
use battle_core::Side;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(engine) = &app.engine else {
        return;
    };

    let (headline, color) = match engine.winner() {
        Some(Side::Player) => ("You Win!", Color::Green),
        Some(Side::Ai) => ("AI Wins!", Color::Red),
        None => ("No winner", Color::Gray),
    };

    let survivors = engine
        .winner()
        .map(|side| engine.roster(side).len())
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} creature(s) left standing", survivors),
            Style::default().fg(Color::Gray),
        )),
    ];

    if let Some(last) = engine.log().last() {
        lines.push(Line::from(Span::styled(
            format!("Last event: {}", last),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter or r to play again",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    f.render_widget(paragraph, area);
}
