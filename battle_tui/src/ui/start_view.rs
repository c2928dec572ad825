//! Start screen: rules and roster loading status

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "═══ Rules ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        rule("You and the AI each start with a team of six random creatures."),
        rule("Every creature has HP, Speed and four moves."),
        rule("Each turn only the faster front creature strikes. Ties go to you."),
        rule("You pick a move. The AI always uses its strongest move."),
        rule("You cannot see the AI's moves."),
        rule("A creature at 0 HP or below faints and the next one steps up."),
        rule("The first team with nobody left loses."),
        Line::from(""),
    ];

    let status = if let Some(err) = &app.setup_error {
        Line::from(vec![
            Span::styled(
                "Setup failed: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(err.clone(), Style::default().fg(Color::Red)),
            Span::styled("  (press r to try again)", Style::default().fg(Color::DarkGray)),
        ])
    } else if app.is_ready() {
        Line::from(Span::styled(
            "Teams ready. Press Enter to start!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else if app.is_loading() {
        Line::from(Span::styled(
            "Assembling teams...",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            "No teams yet. Press r to draw new ones.",
            Style::default().fg(Color::DarkGray),
        ))
    };
    lines.push(status);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Poké Battle "));

    f.render_widget(paragraph, area);
}

fn rule(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::Yellow)),
        Span::styled(text.to_string(), Style::default().fg(Color::White)),
    ])
}
