//! Battle screen: both teams, the player's moves and the battle log

use super::{hp_bar, hp_color};
use crate::app::App;
use battle_core::{BattleEngine, Combatant, Roster, Side};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(engine) = &app.engine else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Teams
            Constraint::Percentage(45), // Log
        ])
        .split(area);

    let team_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Player team
            Constraint::Length(6), // Moves
            Constraint::Min(8),    // AI team
        ])
        .split(chunks[0]);

    let log_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Last turn
            Constraint::Min(0),    // Log
        ])
        .split(chunks[1]);

    draw_team(f, engine.player_roster(), Side::Player, team_chunks[0]);
    draw_moves(f, app, engine, team_chunks[1]);
    draw_team(f, engine.ai_roster(), Side::Ai, team_chunks[2]);
    draw_last_turn(f, app, log_chunks[0]);
    draw_log(f, app, engine, log_chunks[1]);
}

fn combatant_lines(c: &Combatant, is_front: bool, bar_width: usize) -> Vec<Line<'static>> {
    let percent = c.hp_percent();
    let color = hp_color(percent);
    let marker = if is_front { "▶ " } else { "  " };
    let name_style = if is_front {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:14}", c.name), name_style),
            Span::styled(
                format!(" HP {:>4}/{:<4}", c.hp.max(0), c.max_hp),
                Style::default().fg(color),
            ),
            Span::styled(
                format!(" SPD {:>3}", c.speed),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(hp_bar(percent, bar_width), Style::default().fg(color)),
        ]),
    ]
}

fn draw_team(f: &mut Frame, roster: &Roster, side: Side, area: Rect) {
    let bar_width = area.width.saturating_sub(6).min(30) as usize;
    let lines: Vec<Line> = roster
        .iter()
        .enumerate()
        .flat_map(|(i, c)| combatant_lines(c, i == 0, bar_width))
        .collect();

    let title = match side {
        Side::Player => format!(" Your Team ({} left) ", roster.len()),
        Side::Ai => format!(" AI Team ({} left) ", roster.len()),
    };
    let border = match side {
        Side::Player => Color::Cyan,
        Side::Ai => Color::Red,
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    );

    f.render_widget(paragraph, area);
}

fn draw_moves(f: &mut Frame, app: &App, engine: &BattleEngine, area: Rect) {
    // Only the player's front combatant's moves are shown; the AI's stay hidden
    let items: Vec<ListItem> = match engine.player_roster().front() {
        Some(front) => front
            .moves
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let selected = i == app.selected_move;
                let style = if selected {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{:20} {:>3}", m.name, m.power), style),
                ]))
            })
            .collect(),
        None => Vec::new(),
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Moves "));
    f.render_widget(list, area);
}

fn draw_last_turn(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.last_outcome {
        Some(outcome) => {
            let color = match outcome.attacker_side {
                Side::Player => Color::Green,
                Side::Ai => Color::Red,
            };
            let mut spans = vec![Span::styled(outcome.summary(), Style::default().fg(color))];
            if outcome.player_choice_discarded {
                spans.push(Span::styled(
                    " (AI was faster)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled(
            "Choose a move. The faster front combatant strikes.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(line)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Last Turn "));
    f.render_widget(paragraph, area);
}

fn draw_log(f: &mut Frame, app: &App, engine: &BattleEngine, area: Rect) {
    let entries = engine.log().all();
    let height = area.height.saturating_sub(2) as usize;
    let end = (app.log_scroll + 1).min(entries.len());
    let start = end.saturating_sub(height);

    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|line| {
            let style = if line.ends_with("fainted!") {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(line.clone(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Battle Log (PgUp/PgDn to scroll) "),
    );

    f.render_widget(list, area);
}
