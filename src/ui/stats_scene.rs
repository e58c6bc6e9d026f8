//! Statistics: a row per level plus overall totals.

use crate::app::App;
use crate::ui::game_common::{
    create_game_layout, label_value, render_info_panel_frame, render_status_bar,
};
use chrono::{Local, TimeZone};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Row, Table},
    Frame,
};

pub fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let layout = create_game_layout(frame, area, " Statistics ", Color::Green, 5, 26);
    let level_stats = app.level_stats();

    let header = Row::new(vec!["Lake", "Played", "High", "Fish", "Longest", "Last"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows: Vec<Row> = level_stats
        .iter()
        .map(|(level, stats)| {
            let last = stats
                .last_played
                .and_then(|ts| Local.timestamp_opt(ts, 0).single())
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string());
            let style = if stats.has_played() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Row::new(vec![
                level.name.to_string(),
                stats.games_played.to_string(),
                stats.high_score.to_string(),
                stats.total_fish_caught.to_string(),
                format!("{}s", stats.best_time),
                last,
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(7),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(11),
        ],
    )
    .header(header);
    frame.render_widget(table, layout.content);

    render_status_bar(frame, layout.status_bar, "", Color::White, &[("[Esc]", "Back")]);

    let inner = render_info_panel_frame(frame, layout.info_panel);
    let lines = vec![
        Line::from(""),
        label_value("Games", app.total_games_played().to_string(), Color::White),
        label_value("Fish caught", app.total_fish_caught().to_string(), Color::Green),
        label_value("Best score", app.overall_high_score().to_string(), Color::Yellow),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
