//! Level select: list of lakes on the left, details of the highlighted one
//! on the right.

use crate::app::App;
use crate::ui::game_common::{
    create_game_layout, format_clock, heading, label_value, render_info_panel_frame,
    render_status_bar, rgb,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub fn render_level_select(frame: &mut Frame, area: Rect, app: &App) {
    let layout = create_game_layout(frame, area, " Choose a Lake ", Color::Cyan, 5, 30);

    let items: Vec<ListItem> = app
        .level_stats()
        .iter()
        .enumerate()
        .map(|(i, (level, stats))| {
            let selected = i == app.level_index;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let best = if stats.has_played() {
                format!("  best {}", stats.high_score)
            } else {
                String::new()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}. {}", prefix, level.id + 1, level.name), style),
                Span::styled(best, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), layout.content);

    let (text, color) = match &app.status {
        Some(status) => (status.as_str(), Color::Red),
        None => ("Pick a lake to fish", Color::White),
    };
    render_status_bar(
        frame,
        layout.status_bar,
        text,
        color,
        &[("[↑↓]", "Move"), ("[Enter]", "Fish"), ("[Esc]", "Back")],
    );

    render_level_details(frame, layout.info_panel, app);
}

fn render_level_details(frame: &mut Frame, area: Rect, app: &App) {
    let inner = render_info_panel_frame(frame, area);
    let Some(level) = app.selected_level() else {
        return;
    };
    let stats = app.stats_for_level(level.id);

    let mut lines = vec![
        heading(&format!(" {} ", level.name), Color::Cyan),
        Line::from(""),
        label_value("Time", format_clock(level.duration), Color::White),
        label_value("Fish at once", level.fish_count.to_string(), Color::White),
        label_value("Top catch", level.best_fish_points().to_string(), Color::Yellow),
        Line::from(""),
    ];

    for kind in &level.fishes {
        lines.push(Line::from(vec![
            Span::styled(" ><> ", Style::default().fg(rgb(kind.color))),
            Span::styled(kind.name, Style::default().fg(Color::White)),
            Span::styled(
                format!(" {} pts", kind.points),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    if stats.has_played() {
        lines.push(label_value("High score", stats.high_score.to_string(), Color::Green));
        lines.push(label_value("Played", stats.games_played.to_string(), Color::White));
    } else {
        lines.push(Line::from(Span::styled(
            " Not fished yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
