//! Settings screen.

use crate::app::{App, SettingsItem};
use crate::ui::game_common::render_status_bar;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let items: Vec<ListItem> = SettingsItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == app.settings_index;
            let prefix = if selected { "> " } else { "  " };
            let label_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let (label, value) = match item {
                SettingsItem::Vibration => (
                    "Vibration (bell)",
                    if app.settings.vibration_enabled {
                        Span::styled(" ON", Style::default().fg(Color::Green))
                    } else {
                        Span::styled(" OFF", Style::default().fg(Color::Red))
                    },
                ),
                SettingsItem::ResetStats => (
                    "Reset statistics",
                    if app.reset_pending {
                        Span::styled(
                            " press again to confirm",
                            Style::default().fg(Color::Red),
                        )
                    } else {
                        Span::raw("")
                    },
                ),
                SettingsItem::Back => ("Back", Span::raw("")),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", prefix, label), label_style),
                value,
            ]))
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let (text, color) = match &app.status {
        Some(status) => (status.as_str(), Color::Yellow),
        None => ("", Color::White),
    };
    render_status_bar(
        frame,
        chunks[1],
        text,
        color,
        &[
            ("[Enter]", "Change"),
            ("[v]", "Vibration"),
            ("[r]", "Reset"),
            ("[Esc]", "Back"),
        ],
    );
}
