//! Main menu.

use crate::app::{App, MenuAction};
use crate::ui::game_common::render_status_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const TITLE_ART: [&str; 5] = [
    r"  ___           _____ _     _    ",
    r" |_ _|___ ___  |  ___(_)___| |__ ",
    r"  | |/ __/ _ \ | |_  | / __| '_ \",
    r"  | | (_|  __/ |  _| | \__ \ | | |",
    r" |___\___\___| |_|   |_|___/_| |_|",
];

pub fn render_main_menu(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_ART.len() as u16 + 2),
            Constraint::Min(MenuAction::ALL.len() as u16),
            Constraint::Length(2),
        ])
        .split(inner);

    let mut title: Vec<Line> = vec![Line::from("")];
    title.extend(TITLE_ART.iter().map(|l| {
        Line::styled(
            *l,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    }));
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[0],
    );

    let items: Vec<ListItem> = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let selected = i == app.menu_index;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let line = Line::from(format!("{}{}", prefix, action.label()));
            ListItem::new(line.alignment(Alignment::Center)).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[1]);

    let status = app
        .status
        .as_deref()
        .unwrap_or("Catch as many fish as you can before time runs out");
    render_status_bar(
        frame,
        chunks[2],
        status,
        Color::DarkGray,
        &[("[↑↓]", "Move"), ("[Enter]", "Select"), ("[q]", "Quit")],
    );
}
