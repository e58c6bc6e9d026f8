//! UI rendering for the ice fishing scene.

use crate::app::{App, CatchPopup};
use crate::game::{GameSession, HookState, Scene};
use crate::levels::LevelConfig;
use crate::ui::game_common::{
    blend, create_game_layout, format_clock, heading, label_value, render_info_panel_frame,
    render_overlay, render_status_bar, rgb,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;

/// Render the fishing scene, with the result overlay once time is up.
pub fn render_fishing_scene(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session() else {
        return;
    };

    let title = format!(" {} ", session.level().name);
    let layout = create_game_layout(frame, area, &title, Color::Cyan, 10, INFO_PANEL_WIDTH);

    render_lake(frame, layout.content, session, &app.popups);
    render_status_bar_content(frame, layout.status_bar, app, session);
    render_info_panel(frame, layout.info_panel, app, session);

    if !session.is_active() {
        render_game_over(frame, layout.content, app);
    }
}

/// Character grid the lake is painted into before it becomes a Paragraph.
struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<(char, Style)>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![(' ', Style::default()); width * height],
        }
    }

    fn put(&mut self, col: i64, row: i64, ch: char, fg: Color) {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return;
        }
        let cell = &mut self.cells[row as usize * self.width + col as usize];
        cell.0 = ch;
        cell.1 = cell.1.fg(fg);
    }

    fn put_str(&mut self, col: i64, row: i64, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i64, row, ch, fg);
        }
    }

    fn fill_row(&mut self, row: usize, ch: char, style: Style) {
        for col in 0..self.width {
            self.cells[row * self.width + col] = (ch, style);
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.width)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|(ch, style)| Span::styled(ch.to_string(), *style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

/// Maps scene points onto terminal cells.
struct Projection {
    sx: f64,
    sy: f64,
}

impl Projection {
    fn new(scene: &Scene, width: usize, height: usize) -> Self {
        Self {
            sx: width as f64 / scene.width,
            sy: height as f64 / scene.height,
        }
    }

    fn col(&self, x: f64) -> i64 {
        (x * self.sx).floor() as i64
    }

    fn row(&self, y: f64) -> i64 {
        (y * self.sy).floor() as i64
    }
}

fn render_lake(frame: &mut Frame, area: Rect, session: &GameSession, popups: &[CatchPopup]) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let scene = session.scene();
    let level = session.level();
    let proj = Projection::new(scene, width, height);
    let mut canvas = Canvas::new(width, height);

    let (hole_x, hole_y) = scene.hook_rest();
    let ice_row = proj.row(hole_y).clamp(0, height as i64 - 1) as usize;
    paint_background(&mut canvas, level, ice_row);

    // Ice hole
    let hole_col = proj.col(hole_x);
    canvas.put_str(hole_col - 1, ice_row as i64, "( )", Color::Black);

    // Caught fish fade into the water until their replacement arrives
    for pending in session.fish().pending() {
        let fish = &pending.caught;
        let glyph = fish_glyph(fish.kind.size.width * proj.sx, fish.direction);
        let half = glyph.chars().count() as i64 / 2;
        let color = blend(level.colors.water_top, fish.kind.color, pending.fade());
        canvas.put_str(proj.col(fish.x) - half, proj.row(fish.y), glyph, rgb(color));
    }

    for fish in session.fish().live() {
        let glyph = fish_glyph(fish.kind.size.width * proj.sx, fish.direction);
        let half = glyph.chars().count() as i64 / 2;
        canvas.put_str(
            proj.col(fish.x) - half,
            proj.row(fish.y),
            glyph,
            rgb(fish.kind.color),
        );
    }

    // Line from the hole down to the hook
    let (hook_x, hook_y) = session.hook_position();
    let hook_col = proj.col(hook_x);
    let hook_row = proj.row(hook_y);
    for row in (ice_row as i64 + 1)..hook_row {
        canvas.put(hook_col, row, '│', Color::Gray);
    }
    let hook_color = match session.hook().state() {
        HookState::Lowering => Color::Yellow,
        HookState::Raising => Color::White,
        HookState::Idle => Color::Gray,
    };
    if hook_row > ice_row as i64 {
        canvas.put(hook_col, hook_row, 'J', hook_color);
    }

    for popup in popups {
        let rise = (popup.age * 2.0 / proj.sy.max(1e-9)).min(scene.height * 0.05);
        canvas.put_str(
            proj.col(popup.x),
            proj.row(popup.y - rise),
            &popup.text,
            Color::Yellow,
        );
    }

    frame.render_widget(Paragraph::new(canvas.into_lines()), area);
}

fn paint_background(canvas: &mut Canvas, level: &LevelConfig, ice_row: usize) {
    let colors = &level.colors;
    let height = canvas.height;
    for row in 0..height {
        if row < ice_row {
            let t = row as f64 / ice_row.max(1) as f64;
            let bg = blend(colors.sky_top, colors.sky_bottom, t);
            canvas.fill_row(row, ' ', Style::default().bg(rgb(bg)));
        } else if row == ice_row {
            canvas.fill_row(
                row,
                '▀',
                Style::default()
                    .fg(rgb(colors.ice))
                    .bg(rgb(colors.water_top)),
            );
        } else {
            let span = (height - ice_row - 1).max(1);
            let t = (row - ice_row) as f64 / span as f64;
            let bg = blend(colors.water_top, colors.water_bottom, t);
            canvas.fill_row(row, ' ', Style::default().bg(rgb(bg)));
        }
    }
}

/// Fish drawn facing their swim direction, longer for bigger fish.
fn fish_glyph(cells_wide: f64, direction: i8) -> &'static str {
    match (cells_wide >= 4.0, direction > 0) {
        (true, true) => "><=>",
        (true, false) => "<=><",
        (false, true) => "><>",
        (false, false) => "<><",
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, app: &App, session: &GameSession) {
    let controls = [("[Space]", "Hold to lower"), ("[Esc]", "Leave")];
    if let Some(status) = &app.status {
        render_status_bar(frame, area, status, Color::Red, &controls);
        return;
    }

    let (text, color) = match session.hook().state() {
        HookState::Idle => ("Hold Space to drop the line".to_string(), Color::White),
        HookState::Lowering => (
            format!(
                "Lowering... {:.0}%",
                session.hook().depth() / session.hook().max_depth().max(1e-9) * 100.0
            ),
            Color::Yellow,
        ),
        HookState::Raising => ("Reeling in".to_string(), Color::Cyan),
    };
    render_status_bar(frame, area, &text, color, &controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, app: &App, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let level = session.level();
    let best = app.stats_for_level(level.id).high_score;
    let time_color = if session.is_time_warning() {
        Color::Red
    } else {
        Color::White
    };

    let mut lines = vec![
        heading(&format!(" {} ", level.name), Color::Cyan),
        Line::from(""),
        label_value("Score", session.score().to_string(), Color::White),
        label_value("Fish", session.fish_caught().to_string(), Color::Green),
        label_value("Time", format_clock(session.time_remaining()), time_color),
        label_value("Best", best.to_string(), Color::Yellow),
        Line::from(""),
        Line::from(Span::styled(
            " Fish:",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    for kind in &level.fishes {
        lines.push(Line::from(vec![
            Span::styled(" ><> ", Style::default().fg(rgb(kind.color))),
            Span::styled(
                format!("{:<10}", kind.name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:>3}", kind.points),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.last_result else {
        return;
    };

    let new_best = result.score > app.previous_best;
    let mut lines = vec![
        heading("TIME'S UP!", Color::Yellow),
        Line::from(""),
        Line::from(format!("Score: {}", result.score)),
        Line::from(format!("Fish caught: {}", result.fish_caught)),
    ];
    if new_best {
        lines.push(Line::from(Span::styled(
            "New high score!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    let prompt = if app.can_leave_game_over() {
        "[Enter] Play again  [Esc] Levels"
    } else {
        "..."
    };
    lines.push(Line::from(Span::styled(
        prompt,
        Style::default().fg(Color::DarkGray),
    )));

    render_overlay(frame, area, Color::Yellow, lines);
}
