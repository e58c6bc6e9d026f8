pub mod fishing_scene;
pub mod game_common;
pub mod level_select_scene;
pub mod menu_scene;
pub mod settings_scene;
pub mod stats_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Draw whichever screen the app is on.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::MainMenu => menu_scene::render_main_menu(frame, area, app),
        Screen::LevelSelect => level_select_scene::render_level_select(frame, area, app),
        Screen::Playing | Screen::GameOver => {
            fishing_scene::render_fishing_scene(frame, area, app)
        }
        Screen::Stats => stats_scene::render_stats(frame, area, app),
        Screen::Settings => settings_scene::render_settings(frame, area, app),
    }
}
