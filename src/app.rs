//! Screen flow for the terminal host.
//!
//! `App` owns everything between key presses and the renderer: which screen
//! is up, the running session and its event queue, settings and stats. The
//! binary feeds it keys and elapsed time; the UI reads it.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::core::constants::GAME_OVER_LINGER_SECONDS;
use crate::core::GameError;
use crate::feedback::{GatedHaptics, HapticCue, HapticSink};
use crate::game::{EventQueue, GameSession, SessionEvent, SessionResult, SessionUpdate};
use crate::input::{KeyInput, TouchHold};
use crate::levels::{BuiltinLevels, LevelCatalog, LevelConfig};
use crate::settings::Settings;
use crate::stats::{LevelStats, StatsStore};

/// How long a "+points" popup stays on screen.
pub const POPUP_SECONDS: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    LevelSelect,
    Playing,
    GameOver,
    Stats,
    Settings,
}

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Stats,
    Settings,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::Play,
        MenuAction::Stats,
        MenuAction::Settings,
        MenuAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Stats => "Statistics",
            Self::Settings => "Settings",
            Self::Quit => "Quit",
        }
    }
}

/// Settings screen entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    Vibration,
    ResetStats,
    Back,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 3] = [
        SettingsItem::Vibration,
        SettingsItem::ResetStats,
        SettingsItem::Back,
    ];
}

/// Floating "+points" text where a fish was caught.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchPopup {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub age: f64,
}

/// Rings the terminal bell for the stronger cues.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl HapticSink for TerminalBell {
    fn play(&mut self, cue: HapticCue) {
        if cue.intensity() >= 1 {
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub menu_index: usize,
    pub level_index: usize,
    pub settings_index: usize,
    pub reset_pending: bool,
    pub settings: Settings,
    settings_path: Option<PathBuf>,
    levels: BuiltinLevels,
    stats: Box<dyn StatsStore>,
    session: Option<GameSession>,
    queue: EventQueue,
    results_tx: Sender<SessionResult>,
    results_rx: Receiver<SessionResult>,
    pub last_result: Option<SessionResult>,
    /// High score of the level before the last game was recorded.
    pub previous_best: u32,
    pub popups: Vec<CatchPopup>,
    pub touch: TouchHold,
    pub status: Option<String>,
    pub should_quit: bool,
    second_clock: f64,
    game_over_age: f64,
    bell: bool,
    menu_haptics: GatedHaptics<TerminalBell>,
}

impl App {
    pub fn new(
        settings: Settings,
        settings_path: Option<PathBuf>,
        stats: Box<dyn StatsStore>,
        release_events: bool,
    ) -> Self {
        let (results_tx, results_rx) = channel();
        let vibration = settings.vibration_enabled;
        Self {
            screen: Screen::MainMenu,
            menu_index: 0,
            level_index: 0,
            settings_index: 0,
            reset_pending: false,
            settings,
            settings_path,
            levels: BuiltinLevels::new(),
            stats,
            session: None,
            queue: EventQueue::new(),
            results_tx,
            results_rx,
            last_result: None,
            previous_best: 0,
            popups: Vec::new(),
            touch: TouchHold::new(release_events),
            status: None,
            should_quit: false,
            second_clock: 0.0,
            game_over_age: 0.0,
            bell: true,
            menu_haptics: GatedHaptics::new(TerminalBell, vibration),
        }
    }

    /// Never ring the terminal bell (for tests and non-interactive use).
    pub fn silent(mut self) -> Self {
        self.bell = false;
        self.menu_haptics.set_enabled(false);
        self
    }

    pub fn levels(&self) -> &[Arc<LevelConfig>] {
        self.levels.levels()
    }

    pub fn selected_level(&self) -> Option<&Arc<LevelConfig>> {
        self.levels().get(self.level_index)
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn stats_for_level(&self, level_id: u32) -> LevelStats {
        self.stats.stats_for_level(level_id)
    }

    pub fn overall_high_score(&self) -> u32 {
        self.stats.overall_high_score()
    }

    pub fn total_games_played(&self) -> u32 {
        self.stats.total_games_played()
    }

    pub fn total_fish_caught(&self) -> u32 {
        self.stats.total_fish_caught()
    }

    /// Every level paired with its stats, in catalog order.
    pub fn level_stats(&self) -> Vec<(Arc<LevelConfig>, LevelStats)> {
        self.levels()
            .iter()
            .map(|level| (Arc::clone(level), self.stats.stats_for_level(level.id)))
            .collect()
    }

    pub fn can_leave_game_over(&self) -> bool {
        self.game_over_age >= GAME_OVER_LINGER_SECONDS as f64
    }

    /// React to a key press.
    pub fn on_key(&mut self, input: KeyInput) {
        self.status = None;
        match self.screen {
            Screen::MainMenu => self.main_menu_key(input),
            Screen::LevelSelect => self.level_select_key(input),
            Screen::Playing => self.playing_key(input),
            Screen::GameOver => self.game_over_key(input),
            Screen::Stats => {
                if matches!(input, KeyInput::Back | KeyInput::Primary | KeyInput::Quit) {
                    self.screen = Screen::MainMenu;
                }
            }
            Screen::Settings => self.settings_key(input),
        }
    }

    /// The terminal reported the fishing key going up.
    pub fn on_hold_released(&mut self) {
        if self.touch.release() && self.screen == Screen::Playing {
            self.queue.push(SessionEvent::TouchUp);
        }
    }

    /// Let `elapsed` of wall-clock time pass: frame tick, whole seconds,
    /// touch timeout, popups, then drain the session queue.
    pub fn advance(&mut self, elapsed: Duration) {
        let dt = elapsed.as_secs_f64();
        match self.screen {
            Screen::Playing => {
                let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
                if self.touch.advance(elapsed_ms) {
                    self.queue.push(SessionEvent::TouchUp);
                }
                self.queue.push(SessionEvent::Frame(dt));
                self.second_clock += dt;
                while self.second_clock >= 1.0 {
                    self.second_clock -= 1.0;
                    self.queue.push(SessionEvent::SecondElapsed);
                }
                self.drain_queue();
            }
            Screen::GameOver => {
                self.game_over_age += dt;
            }
            _ => {}
        }

        for popup in &mut self.popups {
            popup.age += dt;
        }
        self.popups.retain(|p| p.age < POPUP_SECONDS);
        self.collect_results();
    }

    /// Start a session on the selected level.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let level = self
            .selected_level()
            .cloned()
            .ok_or(GameError::ConfigurationMissing {
                level_id: Some(self.level_index as u32),
            })?;
        let tx = self.results_tx.clone();
        let haptics = GatedHaptics::new(TerminalBell, self.settings.vibration_enabled && self.bell);

        let session = GameSession::builder()
            .level(level)
            .haptics(haptics)
            .on_complete(move |result| {
                let _ = tx.send(*result);
            })
            .build()?;

        self.session = Some(session);
        self.queue = EventQueue::new();
        self.touch.release();
        self.popups.clear();
        self.second_clock = 0.0;
        self.screen = Screen::Playing;
        Ok(())
    }

    fn main_menu_key(&mut self, input: KeyInput) {
        let count = MenuAction::ALL.len();
        match input {
            KeyInput::Up => self.menu_index = (self.menu_index + count - 1) % count,
            KeyInput::Down => self.menu_index = (self.menu_index + 1) % count,
            KeyInput::Primary | KeyInput::Hold => {
                self.menu_haptics.play(HapticCue::ButtonTap);
                self.select_menu(MenuAction::ALL[self.menu_index]);
            }
            KeyInput::Quit | KeyInput::Back => self.should_quit = true,
            _ => {}
        }
    }

    pub fn select_menu(&mut self, action: MenuAction) {
        match action {
            MenuAction::Play => self.screen = Screen::LevelSelect,
            MenuAction::Stats => self.screen = Screen::Stats,
            MenuAction::Settings => {
                self.settings_index = 0;
                self.reset_pending = false;
                self.screen = Screen::Settings;
            }
            MenuAction::Quit => self.should_quit = true,
        }
    }

    fn level_select_key(&mut self, input: KeyInput) {
        let count = self.levels().len();
        if count == 0 {
            if matches!(input, KeyInput::Back | KeyInput::Quit) {
                self.screen = Screen::MainMenu;
            }
            return;
        }
        match input {
            KeyInput::Up | KeyInput::Left => {
                self.level_index = (self.level_index + count - 1) % count
            }
            KeyInput::Down | KeyInput::Right => self.level_index = (self.level_index + 1) % count,
            KeyInput::Primary => {
                self.menu_haptics.play(HapticCue::ButtonTap);
                if let Err(e) = self.start_game() {
                    log::warn!("could not start level: {}", e);
                    self.status = Some(e.to_string());
                }
            }
            KeyInput::Back | KeyInput::Quit => self.screen = Screen::MainMenu,
            _ => {}
        }
    }

    fn playing_key(&mut self, input: KeyInput) {
        match input {
            KeyInput::Hold | KeyInput::Down => {
                if self.touch.press() {
                    self.queue.push(SessionEvent::TouchDown);
                }
            }
            KeyInput::Up => self.on_hold_released(),
            KeyInput::Back | KeyInput::Quit => {
                self.touch.release();
                self.queue.push(SessionEvent::Cancel);
                self.drain_queue();
            }
            _ => {}
        }
    }

    fn game_over_key(&mut self, input: KeyInput) {
        if !self.can_leave_game_over() {
            return;
        }
        match input {
            KeyInput::Primary => {
                if let Err(e) = self.start_game() {
                    self.status = Some(e.to_string());
                }
            }
            KeyInput::Back | KeyInput::Quit | KeyInput::Hold => {
                self.screen = Screen::LevelSelect;
            }
            _ => {}
        }
    }

    fn settings_key(&mut self, input: KeyInput) {
        let count = SettingsItem::ALL.len();
        match input {
            KeyInput::Up => {
                self.settings_index = (self.settings_index + count - 1) % count;
                self.reset_pending = false;
            }
            KeyInput::Down => {
                self.settings_index = (self.settings_index + 1) % count;
                self.reset_pending = false;
            }
            KeyInput::Toggle => self.toggle_vibration(),
            KeyInput::Reset => self.reset_stats(),
            KeyInput::Primary | KeyInput::Hold => match SettingsItem::ALL[self.settings_index] {
                SettingsItem::Vibration => self.toggle_vibration(),
                SettingsItem::ResetStats => self.reset_stats(),
                SettingsItem::Back => self.screen = Screen::MainMenu,
            },
            KeyInput::Back | KeyInput::Quit => {
                self.reset_pending = false;
                self.screen = Screen::MainMenu;
            }
            _ => {}
        }
    }

    fn toggle_vibration(&mut self) {
        let enabled = self.settings.toggle_vibration();
        self.menu_haptics.set_enabled(enabled && self.bell);
        self.menu_haptics.play(HapticCue::ButtonTap);
        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save(path) {
                log::warn!("could not save settings: {}", e);
                self.status = Some(format!("Could not save settings: {}", e));
            }
        }
    }

    /// First call asks for confirmation, the second one wipes the stats.
    fn reset_stats(&mut self) {
        if !self.reset_pending {
            self.reset_pending = true;
            return;
        }
        self.reset_pending = false;
        match self.stats.reset_all() {
            Ok(()) => self.status = Some("Statistics reset".to_string()),
            Err(e) => self.status = Some(format!("Could not reset statistics: {}", e)),
        }
    }

    fn drain_queue(&mut self) {
        let Some(session) = self.session.as_mut() else {
            self.queue = EventQueue::new();
            return;
        };
        for update in self.queue.dispatch(session) {
            match update {
                SessionUpdate::Caught(catch) => {
                    self.touch.release();
                    self.popups.push(CatchPopup {
                        text: format!("+{}", catch.points),
                        x: catch.x,
                        y: catch.y,
                        age: 0.0,
                    });
                }
                SessionUpdate::Ended(_) => {
                    self.touch.release();
                    self.game_over_age = 0.0;
                    self.screen = Screen::GameOver;
                }
                SessionUpdate::Aborted => {
                    self.session = None;
                    self.popups.clear();
                    self.screen = Screen::LevelSelect;
                    break;
                }
                _ => {}
            }
        }
    }

    /// Record results delivered by finished sessions.
    fn collect_results(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.previous_best = self.stats.stats_for_level(result.level_id).high_score;
            if let Err(e) = self.stats.record_result(&result) {
                self.status = Some(format!("Could not save statistics: {}", e));
            }
            self.last_result = Some(result);
        }
    }
}
