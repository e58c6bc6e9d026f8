//! Stats and settings integration tests
//!
//! Finished sessions flowing into the stats store, file persistence of
//! stats and settings, and the terminal app recording games.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use icefish::app::{App, Screen};
use icefish::game::{SessionBuilder, SessionResult};
use icefish::levels::{BuiltinLevels, LevelCatalog};
use icefish::settings::Settings;
use icefish::stats::{FileStatsStore, StatsBook, StatsStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("icefish-it-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::remove_file(&path).ok();
    path
}

fn result(level_id: u32, score: u32, fish_caught: u32, time_used: u32) -> SessionResult {
    SessionResult {
        score,
        fish_caught,
        level_id,
        time_used,
    }
}

#[test]
fn test_completed_session_is_recorded_once() {
    let catalog = BuiltinLevels::new();
    let level = catalog.level(1).unwrap();
    let path = scratch("session_stats.json");

    let mut store = FileStatsStore::open(&path);
    let (tx, rx) = std::sync::mpsc::channel();
    let mut session = SessionBuilder::new()
        .level(level.clone())
        .on_complete(move |r| tx.send(*r).unwrap())
        .build_with_rng(ChaCha8Rng::seed_from_u64(99))
        .unwrap();

    for _ in 0..level.duration + 5 {
        session.on_second_elapsed();
    }
    for r in rx.try_iter() {
        store.record_result(&r).unwrap();
    }

    let stats = FileStatsStore::open(&path).stats_for_level(1);
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.best_time, level.duration);
    assert!(stats.last_played.is_some());

    fs::remove_file(path).ok();
}

#[test]
fn test_high_score_only_increases() {
    let mut book = StatsBook::new();
    for (score, expected) in [(30, 30), (10, 30), (55, 55), (0, 55)] {
        book.record_result(&result(0, score, 1, 60)).unwrap();
        assert_eq!(book.stats_for_level(0).high_score, expected);
    }
    assert_eq!(book.stats_for_level(0).total_fish_caught, 4);
    assert_eq!(book.stats_for_level(0).games_played, 4);
}

#[test]
fn test_corrupt_stats_file_starts_fresh() {
    let path = scratch("corrupt_stats.json");
    fs::write(&path, "{ not json").unwrap();

    let mut store = FileStatsStore::open(&path);
    assert!(store.book().is_empty());
    store.record_result(&result(2, 12, 2, 90)).unwrap();

    let reopened = FileStatsStore::open(&path);
    assert_eq!(reopened.stats_for_level(2).high_score, 12);

    fs::remove_file(path).ok();
}

#[test]
fn test_settings_round_trip() {
    let path = scratch("settings.json");
    let mut settings = Settings::load(&path);
    assert!(settings.vibration_enabled);

    settings.toggle_vibration();
    settings.config_endpoint = Some("https://config.example/launch".to_string());
    settings.save(&path).unwrap();

    assert_eq!(Settings::load(&path), settings);
    fs::remove_file(path).ok();
}

#[test]
fn test_app_records_finished_games_in_file_store() {
    let stats_path = scratch("app_stats.json");
    let settings_path = scratch("app_settings.json");
    let store = FileStatsStore::open(&stats_path);
    let mut app = App::new(
        Settings::default(),
        Some(settings_path.clone()),
        Box::new(store),
        false,
    )
    .silent();

    app.level_index = 4;
    app.start_game().unwrap();
    let duration = app.session().unwrap().level().duration;
    for _ in 0..duration {
        app.advance(Duration::from_secs(1));
    }

    assert_eq!(app.screen, Screen::GameOver);
    let stats = FileStatsStore::open(&stats_path).stats_for_level(4);
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.best_time, duration);

    fs::remove_file(stats_path).ok();
    fs::remove_file(settings_path).ok();
}

#[test]
fn test_file_store_totals_through_trait_object() {
    let path = scratch("totals_stats.json");
    let mut store: Box<dyn StatsStore> = Box::new(FileStatsStore::open(&path));
    store.record_result(&result(0, 35, 4, 60)).unwrap();
    store.record_result(&result(3, 50, 2, 45)).unwrap();
    store.record_result(&result(3, 20, 1, 45)).unwrap();

    assert_eq!(store.overall_high_score(), 50);
    assert_eq!(store.total_games_played(), 3);
    assert_eq!(store.total_fish_caught(), 7);

    store.reset_all().unwrap();
    assert_eq!(store.overall_high_score(), 0);
    assert_eq!(store.total_games_played(), 0);

    fs::remove_file(path).ok();
}
