//! Stats persistence (~/.icefish/stats.json).

use std::io;
use std::path::{Path, PathBuf};

use super::types::{LevelStats, StatsBook, StatsStore};
use crate::game::SessionResult;
use crate::utils::persistence::{load_json_or_default, save_json, save_path};

pub const STATS_FILENAME: &str = "stats.json";

/// A `StatsBook` that writes itself to disk after every change.
#[derive(Debug, Clone)]
pub struct FileStatsStore {
    path: PathBuf,
    book: StatsBook,
}

impl FileStatsStore {
    /// Open the store at ~/.icefish/stats.json.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::open(&save_path(STATS_FILENAME)?))
    }

    /// Open the store at `path`. A missing or corrupt file starts empty.
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            book: load_json_or_default(path),
        }
    }

    pub fn book(&self) -> &StatsBook {
        &self.book
    }

    /// Re-read the file, picking up changes made elsewhere.
    pub fn reload(&mut self) {
        self.book = load_json_or_default(&self.path);
    }

    /// Forget all progress.
    pub fn reset(&mut self) -> io::Result<()> {
        self.book.reset();
        log::info!("stats reset");
        save_json(&self.path, &self.book)
    }
}

impl StatsStore for FileStatsStore {
    fn record_result(&mut self, result: &SessionResult) -> io::Result<()> {
        self.book.record(result, chrono::Utc::now().timestamp());
        save_json(&self.path, &self.book).inspect_err(|e| {
            log::warn!("could not save stats to {}: {}", self.path.display(), e);
        })
    }

    fn stats_for_level(&self, level_id: u32) -> LevelStats {
        self.book.stats_for_level(level_id)
    }

    fn overall_high_score(&self) -> u32 {
        self.book.overall_high_score()
    }

    fn total_games_played(&self) -> u32 {
        self.book.total_games_played()
    }

    fn total_fish_caught(&self) -> u32 {
        self.book.total_fish_caught()
    }

    fn reset_all(&mut self) -> io::Result<()> {
        self.reset()
    }
}
