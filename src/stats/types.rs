//! Per-level play statistics.

use std::collections::BTreeMap;
use std::io;

use serde::{Deserialize, Serialize};

use crate::game::SessionResult;

/// Running totals for one level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    pub games_played: u32,
    pub high_score: u32,
    pub total_fish_caught: u32,
    /// Longest session recorded, in seconds.
    pub best_time: u32,
    /// Unix timestamp of the last recorded game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played: Option<i64>,
}

impl LevelStats {
    pub fn has_played(&self) -> bool {
        self.games_played > 0
    }
}

/// Where finished sessions are recorded and stats are read back.
pub trait StatsStore {
    fn record_result(&mut self, result: &SessionResult) -> io::Result<()>;
    fn stats_for_level(&self, level_id: u32) -> LevelStats;
    /// Highest score on any level, 0 before the first game.
    fn overall_high_score(&self) -> u32;
    fn total_games_played(&self) -> u32;
    fn total_fish_caught(&self) -> u32;
    /// Forget every recorded game.
    fn reset_all(&mut self) -> io::Result<()>;
}

/// Stats for every level that has been played.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsBook {
    #[serde(default)]
    levels: BTreeMap<u32, LevelStats>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats_for_level(&self, level_id: u32) -> LevelStats {
        self.levels.get(&level_id).copied().unwrap_or_default()
    }

    /// Fold one finished session into its level's stats.
    pub fn record(&mut self, result: &SessionResult, played_at: i64) {
        let stats = self.levels.entry(result.level_id).or_default();
        stats.games_played += 1;
        stats.total_fish_caught += result.fish_caught;
        stats.high_score = stats.high_score.max(result.score);
        stats.best_time = stats.best_time.max(result.time_used);
        stats.last_played = Some(played_at);
    }

    pub fn overall_high_score(&self) -> u32 {
        self.levels.values().map(|s| s.high_score).max().unwrap_or(0)
    }

    pub fn total_games_played(&self) -> u32 {
        self.levels.values().map(|s| s.games_played).sum()
    }

    pub fn total_fish_caught(&self) -> u32 {
        self.levels.values().map(|s| s.total_fish_caught).sum()
    }

    pub fn reset(&mut self) {
        self.levels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl StatsStore for StatsBook {
    fn record_result(&mut self, result: &SessionResult) -> io::Result<()> {
        self.record(result, chrono::Utc::now().timestamp());
        Ok(())
    }

    fn stats_for_level(&self, level_id: u32) -> LevelStats {
        StatsBook::stats_for_level(self, level_id)
    }

    fn overall_high_score(&self) -> u32 {
        StatsBook::overall_high_score(self)
    }

    fn total_games_played(&self) -> u32 {
        StatsBook::total_games_played(self)
    }

    fn total_fish_caught(&self) -> u32 {
        StatsBook::total_fish_caught(self)
    }

    fn reset_all(&mut self) -> io::Result<()> {
        self.reset();
        Ok(())
    }
}
