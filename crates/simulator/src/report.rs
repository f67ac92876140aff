//! Aggregate tallies, report formatting, and JSON persistence.

use pickleball_core::Side;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::runner::SimConfig;

/// Win counts per side for a completed batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinTally {
    pub wins: [u64; 2],
}

impl WinTally {
    pub fn new() -> Self {
        Self { wins: [0, 0] }
    }

    pub fn record(&mut self, winner: Side) {
        self.wins[winner.idx()] += 1;
    }

    pub fn total_games(&self) -> u64 {
        self.wins[0] + self.wins[1]
    }

    /// Win percentage for a side, in `0.0..=100.0`.
    pub fn win_pct(&self, side: Side) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.wins[side.idx()] as f64 / total as f64
    }
}

impl Default for WinTally {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete summary of one simulation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimReport {
    pub points_to_win: u32,
    pub base_win_rate: i32,
    pub defense_bonus: i32,
    pub num_games: u64,
    pub serving_pct: [i32; 2],
    pub receiving_pct: [i32; 2],
    pub tally: WinTally,
    pub timestamp: String,
}

impl SimReport {
    pub fn new(config: &SimConfig, tally: WinTally) -> Self {
        let rates = config.rates();
        Self {
            points_to_win: config.points_to_win,
            base_win_rate: config.base_win_rate,
            defense_bonus: config.defense_bonus,
            num_games: config.num_games,
            serving_pct: rates.serving,
            receiving_pct: rates.receiving,
            tally,
            timestamp: unix_timestamp(),
        }
    }

    /// Save the report to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a report from a JSON file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Simulation: {} games to {} points ===\n\n",
            self.num_games, self.points_to_win
        ));
        report.push_str(&format!(
            "First team wins {}% of points while serving; {}% while receiving\n",
            self.serving_pct[0], self.receiving_pct[0]
        ));
        report.push_str(&format!(
            "Second team wins {}% of points while serving; {}% while receiving\n\n",
            self.serving_pct[1], self.receiving_pct[1]
        ));
        report.push_str(&format!(
            "First team win pct: {:.2}%\n",
            self.tally.win_pct(Side::First)
        ));
        report.push_str(&format!(
            "Second team win pct: {:.2}%\n",
            self.tally.win_pct(Side::Second)
        ));
        report
    }

    /// Print report to stdout.
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// One swept base win rate and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepEntry {
    pub base_win_rate: i32,
    pub tally: WinTally,
}

/// Results of a sweep over base win rates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResults {
    pub points_to_win: u32,
    pub defense_bonus: i32,
    pub games_per_rate: u64,
    pub entries: Vec<SweepEntry>,
}

impl SweepResults {
    pub fn new(points_to_win: u32, defense_bonus: i32, games_per_rate: u64) -> Self {
        Self {
            points_to_win,
            defense_bonus,
            games_per_rate,
            entries: Vec::new(),
        }
    }

    /// Add one swept rate's tally.
    pub fn add_entry(&mut self, base_win_rate: i32, tally: WinTally) {
        self.entries.push(SweepEntry {
            base_win_rate,
            tally,
        });
    }

    /// Save results to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Generate a text report.
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Sweep: {} games per rate, games to {} points ===\n",
            self.games_per_rate, self.points_to_win
        ));
        if self.defense_bonus != 0 {
            report.push_str(&format!(
                "Defense bonus: {} percentage points\n",
                self.defense_bonus
            ));
        }
        report.push('\n');

        report.push_str(&format!(
            "{:<8} {:>12} {:>12}\n",
            "Base %", "First %", "Second %"
        ));
        report.push_str(&"-".repeat(34));
        report.push('\n');

        for entry in &self.entries {
            report.push_str(&format!(
                "{:<8} {:>12.2} {:>12.2}\n",
                entry.base_win_rate,
                entry.tally.win_pct(Side::First),
                entry.tally.win_pct(Side::Second)
            ));
        }

        report
    }

    /// Print report to stdout.
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

/// Seconds since the Unix epoch, for progress lines and report stamps.
pub fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}
