//! Simulation batch runner: configuration, validation, and the game loop.

use pickleball_core::{play_game, PointRates, PointSampler};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::report::{unix_timestamp, WinTally};
use crate::sampler::RandomSampler;

/// How often to print a progress line, in completed games.
pub const PROGRESS_INTERVAL: u64 = 500_000;

/// Configuration for a simulation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Points needed to take a game.
    pub points_to_win: u32,
    /// First side's per-point win percentage under neutral conditions.
    pub base_win_rate: i32,
    /// Percentage points added to a side's rate while receiving.
    pub defense_bonus: i32,
    /// Number of games to simulate.
    pub num_games: u64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Print each game's final score.
    pub debug: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            points_to_win: 11,
            base_win_rate: 50,
            defense_bonus: 0,
            num_games: 100_000,
            seed: None,
            debug: false,
        }
    }
}

impl SimConfig {
    /// Derive the four per-point percentages for this matchup.
    pub fn rates(&self) -> PointRates {
        PointRates::derive(self.base_win_rate, self.defense_bonus)
    }

    /// Reject configurations the simulation cannot handle meaningfully:
    /// a zero-point game never terminates, a zero-game batch has no
    /// percentages to report, and out-of-range percentages make the
    /// per-point draw meaningless.
    pub fn validate(&self) -> Result<(), String> {
        if self.points_to_win == 0 {
            return Err("points to win must be at least 1".to_string());
        }
        if self.num_games == 0 {
            return Err("number of games must be at least 1".to_string());
        }
        let rates = self.rates();
        if !rates.in_bounds() {
            return Err(format!(
                "win rate {} with defense bonus {} puts per-point percentages outside 0-100 \
                 (serving {:?}, receiving {:?})",
                self.base_win_rate, self.defense_bonus, rates.serving, rates.receiving
            ));
        }
        Ok(())
    }

    /// Parse a scenario from TOML; absent fields keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("Failed to parse scenario: {}", e))
    }

    /// Load a scenario file.
    pub fn from_toml_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario file: {}", e))?;
        Self::from_toml_str(&text)
    }

    fn sampler(&self) -> RandomSampler {
        match self.seed {
            Some(seed) => RandomSampler::seeded(seed),
            None => RandomSampler::new(),
        }
    }
}

/// Runs a batch of independent games and tallies the winners.
pub struct SimRunner {
    config: SimConfig,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration, then run the full batch.
    pub fn run(&self) -> Result<WinTally, String> {
        self.config.validate()?;
        let rates = self.config.rates();
        let mut sampler = self.config.sampler();
        Ok(self.run_with(&rates, &mut sampler))
    }

    /// Run the batch against caller-supplied rates and sampler.
    pub fn run_with<S: PointSampler>(&self, rates: &PointRates, sampler: &mut S) -> WinTally {
        let mut tally = WinTally::new();

        for game_num in 1..=self.config.num_games {
            let score = play_game(rates.serving, self.config.points_to_win, sampler);
            tally.record(score.winner);

            if self.config.debug {
                println!("GAME: {} - {}", score.points[0], score.points[1]);
            }
            if game_num % PROGRESS_INTERVAL == 0 {
                println!(
                    "... [{}] {} simulations complete...",
                    unix_timestamp(),
                    game_num
                );
            }
        }

        tally
    }
}

/// Quick utility to run a batch with everything else at defaults.
pub fn quick_sim(
    base_win_rate: i32,
    defense_bonus: i32,
    points_to_win: u32,
    num_games: u64,
) -> Result<WinTally, String> {
    let config = SimConfig {
        base_win_rate,
        defense_bonus,
        points_to_win,
        num_games,
        ..Default::default()
    };
    SimRunner::new(config).run()
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
