//! Per-point win percentages derived from the matchup parameters.

/// Each side's chance of winning a single point, as integer percentages,
/// split by whether that side is serving or receiving.
///
/// Derivation performs no range checks; configurations that put a
/// percentage outside `0..=100` are rejected by the runner before a
/// simulation starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointRates {
    /// Chance of winning a point while serving, indexed by side.
    pub serving: [i32; 2],
    /// Chance of winning a point while receiving, indexed by side.
    pub receiving: [i32; 2],
}

impl PointRates {
    /// Derive all four percentages from the first side's baseline
    /// per-point win rate and the bonus a side gets while receiving.
    ///
    /// A side's serving chance is the complement of the opponent's
    /// receiving chance for that same point.
    pub fn derive(base_win_rate: i32, defense_bonus: i32) -> Self {
        let receiving = [
            base_win_rate + defense_bonus,
            (100 - base_win_rate) + defense_bonus,
        ];
        let serving = [100 - receiving[1], 100 - receiving[0]];
        Self { serving, receiving }
    }

    /// True when every derived percentage is a valid probability.
    pub fn in_bounds(&self) -> bool {
        self.serving
            .iter()
            .chain(self.receiving.iter())
            .all(|pct| (0..=100).contains(pct))
    }
}

#[cfg(test)]
#[path = "rates_tests.rs"]
mod rates_tests;
