//! Single-game simulation: serve rotation and the scoring loop.

use crate::PointSampler;
use crate::types::Side;

/// Outcome of one simulated game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinalScore {
    /// Final points, indexed by side.
    pub points: [u32; 2],
    /// Side that took the game.
    pub winner: Side,
}

/// Pick the winner from a final score.
///
/// The comparison is deliberately non-strict for the second side: any
/// score where the first side does not lead goes to the second side.
pub fn winner(points: [u32; 2]) -> Side {
    if points[0] > points[1] {
        Side::First
    } else {
        Side::Second
    }
}

fn game_over(points: [u32; 2], points_to_win: u32) -> bool {
    points[0] >= points_to_win || points[1] >= points_to_win
}

/// Play one game to `points_to_win` and return the final score.
///
/// The first side opens the game with a single serve slot; every turn
/// after that grants the serving side two slots before service passes
/// to the other side. Within a slot the server keeps scoring, and keeps
/// serve, until a draw exceeds its serving percentage or the game ends.
///
/// The sampler is rolled before the terminal check on each pass, so
/// draw consumption for a given seed is stable.
pub fn play_game<S: PointSampler>(
    serving_pct: [i32; 2],
    points_to_win: u32,
    sampler: &mut S,
) -> FinalScore {
    let mut points = [0u32; 2];
    let mut serving = Side::First;
    let mut first_serve = true;

    while !game_over(points, points_to_win) {
        let slots = if first_serve { 1 } else { 2 };

        for _ in 0..slots {
            while serving_pct[serving.idx()] >= sampler.roll()
                && !game_over(points, points_to_win)
            {
                points[serving.idx()] += 1;
            }
        }

        serving = serving.other();
        first_serve = false;
    }

    FinalScore {
        points,
        winner: winner(points),
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
