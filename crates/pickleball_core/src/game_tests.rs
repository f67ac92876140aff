use super::*;

/// Replays a fixed sequence of draws, cycling when exhausted.
struct ScriptedSampler {
    rolls: Vec<i32>,
    next: usize,
    drawn: usize,
}

impl ScriptedSampler {
    fn new(rolls: &[i32]) -> Self {
        Self {
            rolls: rolls.to_vec(),
            next: 0,
            drawn: 0,
        }
    }
}

impl PointSampler for ScriptedSampler {
    fn roll(&mut self) -> i32 {
        let value = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        self.drawn += 1;
        value
    }
}

#[test]
fn unbeatable_server_sweeps_the_opening_slot() {
    let mut sampler = ScriptedSampler::new(&[50]);
    let score = play_game([100, 0], 11, &mut sampler);
    assert_eq!(score.points, [11, 0]);
    assert_eq!(score.winner, Side::First);
}

#[test]
fn helpless_server_hands_the_game_to_the_receiver() {
    let mut sampler = ScriptedSampler::new(&[50]);
    let score = play_game([0, 100], 11, &mut sampler);
    assert_eq!(score.points, [0, 11]);
    assert_eq!(score.winner, Side::Second);
}

#[test]
fn winner_lands_exactly_on_target() {
    // Draws alternate win/lose, so every serve slot scores exactly once.
    // Turn sequence: 1 point for the opener, then 2 per rotation, which
    // reaches 5-4 with the first side scoring the last point mid-slot.
    let mut sampler = ScriptedSampler::new(&[10, 90]);
    let score = play_game([60, 60], 5, &mut sampler);
    assert_eq!(score.points, [5, 4]);
    assert_eq!(score.winner, Side::First);
    assert!(score.points[0] <= 5 && score.points[1] <= 5);
}

#[test]
fn opening_turn_grants_a_single_serve_slot() {
    // First side fails its one opening draw (1 roll). Second side then
    // scores the only point of a 1-point game in its first slot (2 rolls:
    // the winning draw plus the re-check that sees the game over) and
    // burns one more draw opening its second slot (1 roll).
    let mut sampler = ScriptedSampler::new(&[50]);
    let score = play_game([0, 100], 1, &mut sampler);
    assert_eq!(score.points, [0, 1]);
    assert_eq!(sampler.drawn, 4);
}

#[test]
fn equal_scores_go_to_the_second_side() {
    assert_eq!(winner([7, 7]), Side::Second);
    assert_eq!(winner([0, 0]), Side::Second);
    assert_eq!(winner([8, 7]), Side::First);
    assert_eq!(winner([7, 8]), Side::Second);
}
