use super::*;
use pickleball_core::Side;

#[test]
fn unbeatable_base_rate_wins_every_game() {
    let config = SimConfig {
        base_win_rate: 100,
        num_games: 2000,
        seed: Some(1),
        ..Default::default()
    };
    let tally = SimRunner::new(config).run().unwrap();
    assert_eq!(tally.wins, [2000, 0]);
}

#[test]
fn hopeless_base_rate_loses_every_game() {
    let config = SimConfig {
        base_win_rate: 0,
        num_games: 2000,
        seed: Some(1),
        ..Default::default()
    };
    let tally = SimRunner::new(config).run().unwrap();
    assert_eq!(tally.wins, [0, 2000]);
}

#[test]
fn seeded_runs_are_reproducible() {
    let config = SimConfig {
        base_win_rate: 55,
        num_games: 5000,
        seed: Some(42),
        ..Default::default()
    };
    let first = SimRunner::new(config.clone()).run().unwrap();
    let second = SimRunner::new(config).run().unwrap();
    assert_eq!(first, second);
}

#[test]
fn even_matchup_is_roughly_symmetric() {
    let config = SimConfig {
        num_games: 200_000,
        seed: Some(7),
        ..Default::default()
    };
    let tally = SimRunner::new(config).run().unwrap();

    assert_eq!(tally.total_games(), 200_000);
    let first_pct = tally.win_pct(Side::First);
    assert!(
        (first_pct - 50.0).abs() < 1.5,
        "expected near-even split, got {:.2}%",
        first_pct
    );
}

#[test]
fn quick_sim_plays_the_requested_games() {
    let tally = quick_sim(100, 0, 11, 100).unwrap();
    assert_eq!(tally.wins, [100, 0]);
}

#[test]
fn rejects_zero_points_to_win() {
    let config = SimConfig {
        points_to_win: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn rejects_zero_games() {
    let config = SimConfig {
        num_games: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn rejects_out_of_range_percentages() {
    let over = SimConfig {
        base_win_rate: 60,
        defense_bonus: 50,
        ..Default::default()
    };
    assert!(over.validate().is_err());

    let negative = SimConfig {
        base_win_rate: 120,
        ..Default::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn scenario_file_fields_override_defaults() {
    let config = SimConfig::from_toml_str(
        "base_win_rate = 60\n\
         num_games = 5000\n",
    )
    .unwrap();

    assert_eq!(config.base_win_rate, 60);
    assert_eq!(config.num_games, 5000);
    assert_eq!(config.points_to_win, 11);
    assert_eq!(config.defense_bonus, 0);
    assert_eq!(config.seed, None);
    assert!(!config.debug);
}

#[test]
fn malformed_scenario_is_rejected() {
    assert!(SimConfig::from_toml_str("base_win_rate = \"plenty\"").is_err());
}
