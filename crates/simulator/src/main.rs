//! Simulation CLI
//!
//! Estimate each side's chance of winning a rally-scored game.

use pickleball_core::Side;
use simulator::{SimConfig, SimReport, SimRunner, SweepResults};
use std::env;
use std::path::{Path, PathBuf};

fn print_usage() {
    println!("Rally game win-percentage simulator");
    println!();
    println!("Usage:");
    println!("  simulator run [options]");
    println!("  simulator sweep [--from A] [--to B] [--step S] [options]");
    println!("  simulator show <report.json>");
    println!();
    println!("Options:");
    println!("  -p, --points N     Points needed to win a game (default 11)");
    println!("  -w, --win-pct N    First side's per-point win percentage (default 50)");
    println!("  -f, --def-pct N    Percentage-point bonus while receiving (default 0)");
    println!("  -s, --sims N       Number of games to simulate (default 100000)");
    println!("      --seed N       Fix the RNG seed for a reproducible run");
    println!("      --config FILE  Load a TOML scenario file (flags override it)");
    println!("      --out FILE     Save the report as JSON");
    println!("  -d, --debug        Print each game's final score");
    println!();
    println!("Examples:");
    println!("  simulator run --win-pct 55 --sims 1000000");
    println!("  simulator sweep --from 40 --to 60 --step 5");
}

/// Parse the value following a flag, reporting failures on stderr.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Option<T> {
    if *i + 1 >= args.len() {
        eprintln!("Error: {} requires a value", flag);
        return None;
    }
    *i += 1;
    match args[*i].parse() {
        Ok(value) => Some(value),
        Err(_) => {
            eprintln!("Error: invalid value for {}: {}", flag, args[*i]);
            None
        }
    }
}

/// Resolve the starting configuration: a scenario file if `--config` is
/// present, defaults otherwise. Flags are applied on top afterwards.
fn scenario_from_args(args: &[String]) -> Option<SimConfig> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" {
            if i + 1 >= args.len() {
                eprintln!("Error: --config requires a file path");
                return None;
            }
            return match SimConfig::from_toml_file(Path::new(&args[i + 1])) {
                Ok(config) => Some(config),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    None
                }
            };
        }
        i += 1;
    }
    Some(SimConfig::default())
}

fn run_sim(args: &[String]) {
    let mut config = match scenario_from_args(args) {
        Some(config) => config,
        None => return,
    };
    let mut out_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--points" | "-p" => match parse_value(args, &mut i, "--points") {
                Some(v) => config.points_to_win = v,
                None => return,
            },
            "--win-pct" | "-w" => match parse_value(args, &mut i, "--win-pct") {
                Some(v) => config.base_win_rate = v,
                None => return,
            },
            "--def-pct" | "-f" => match parse_value(args, &mut i, "--def-pct") {
                Some(v) => config.defense_bonus = v,
                None => return,
            },
            "--sims" | "-s" => match parse_value(args, &mut i, "--sims") {
                Some(v) => config.num_games = v,
                None => return,
            },
            "--seed" => match parse_value(args, &mut i, "--seed") {
                Some(v) => config.seed = Some(v),
                None => return,
            },
            "--debug" | "-d" => config.debug = true,
            "--config" => i += 1, // consumed by scenario_from_args
            "--out" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --out requires a file path");
                    return;
                }
                i += 1;
                out_path = Some(PathBuf::from(&args[i]));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return;
    }

    let rates = config.rates();
    println!();
    println!("Games are played to {}", config.points_to_win);
    println!(
        "First team wins {}% of points while serving; {}% while receiving",
        rates.serving[0], rates.receiving[0]
    );
    println!(
        "Second team wins {}% of points while serving; {}% while receiving",
        rates.serving[1], rates.receiving[1]
    );
    println!("Simulating {} games...", config.num_games);

    let tally = match SimRunner::new(config.clone()).run() {
        Ok(tally) => tally,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!();
    println!("First team win pct: {:.2}%", tally.win_pct(Side::First));
    println!("Second team win pct: {:.2}%", tally.win_pct(Side::Second));

    if let Some(path) = out_path {
        let report = SimReport::new(&config, tally);
        if let Err(e) = report.save(&path) {
            eprintln!("Warning: Failed to save report: {}", e);
        }
    }
}

fn run_sweep(args: &[String]) {
    let mut config = match scenario_from_args(args) {
        Some(config) => config,
        None => return,
    };
    let mut from: i32 = 40;
    let mut to: i32 = 60;
    let mut step: i32 = 5;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--from" => match parse_value(args, &mut i, "--from") {
                Some(v) => from = v,
                None => return,
            },
            "--to" => match parse_value(args, &mut i, "--to") {
                Some(v) => to = v,
                None => return,
            },
            "--step" => match parse_value(args, &mut i, "--step") {
                Some(v) => step = v,
                None => return,
            },
            "--points" | "-p" => match parse_value(args, &mut i, "--points") {
                Some(v) => config.points_to_win = v,
                None => return,
            },
            "--def-pct" | "-f" => match parse_value(args, &mut i, "--def-pct") {
                Some(v) => config.defense_bonus = v,
                None => return,
            },
            "--sims" | "-s" => match parse_value(args, &mut i, "--sims") {
                Some(v) => config.num_games = v,
                None => return,
            },
            "--seed" => match parse_value(args, &mut i, "--seed") {
                Some(v) => config.seed = Some(v),
                None => return,
            },
            "--config" => i += 1,
            "--out" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --out requires a file path");
                    return;
                }
                i += 1;
                out_path = Some(PathBuf::from(&args[i]));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    if step <= 0 {
        eprintln!("Error: --step must be positive");
        return;
    }
    if from > to {
        eprintln!("Error: --from must not exceed --to");
        return;
    }

    println!(
        "=== Sweep: base win rate {}..{} step {} ===",
        from, to, step
    );

    let mut results = SweepResults::new(config.points_to_win, config.defense_bonus, config.num_games);
    let mut base = from;
    while base <= to {
        let mut entry_config = config.clone();
        entry_config.base_win_rate = base;
        if let Err(e) = entry_config.validate() {
            eprintln!("Error: {}", e);
            return;
        }

        println!("--- base win rate {}% ---", base);
        let tally = match SimRunner::new(entry_config).run() {
            Ok(tally) => tally,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        };
        results.add_entry(base, tally);

        base += step;
    }

    println!();
    results.print_report();

    if let Some(path) = out_path {
        if let Err(e) = results.save(&path) {
            eprintln!("Warning: Failed to save report: {}", e);
        }
    }
}

fn show_report(args: &[String]) {
    if args.is_empty() {
        eprintln!("Error: show requires a report file");
        print_usage();
        return;
    }

    match SimReport::load(Path::new(&args[0])) {
        Ok(report) => report.print_report(),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" | "simulate" => run_sim(&args[2..]),
        "sweep" => run_sweep(&args[2..]),
        "show" => show_report(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
