//! Ladder CLI
//!
//! Run the difficulty round robin and track Elo ratings.

use anyhow::{bail, Context, Result};
use ladder::{run_ladder, EloTracker, LadderConfig, LadderResults};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Minimax difficulty ladder");
    println!();
    println!("Usage:");
    println!("  ladder run [--config FILE] [--games N] [--plies N] [--seed S]");
    println!("  ladder leaderboard [--config FILE]");
    println!("  ladder report [--config FILE]");
    println!();
    println!("Examples:");
    println!("  ladder run --games 20 --seed 7");
    println!("  ladder run --config ladder.toml");
}

#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    games: Option<u32>,
    plies: Option<u32>,
    seed: Option<u64>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .with_context(|| format!("{flag} needs a value"))
        };
        match flag.as_str() {
            "--config" | "-c" => options.config = Some(PathBuf::from(value()?)),
            "--games" | "-g" => {
                options.games = Some(value()?.parse().context("--games takes a number")?)
            }
            "--plies" | "-p" => {
                options.plies = Some(value()?.parse().context("--plies takes a number")?)
            }
            "--seed" | "-s" => {
                options.seed = Some(value()?.parse().context("--seed takes a number")?)
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(options)
}

fn load_config(options: &Options) -> Result<LadderConfig> {
    let mut config = match &options.config {
        Some(path) => LadderConfig::load(path)?,
        None => LadderConfig::default(),
    };
    if let Some(games) = options.games {
        config.games_per_pairing = games;
    }
    if let Some(plies) = options.plies {
        config.max_plies = plies;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    config.validate()?;
    Ok(config)
}

fn run(config: &LadderConfig) -> Result<()> {
    println!("=== Ladder: {} ===", config.name);
    println!(
        "Levels: {:?}, games per pairing: {}",
        config.difficulties, config.games_per_pairing
    );
    println!();

    let mut tracker = EloTracker::load_or_default(&config.elo_path)?;
    let results = run_ladder(config, &mut tracker);

    println!("{}", results.generate_report());
    println!("{}", tracker.format_leaderboard());

    results.save(&config.results_path)?;
    tracker.save(&config.elo_path)?;
    Ok(())
}

fn show_leaderboard(config: &LadderConfig) -> Result<()> {
    if !config.elo_path.exists() {
        println!("No ladder data found. Run the ladder first!");
        return Ok(());
    }
    let tracker = EloTracker::load(&config.elo_path)?;
    println!("{}", tracker.format_leaderboard());
    Ok(())
}

fn show_report(config: &LadderConfig) -> Result<()> {
    let results = LadderResults::load(&config.results_path)?;
    println!("{}", results.generate_report());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        "run" | "leaderboard" | "elo" | "report" => {}
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    let options = parse_options(&args[2..])?;
    let config = load_config(&options)?;

    match args[1].as_str() {
        "run" => run(&config),
        "report" => show_report(&config),
        _ => show_leaderboard(&config),
    }
}
