use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use chess_core::{
    move_to_uci, set_position_from_uci, Color, Engine, Game, SearchLimits, SearchResult,
};
use minimax_engine::{ComputerPlayer, Difficulty, MATE_VALUE};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Share of the remaining clock spent on one move when no movetime is given.
const MOVES_TO_GO: u64 = 30;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut session = UciSession::new(ComputerPlayer::default());

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if !session.handle(&line, &mut stdout)? {
            break;
        }
    }
    Ok(())
}

struct UciSession<E> {
    engine: E,
    game: Game,
}

impl<E: Engine> UciSession<E> {
    fn new(engine: E) -> Self {
        Self {
            engine,
            game: Game::new(),
        }
    }

    /// Handles one protocol line. Returns false on `quit`.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(true);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Difficulty type combo default {} var Easy var Medium var Hard",
                    Difficulty::default()
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => match parse_setoption(args) {
                Some((name, value)) => {
                    if self.engine.set_option(&name, &value) {
                        info!(%name, %value, "option set");
                    } else {
                        warn!(%name, %value, "unsupported option");
                    }
                }
                None => warn!(line, "malformed setoption"),
            },
            "ucinewgame" => {
                self.game = Game::new();
                self.engine.new_game();
            }
            "position" => match set_position_from_uci(args) {
                Ok(game) => self.game = game,
                Err(err) => warn!(%err, line, "ignoring position"),
            },
            "go" => {
                let limits = parse_go(args, self.game.turn());
                let result = self.engine.search(&self.game, limits);
                writeln!(
                    out,
                    "info depth {} score {} nodes {}",
                    result.depth,
                    uci_score(&result, self.game.turn()),
                    result.nodes
                )?;
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            "quit" => return Ok(false),
            other => debug!(command = other, "ignoring unknown command"),
        }

        out.flush().context("failed to flush stdout")?;
        Ok(true)
    }
}

/// `name <words..> [value <words..>]`
fn parse_setoption(args: &[&str]) -> Option<(String, String)> {
    let rest = args.strip_prefix(&["name"])?;
    let value_at = rest.iter().position(|&a| a == "value");
    let name = rest[..value_at.unwrap_or(rest.len())].join(" ");
    let value = value_at.map_or(String::new(), |i| rest[i + 1..].join(" "));
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}

fn parse_go(args: &[&str], turn: Color) -> SearchLimits {
    let value = |key: &str| {
        args.iter()
            .position(|&a| a == key)
            .and_then(|i| args.get(i + 1))
            .and_then(|v| v.parse::<u64>().ok())
    };

    if let Some(ms) = value("movetime") {
        return SearchLimits::move_time(Duration::from_millis(ms));
    }

    let (clock, increment) = match turn {
        Color::White => ("wtime", "winc"),
        Color::Black => ("btime", "binc"),
    };
    if let Some(remaining) = value(clock) {
        let budget = remaining / MOVES_TO_GO + value(increment).unwrap_or(0) / 2;
        return SearchLimits::move_time(Duration::from_millis(budget));
    }

    SearchLimits::unlimited()
}

/// `cp <n>` or `mate <moves>` from the side to move's point of view.
fn uci_score(result: &SearchResult, turn: Color) -> String {
    let cp = match turn {
        Color::White => result.score,
        Color::Black => -result.score,
    };
    if cp.abs() <= MATE_VALUE {
        return format!("cp {cp}");
    }
    // mates are tagged with the depth left when they were found
    let plies = i32::from(result.depth) - (cp.abs() - MATE_VALUE);
    let moves = (plies + 1) / 2;
    format!("mate {}", if cp > 0 { moves } else { -moves })
}
