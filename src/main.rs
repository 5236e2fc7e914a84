//! Titans -- a three-circuit placement and movement game engine.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr. With `--realtime` a background ticker feeds one clock
//! tick per second into the same queue as stdin commands, so ticks and clicks
//! are applied one at a time by the main loop. A reset rearms the ticker and
//! ticks stamped for the previous game are dropped.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use titans::config::{load_config, GameConfig};
use titans::engine::Engine;
use titans::protocol::{parse_command, Command};
use titans::ticker::Ticker;

#[derive(Debug, Parser)]
#[command(name = "titans", about = "Three-circuit Titans game engine speaking a line protocol")]
struct Args {
    /// JSON file with game_duration_secs, turn_duration_secs and titans_per_player.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick the game clock once per second instead of waiting for `tick` commands.
    #[arg(long)]
    realtime: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Work items for the main loop.
enum Input {
    Line(String),
    /// A realtime tick stamped with the ticker generation it was sent under.
    Tick(u64),
    Eof,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(c) => c,
            Err(e) => {
                error!(error = %e, "could not load config");
                std::process::exit(2);
            }
        },
        None => GameConfig::default(),
    };
    info!(?config, realtime = args.realtime, "starting");

    let (tx, rx) = mpsc::channel::<Input>();
    spawn_stdin_reader(tx.clone());
    let mut ticker = args
        .realtime
        .then(|| Ticker::spawn(Duration::from_secs(1), move |g| tx.send(Input::Tick(g)).is_ok()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new(config);

    for input in rx {
        let cmd = match input {
            Input::Line(line) => match parse_command(&line) {
                Some(c) => c,
                None => continue,
            },
            Input::Tick(stamp) => match &ticker {
                Some(t) if t.is_current(stamp) => Command::Tick { seconds: 1 },
                _ => {
                    debug!(stamp, "dropping stale tick");
                    continue;
                }
            },
            Input::Eof => break,
        };

        if matches!(cmd, Command::Reset) {
            if let Some(t) = ticker.as_mut() {
                t.rearm();
            }
        }

        match engine.dispatch(cmd, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!(error = %e, "failed to write response");
                break;
            }
        }
    }
}

/// Forwards stdin lines to the main loop, then signals end of input.
fn spawn_stdin_reader(tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            if tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = tx.send(Input::Eof);
    });
}
