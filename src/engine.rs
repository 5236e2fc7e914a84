//! Engine session management.
//!
//! Holds the live game and the configuration used for the next reset, and
//! turns protocol commands into state transitions plus response lines.
//! All mutation goes through `&mut self`, so a driver that feeds clicks and
//! clock ticks from several sources must funnel them through one owner.

use std::io::{self, Write};

use tracing::warn;

use crate::board::{GameState, NodeId, Outcome, Player};
use crate::config::{ConfigError, GameConfig};
use crate::game::{self, Activation, ClockEvent};
use crate::protocol::{Command, Snapshot};

/// Holds the mutable state of the engine between commands.
#[derive(Debug, Clone)]
pub struct Engine {
    pub state: GameState,
    /// Applied on the next reset.
    pub config: GameConfig,
}

impl Engine {
    /// Creates an engine with a fresh, running game.
    pub fn new(config: GameConfig) -> Self {
        Engine {
            state: GameState::new(config),
            config,
        }
    }

    /// Forwards a click on `node` into the turn state machine.
    pub fn node_activated(&mut self, node: NodeId) -> Activation {
        game::handle_node_activated(&mut self.state, node)
    }

    pub fn pause(&mut self) -> bool {
        game::pause(&mut self.state)
    }

    pub fn resume(&mut self) -> bool {
        game::resume(&mut self.state)
    }

    /// Replaces the game with a fresh one built from the current config.
    pub fn reset(&mut self) {
        game::reset(&mut self.state, self.config);
    }

    /// Advances the clock by one second.
    pub fn tick(&mut self) -> ClockEvent {
        game::tick(&mut self.state)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }

    /// Sets an engine option. Changes apply from the next reset.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        self.config.set_option(name, value)
    }

    /// Runs one command, writing any response lines. Returns false on `quit`.
    pub fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        match command {
            Command::IsReady => self.handle_isready(out)?,
            Command::Click { node } => self.handle_click(node, out)?,
            Command::Pause => {
                self.pause();
                writeln!(out, "paused")?;
            }
            Command::Resume => {
                self.resume();
                writeln!(out, "resumed")?;
            }
            Command::Reset => {
                self.reset();
                writeln!(out, "reset")?;
            }
            Command::Tick { seconds } => self.handle_tick(seconds, out)?,
            Command::State => self.handle_state(out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = self.set_option(&name, &value) {
                    warn!(error = %e, "setoption rejected");
                }
            }
            Command::Quit => return Ok(false),
        }
        out.flush()?;
        Ok(true)
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")
    }

    /// Handles `click <node>`: reports what happened, any captures, and then
    /// either the next player's turn or the final result.
    pub fn handle_click<W: Write>(&mut self, node: NodeId, out: &mut W) -> io::Result<()> {
        let was_active = self.state.active;
        let phase_before = self.state.phase;

        let passes_turn = match self.node_activated(node) {
            Activation::Ignored(reason) => {
                writeln!(out, "ignored {}", reason)?;
                false
            }
            Activation::Selected(n) => {
                writeln!(out, "selected {}", n)?;
                false
            }
            Activation::Deselected(n) => {
                writeln!(out, "deselected {}", n)?;
                false
            }
            Activation::SelectionCleared { from, .. } => {
                writeln!(out, "cleared {}", from)?;
                false
            }
            Activation::Placed { player, node, unlocked } => {
                writeln!(out, "placed {} {}", player, node)?;
                if let Some(circuit) = unlocked {
                    writeln!(out, "unlocked {}", circuit)?;
                }
                self.write_scores(out)?;
                true
            }
            Activation::Moved { player, from, to, captured } => {
                writeln!(out, "moved {} {} {}", player, from, to)?;
                for (n, owner) in captured {
                    writeln!(out, "captured {} {}", owner, n)?;
                }
                self.write_scores(out)?;
                true
            }
        };

        if self.state.phase != phase_before {
            writeln!(out, "phase movement")?;
        }
        if was_active && !self.state.active {
            if let Some(outcome) = self.state.outcome {
                write_outcome(out, &outcome)?;
            }
        } else if passes_turn {
            writeln!(out, "turn {}", self.state.current_player)?;
        }
        Ok(())
    }

    /// Writes `score <red> <blue>` as rebuilt after the last board change.
    fn write_scores<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "score {} {}",
            self.state.stats(Player::Red).score,
            self.state.stats(Player::Blue).score
        )
    }

    /// Handles `tick [n]`: advances up to `seconds` ticks, stopping early if
    /// the clock stops, then reports both timers.
    pub fn handle_tick<W: Write>(&mut self, seconds: u32, out: &mut W) -> io::Result<()> {
        for _ in 0..seconds {
            match self.tick() {
                ClockEvent::Idle => break,
                ClockEvent::Ticked => {}
                ClockEvent::TurnExpired { next } => writeln!(out, "turn {}", next)?,
                ClockEvent::GameExpired(outcome) => {
                    write_outcome(out, &outcome)?;
                    break;
                }
            }
        }
        writeln!(out, "time {} {}", self.state.game_timer, self.state.turn_timer)
    }

    /// Handles `state`: one line of JSON with the full snapshot.
    pub fn handle_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = self.snapshot().to_json().map_err(io::Error::other)?;
        writeln!(out, "state {}", json)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(GameConfig::default())
    }
}

/// Writes the terminal notification line.
fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Winner { player, score } => writeln!(out, "gameover winner {} {}", player, score),
        Outcome::Tie { score } => writeln!(out, "gameover tie {}", score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Circuit;
    use crate::protocol::parse_command;

    /// Runs protocol lines through a fresh engine and returns its output.
    fn run(engine: &mut Engine, lines: &[&str]) -> String {
        let mut output = Vec::new();
        for line in lines {
            if let Some(cmd) = parse_command(line) {
                if !engine.dispatch(cmd, &mut output).unwrap() {
                    break;
                }
            }
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn new_engine_runs_fresh_game() {
        let engine = Engine::default();
        assert!(engine.state.active);
        assert_eq!(engine.state.game_timer, 600);
        assert_eq!(engine.config, GameConfig::default());
    }

    #[test]
    fn isready_outputs_readyok() {
        let mut engine = Engine::default();
        assert_eq!(run(&mut engine, &["isready"]).trim(), "readyok");
    }

    #[test]
    fn click_places_and_passes_turn() {
        let mut engine = Engine::default();
        let out = run(&mut engine, &["click outer-0"]);
        assert_eq!(out, "placed red outer-0\nscore 0 0\nturn blue\n");
    }

    #[test]
    fn invalid_click_is_reported_as_ignored() {
        let mut engine = Engine::default();
        let out = run(&mut engine, &["click inner-0"]);
        assert_eq!(out, "ignored inner-0 is not on the unlocked outer circuit\n");
        assert_eq!(engine.state.current_player, Player::Red);
    }

    #[test]
    fn full_placement_reports_unlock_and_phase() {
        let mut engine = Engine::default();
        let out = run(
            &mut engine,
            &[
                "click outer-0", "click outer-3", "click outer-1", "click outer-4",
                "click outer-2", "click outer-5", "click middle-0", "click middle-3",
            ],
        );
        assert!(out.contains("placed blue outer-5\nunlocked middle\nscore 2 2\nturn red\n"));
        assert!(out.ends_with("placed blue middle-3\nscore 2 4\nphase movement\nturn red\n"));
    }

    #[test]
    fn every_board_change_reports_scores() {
        let mut engine = Engine::default();
        let out = run(
            &mut engine,
            &[
                "click outer-0", "click outer-3", "click outer-1", "click outer-4",
                "click outer-2", "click outer-5", "click middle-0", "click middle-3",
                "click middle-0", "click middle-1",
            ],
        );
        let scores = out.lines().filter(|l| l.starts_with("score ")).count();
        assert_eq!(scores, 9);
        // Red gains the outer-1 spoke (2) by moving onto middle-1.
        assert!(out.ends_with("moved red middle-0 middle-1\nscore 4 4\nturn blue\n"));
        assert!(run(&mut engine, &["click inner-5"]).starts_with("ignored"));
    }

    #[test]
    fn quit_stops_dispatch() {
        let mut engine = Engine::default();
        let out = run(&mut engine, &["quit", "isready"]);
        assert!(out.is_empty());
    }

    #[test]
    fn tick_reports_time_and_turn_expiry() {
        let mut engine = Engine::default();
        let out = run(&mut engine, &["tick 60"]);
        assert_eq!(out, "turn blue\ntime 540 60\n");
    }

    #[test]
    fn paused_tick_does_not_advance() {
        let mut engine = Engine::default();
        let out = run(&mut engine, &["pause", "tick 5", "click outer-0", "resume", "tick"]);
        assert_eq!(out, "paused\ntime 600 60\nignored game is paused\nresumed\ntime 599 59\n");
    }

    #[test]
    fn clock_expiry_prints_gameover() {
        let mut engine = Engine::default();
        engine.set_option("GameDuration", "2").unwrap();
        let out = run(&mut engine, &["reset", "tick 5"]);
        assert_eq!(out, "reset\ngameover tie 0\ntime 0 59\n");
        assert!(!engine.state.active);
    }

    #[test]
    fn setoption_applies_on_reset() {
        let mut engine = Engine::default();
        run(&mut engine, &["setoption name TurnDuration value 10"]);
        assert_eq!(engine.state.turn_timer, 60);
        run(&mut engine, &["reset"]);
        assert_eq!(engine.state.turn_timer, 10);
    }

    #[test]
    fn bad_setoption_keeps_config() {
        let mut engine = Engine::default();
        run(&mut engine, &["setoption name Titans value 50", "setoption name Colour value red"]);
        assert_eq!(engine.config, GameConfig::default());
    }

    #[test]
    fn state_outputs_json_snapshot() {
        let mut engine = Engine::default();
        let out = run(&mut engine, &["click outer-2", "state"]);
        let line = out.lines().find(|l| l.starts_with("state ")).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.strip_prefix("state ").unwrap()).unwrap();
        assert_eq!(value["current_player"], "blue");
        assert_eq!(value["nodes"][2]["occupant"], "red");
        assert_eq!(value["players"][0]["titans_remaining"], 3);
    }

    #[test]
    fn reset_after_game_over_starts_again() {
        let mut engine = Engine::default();
        engine.node_activated(crate::board::NodeId::new(Circuit::Outer, 0));
        game::end_game(&mut engine.state, game::EndReason::ClockExpired);
        assert!(!engine.state.active);
        engine.reset();
        assert!(engine.state.active);
        assert!(engine.state.outcome.is_none());
        assert!(engine.state.occupancy.iter().all(|o| o.is_none()));
    }
}
