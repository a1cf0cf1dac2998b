//! Terminal display: interactive play and replay.
//!
//! This layer only reads lines, issues session commands, and prints what
//! the session reports back. All game rules live in `tictactoe_core`.

use crate::config::GameConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{Game, Position, Session, SessionError};
use tracing::{debug, info, instrument, warn};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a marker.
    Move(Position),
    /// Restart with the same players.
    Restart,
    /// Restart with new players.
    NewPlayers,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Input {
    /// Parses a line of input.
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "r" | "restart" => Input::Restart,
            "n" | "new" => Input::NewPlayers,
            "q" | "quit" | "exit" => Input::Quit,
            other => Position::parse(other)
                .map(Input::Move)
                .unwrap_or_else(|| Input::Unknown(line.trim().to_string())),
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    config: &GameConfig,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::new();
    session.start_new_game(config.player_x(), config.player_o());
    info!("Interactive session started");
    print_turn(&session, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            debug!("End of input");
            break;
        }

        match Input::parse(&line) {
            Input::Move(position) => match session.attempt_move(position.to_index()) {
                Ok(outcome) => {
                    if outcome.ends_round() {
                        info!(?outcome, "Round over");
                    }
                    print_turn(&session, out)?;
                }
                Err(SessionError::Move(err)) => {
                    writeln!(out, "Move rejected: {}", err)?;
                }
                Err(SessionError::NoActiveGame) => {
                    writeln!(out, "No game in progress. Type 'n' for new players.")?;
                }
            },
            Input::Restart => {
                match session.restart(true) {
                    Ok(()) => print_turn(&session, out)?,
                    Err(err) => writeln!(out, "{}", err)?,
                }
            }
            Input::NewPlayers => {
                session.restart(false)?;
                let name_x = prompt(&mut input, out, "Name for X: ")?;
                let name_o = prompt(&mut input, out, "Name for O: ")?;
                session.start_new_game(&name_x, &name_o);
                print_turn(&session, out)?;
            }
            Input::Quit => break,
            Input::Unknown(text) => {
                warn!(%text, "Unrecognised input");
                writeln!(
                    out,
                    "Enter a cell (0-8 or a name like 'center'), 'r' to restart, 'n' for new players, 'q' to quit."
                )?;
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    Ok(())
}

/// Plays `moves` in order and prints the final state.
///
/// Rejected moves are reported and skipped.
#[instrument(skip(config, out))]
pub fn replay<W: Write>(config: &GameConfig, moves: &[usize], json: bool, out: &mut W) -> Result<()> {
    let mut session = Session::new();
    session.start_new_game(config.player_x(), config.player_o());

    for &index in moves {
        match session.attempt_move(index) {
            Ok(outcome) if outcome.ends_round() => debug!(?outcome, index, "Round ended"),
            Ok(_) => {}
            Err(err) => {
                warn!(index, %err, "Skipping rejected move");
                if !json {
                    writeln!(out, "Skipped move {}: {}", index, err)?;
                }
            }
        }
    }

    let game = session.game().context("Replay session lost its game")?;
    if json {
        let view = serde_json::to_string_pretty(&game.view()).context("Failed to encode view")?;
        writeln!(out, "{}", view)?;
    } else {
        write_board(game, out)?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut name = String::new();
    input.read_line(&mut name).context("Failed to read name")?;
    Ok(name.trim().to_string())
}

fn print_turn<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    if let Some(game) = session.game() {
        write_board(game, out)?;
    }
    Ok(())
}

fn write_board<W: Write>(game: &Game, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}\n", game.board().render())?;
    match game.outcome() {
        Some(outcome) => {
            writeln!(out, "{}", outcome)?;
            writeln!(out, "Type 'r' to play again or 'n' for new players.")?;
        }
        None => writeln!(
            out,
            "Turn {}: {} ({}) to move",
            game.turn(),
            game.current_player_name(),
            game.current_player_marker()
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn named(x: &str, o: &str) -> GameConfig {
        GameConfig::default().with_names(Some(x.to_string()), Some(o.to_string()))
    }

    fn run(config: &GameConfig, script: &str) -> String {
        let mut out = Vec::new();
        run_interactive(config, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Input::parse("4\n"), Input::Move(Position::Center));
        assert_eq!(Input::parse("Top-Left"), Input::Move(Position::TopLeft));
        assert_eq!(Input::parse("R"), Input::Restart);
        assert_eq!(Input::parse("new"), Input::NewPlayers);
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("12"), Input::Unknown("12".to_string()));
    }

    #[test]
    fn test_interactive_win() {
        let output = run(&named("alice", "bob"), "0\n3\n1\n4\n2\nq\n");
        assert!(output.contains("Turn 1: Alice (X) to move"));
        assert!(output.contains("Turn 2: Bob (O) to move"));
        assert!(output.contains("Alice (X) wins!"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_interactive_rejects_taken_cell() {
        let output = run(&named("alice", "bob"), "4\n4\n");
        assert!(output.contains("Move rejected: Center is already occupied"));
    }

    #[test]
    fn test_interactive_restart_alternates_opener() {
        let output = run(&named("alice", "bob"), "0\n3\n1\n4\n2\nr\n");
        assert!(output.contains("Turn 1: Bob (O) to move"));
    }

    #[test]
    fn test_interactive_new_players() {
        let output = run(&named("alice", "bob"), "4\nn\ncarol\n\n");
        assert!(output.contains("Name for X: "));
        assert!(output.contains("Turn 1: Carol (X) to move"));
    }

    #[test]
    fn test_replay_draw_text() {
        let mut out = Vec::new();
        replay(&named("alice", "bob"), &[0, 2, 1, 3, 5, 4, 6, 7, 8], false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("X|X|O\n-+-+-\nO|O|X\n-+-+-\nX|O|X"));
        assert!(output.contains("It's a draw!"));
    }

    #[test]
    fn test_replay_reports_skipped_moves() {
        let mut out = Vec::new();
        replay(&named("alice", "bob"), &[4, 4, 11], false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Skipped move 4: Center is already occupied"));
        assert!(output.contains("Skipped move 11: Cell index 11 is out of range (must be 0-8)"));
        assert!(output.contains("Turn 2: Bob (O) to move"));
    }

    #[test]
    fn test_replay_json() {
        let mut out = Vec::new();
        replay(&GameConfig::default(), &[0, 3, 1, 4, 2], true, &mut out).unwrap();
        let view: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(view["is_over"], true);
        assert_eq!(view["has_winner"], true);
        assert_eq!(view["current_player_name"], "X");
        assert_eq!(view["turn"], 6);
    }
}
