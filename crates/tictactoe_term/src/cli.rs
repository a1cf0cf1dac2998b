//! Command-line interface for the terminal front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one move per line
    Play {
        /// Name of the player holding X (opens the first round)
        #[arg(long)]
        player_x: Option<String>,

        /// Name of the player holding O
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Play a fixed list of cell indices and print the result
    Replay {
        /// Comma-separated cell indices (0-8), e.g. 0,3,1,4,2
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Name of the player holding X
        #[arg(long)]
        player_x: Option<String>,

        /// Name of the player holding O
        #[arg(long)]
        player_o: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "--moves", "0,3,1", "--json"])
            .expect("Valid args");
        match cli.command {
            Command::Replay { moves, json, .. } => {
                assert_eq!(moves, vec![0, 3, 1]);
                assert!(json);
            }
            Command::Play { .. } => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "play",
            "--player-x",
            "alice",
            "--config",
            "game.toml",
        ])
        .expect("Valid args");
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert!(matches!(
            cli.command,
            Command::Play { player_x: Some(ref name), player_o: None } if name == "alice"
        ));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
    }
}
