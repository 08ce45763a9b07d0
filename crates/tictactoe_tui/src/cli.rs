//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Display name for the player holding X
    #[arg(long, global = true)]
    pub player_a: Option<String>,

    /// Display name for the player holding O
    #[arg(long, global = true)]
    pub player_b: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI (mouse or keyboard)
    Play,

    /// Apply a list of cell indices to a fresh game and print the result
    Replay {
        /// Cell indices 0-8, separated by commas or spaces
        #[arg(required = true, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_replay_accepts_commas_and_spaces() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "0,3", "1", "4,2", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 3, 1, 4, 2],
                json: true
            })
        );
    }

    #[test]
    fn test_global_player_names() {
        let cli =
            Cli::try_parse_from(["tictactoe", "play", "--player-a", "Ada", "--player-b", "Grace"])
                .unwrap();
        assert_eq!(cli.player_a.as_deref(), Some("Ada"));
        assert_eq!(cli.player_b.as_deref(), Some("Grace"));
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "replay", "-1"]).is_err());
    }
}
