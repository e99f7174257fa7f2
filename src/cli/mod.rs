// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and score their strength", long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// File that saved passwords are appended to
    #[arg(long, short, env = "PASSWORD_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Command to execute (defaults to the interactive prompt)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Value parser for password lengths: a positive integer.
pub fn parse_length(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(format!("password length must be a positive integer, got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_length_accepts_positive() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length(" 7 "), Ok(7));
    }

    #[test]
    fn parse_length_rejects_non_positive() {
        assert!(parse_length("0").is_err());
        assert!(parse_length("-4").is_err());
        assert!(parse_length("ten").is_err());
        assert!(parse_length("").is_err());
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let args = Args::try_parse_from(["pwgen-vault"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
    }

    #[test]
    fn generate_flags_parse() {
        let args = Args::try_parse_from([
            "pwgen-vault", "--json", "generate", "-l", "20", "--no-specials", "--mask", "--save",
            "--file", "out.txt",
        ])
        .unwrap();
        assert!(args.json);
        assert_eq!(args.file, Some(PathBuf::from("out.txt")));
        match args.command {
            Some(CliCommand::Generate { length, no_letters, no_digits, no_specials, mask, save }) => {
                assert_eq!(length, Some(20));
                assert!(!no_letters);
                assert!(!no_digits);
                assert!(no_specials);
                assert!(mask);
                assert!(save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn zero_length_is_rejected_by_clap() {
        assert!(Args::try_parse_from(["pwgen-vault", "generate", "--length", "0"]).is_err());
    }

    #[test]
    fn debug_output_redacts_scored_password() {
        let args = Args::try_parse_from(["pwgen-vault", "score", "hunter2secret"]).unwrap();
        let logged = format!("Command line args: {:?}", args);
        assert!(!logged.contains("hunter2secret"));
        assert!(logged.contains("password_length: 13"));
    }

    #[test]
    fn score_takes_password() {
        let args = Args::try_parse_from(["pwgen-vault", "score", "abc123"]).unwrap();
        match args.command {
            Some(CliCommand::Score { password }) => assert_eq!(password, "abc123"),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
