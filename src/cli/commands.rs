// src/cli/commands.rs
use clap::Subcommand;
use std::fmt;

use super::parse_length;

#[derive(Subcommand)]
pub enum CliCommand {
    /// Answer prompts to generate a password
    Interactive,

    /// Generate a password from flags
    Generate {
        /// Password length
        #[arg(long, short, value_parser = parse_length)]
        length: Option<usize>,

        /// Leave out letters
        #[arg(long)]
        no_letters: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out punctuation
        #[arg(long)]
        no_specials: bool,

        /// Show the password as asterisks
        #[arg(long)]
        mask: bool,

        /// Append the password to the password file
        #[arg(long)]
        save: bool,
    },

    /// Score the strength of a password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}

// Hand-written so a password passed to `score` never reaches the logs
impl fmt::Debug for CliCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliCommand::Interactive => write!(f, "Interactive"),
            CliCommand::Generate { length, no_letters, no_digits, no_specials, mask, save } => f
                .debug_struct("Generate")
                .field("length", length)
                .field("no_letters", no_letters)
                .field("no_digits", no_digits)
                .field("no_specials", no_specials)
                .field("mask", mask)
                .field("save", save)
                .finish(),
            CliCommand::Score { password } => f
                .debug_struct("Score")
                .field("password_length", &password.chars().count())
                .finish(),
        }
    }
}
