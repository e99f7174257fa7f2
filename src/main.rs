use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod utils;
mod models;
mod generators;
mod storage;
mod logging;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::{PasswordGenerationOptions, Selection};
use crate::storage::PasswordFile;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    logging::init(&config)?;
    logging::report_warnings(&warnings);
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    run(args, &config)
}

fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let password_file = PasswordFile::new(args.file.clone().unwrap_or_else(|| config.password_file.clone()));

    match args.command {
        None | Some(CliCommand::Interactive) => {
            ctrlc::set_handler(|| {
                log::info!("Ctrl+C received, exiting");
                println!("\nGoodbye!");
                std::process::exit(0);
            })?;

            cli::menu::run_interactive(config.default_password_length, &password_file)
        }
        Some(CliCommand::Generate { length, no_letters, no_digits, no_specials, mask, save }) => {
            let options = PasswordGenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                selection: Selection::new(!no_letters, !no_digits, !no_specials),
            };
            let save_to = if save { Some(&password_file) } else { None };

            cli::menu::run_generate(&options, mask, save_to, args.json)
        }
        Some(CliCommand::Score { password }) => {
            let report = cli::handlers::handle_score(&generators::PasswordGenerator::new(), &password);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", utils::format_score(report.score));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["pwgen-vault"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn no_classes_selected_is_not_fatal() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("passwords.txt");
        let file = file.to_str().unwrap();

        let result = run(
            args(&["generate", "--no-letters", "--no-digits", "--no-specials", "--save", "--file", file]),
            &Config::default(),
        );

        assert!(result.is_ok());
        assert!(!Path::new(file).exists());
    }

    #[test]
    fn generate_saves_to_flag_path_with_config_length() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let config = Config {
            default_password_length: 21,
            ..Config::default()
        };

        run(
            args(&["generate", "--no-specials", "--mask", "--save", "--file", path.to_str().unwrap()]),
            &config,
        )
        .unwrap();

        let saved = PasswordFile::new(&path).read_all().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].chars().count(), 21);
        assert!(saved[0].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generate_falls_back_to_config_file() {
        let dir = tempdir().unwrap();
        let config = Config {
            password_file: dir.path().join("from_config.txt"),
            ..Config::default()
        };

        run(args(&["generate", "-l", "8", "--save"]), &config).unwrap();

        let saved = PasswordFile::new(&config.password_file).read_all().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].chars().count(), 8);
    }

    #[test]
    fn score_subcommand_succeeds() {
        assert!(run(args(&["score", "zsdf123"]), &Config::default()).is_ok());
        assert!(run(args(&["--json", "score", "12"]), &Config::default()).is_ok());
    }
}
