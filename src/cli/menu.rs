// src/cli/menu.rs
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, CustomUserError, InquireError};

use super::handlers::{handle_generate, render_error, render_report, save_password, show_password, HandlerError};
use crate::generators::PasswordGenerator;
use crate::models::{PasswordGenerationOptions, Selection};
use crate::storage::PasswordFile;

fn validate_length(length: &usize) -> Result<Validation, CustomUserError> {
    if *length > 0 {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Password length must be a positive number.".into()))
    }
}

fn ask(question: &str, default: bool) -> Result<bool, InquireError> {
    Confirm::new(question).with_default(default).prompt()
}

fn prompt_options(default_length: usize) -> Result<PasswordGenerationOptions, InquireError> {
    // Re-prompts until a positive integer is entered
    let length = CustomType::<usize>::new("Password length:")
        .with_default(default_length)
        .with_error_message("Please enter a positive whole number.")
        .with_validator(validate_length)
        .prompt()?;

    let letters = ask("Include letters?", true)?;
    let digits = ask("Include digits?", true)?;
    let specials = ask("Include special characters?", true)?;

    Ok(PasswordGenerationOptions {
        length,
        selection: Selection::new(letters, digits, specials),
    })
}

fn run_prompts(default_length: usize, password_file: &PasswordFile) -> Result<(), InquireError> {
    let generator = PasswordGenerator::new();
    let options = prompt_options(default_length)?;

    let password = match generator.generate_password(&options) {
        Ok(password) => password,
        Err(e) => {
            println!("{}", render_error(&e));
            return Ok(());
        }
    };

    let masked = ask("Mask the password on display?", false)?;
    for line in show_password(&generator, &password, masked) {
        println!("{}", line);
    }

    if ask("Save to file?", false)? {
        let confirmation = save_password(password_file, &password, masked)
            .map_err(|e| InquireError::Custom(Box::new(e)))?;
        println!("{}", confirmation);
    }

    Ok(())
}

/// Interactive flow: ask for preferences, generate, show, score, and optionally save.
pub fn run_interactive(default_length: usize, password_file: &PasswordFile) -> anyhow::Result<()> {
    log::debug!("Starting interactive prompt flow");

    match run_prompts(default_length, password_file) {
        Ok(()) => Ok(()),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            log::info!("Interactive prompt cancelled by user");
            println!("\nCancelled. Goodbye!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Non-interactive `generate` subcommand.
pub fn run_generate(
    options: &PasswordGenerationOptions,
    masked: bool,
    save_to: Option<&PasswordFile>,
    json: bool,
) -> anyhow::Result<()> {
    let generator = PasswordGenerator::new();

    match handle_generate(&generator, options, masked, save_to) {
        Ok(report) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in render_report(&report) {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Err(HandlerError::Generator(e)) => {
            // Reported, not fatal
            if json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("{}", render_error(&e));
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
