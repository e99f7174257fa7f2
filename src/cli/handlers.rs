// src/cli/handlers.rs
use serde::Serialize;
use thiserror::Error;

use crate::generators::{describe_score, GeneratorError, PasswordGenerator, MAX_SCORE};
use crate::models::{GenerationReport, PasswordGenerationOptions};
use crate::storage::{PasswordFile, StorageError};
use crate::utils::{display_password, format_score};

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub score: u8,
    pub max_score: u8,
}

// Generate a password, optionally save it, and score it
pub fn handle_generate(
    generator: &PasswordGenerator,
    options: &PasswordGenerationOptions,
    masked: bool,
    save_to: Option<&PasswordFile>,
) -> Result<GenerationReport, HandlerError> {
    let password = generator.generate_password(options)?;

    if let Some(file) = save_to {
        file.append(&password)?;
    }

    let score = generator.analyze_password_strength(&password);
    log::info!("Generated a {}-character password scoring {}", options.length, format_score(score));

    Ok(GenerationReport {
        password: display_password(&password, masked),
        masked,
        length: options.length,
        score,
        max_score: MAX_SCORE,
        saved_to: save_to.map(|file| file.path().display().to_string()),
    })
}

pub fn handle_score(generator: &PasswordGenerator, password: &str) -> ScoreReport {
    ScoreReport {
        score: generator.analyze_password_strength(password),
        max_score: MAX_SCORE,
    }
}

fn password_line(display: &str) -> String {
    format!("Your password: {}", display)
}

fn strength_line(score: u8) -> String {
    format!("Strength: {} ({})", format_score(score), describe_score(score))
}

fn saved_line(display: &str, path: &str) -> String {
    format!("Saved password {} to {}", display, path)
}

/// Console lines for a generation report.
pub fn render_report(report: &GenerationReport) -> Vec<String> {
    let mut lines = vec![password_line(&report.password), strength_line(report.score)];
    if let Some(path) = &report.saved_to {
        lines.push(saved_line(&report.password, path));
    }
    lines
}

// Interactive flow, once the mask answer is known: the password, then its strength
pub fn show_password(generator: &PasswordGenerator, password: &str, masked: bool) -> Vec<String> {
    vec![
        password_line(&display_password(password, masked)),
        strength_line(generator.analyze_password_strength(password)),
    ]
}

/// Append the plaintext and confirm using the display form picked for `show_password`.
pub fn save_password(file: &PasswordFile, password: &str, masked: bool) -> Result<String, StorageError> {
    file.append(password)?;
    Ok(saved_line(
        &display_password(password, masked),
        &file.path().display().to_string(),
    ))
}

pub fn render_error(error: &GeneratorError) -> String {
    format!("Error: {}", error)
}
