// src/generators/mod.rs
use thiserror::Error;

pub mod password;
pub mod strength;

pub use password::PasswordGenerator;
pub use strength::{analyze_password_strength, describe_score, MAX_SCORE};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("No character classes selected for password generation")]
    InvalidSelection,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
