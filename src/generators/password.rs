// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

use super::{GeneratorError, Result};
use crate::models::{PasswordGenerationOptions, Selection};

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        generate_password(options.length, &options.selection)
    }

    pub fn analyze_password_strength(&self, password: &str) -> u8 {
        super::analyze_password_strength(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenation of the active classes' characters, letters first, then digits, then specials.
pub fn character_pool(selection: &Selection) -> Vec<char> {
    selection
        .active_classes()
        .flat_map(|class| class.chars().chars())
        .collect()
}

// Generate a random password from the selected character classes
pub fn generate_password(length: usize, selection: &Selection) -> Result<String> {
    let pool = character_pool(selection);
    if pool.is_empty() {
        log::warn!("Password generation requested with no character classes selected");
        return Err(GeneratorError::InvalidSelection);
    }

    // Each character is an independent uniform draw from the OS entropy source
    let dist = Uniform::from(0..pool.len());
    let password: String = (0..length)
        .map(|_| pool[dist.sample(&mut OsRng)])
        .collect();

    log::debug!(
        "Generated password of length {} from a pool of {} characters",
        length,
        pool.len()
    );

    Ok(password)
}
