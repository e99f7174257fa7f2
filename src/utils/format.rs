// src/utils/format.rs
use crate::generators::MAX_SCORE;

// Replace every character with an asterisk
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}

pub fn format_score(score: u8) -> String {
    format!("{} of {}", score, MAX_SCORE)
}

/// Pick the plaintext or the masked form for display.
pub fn display_password(password: &str, masked: bool) -> String {
    if masked {
        mask_password(password)
    } else {
        password.to_string()
    }
}
