// src/generators/strength.rs
use crate::models::CharacterClass;

pub const MAX_SCORE: u8 = 4;

// Analyze password strength on a 0-4 scale
//
// One point for reaching four characters, plus one point for each of:
// lowercase, uppercase, digit, special. Capped at MAX_SCORE.
pub fn analyze_password_strength(password: &str) -> u8 {
    let length_score = (password.chars().count() / 4).min(1) as u8;

    let checks = [
        password.chars().any(char::is_lowercase),
        password.chars().any(char::is_uppercase),
        password.chars().any(char::is_numeric),
        password.chars().any(|c| CharacterClass::Specials.contains(c)),
    ];
    let variety_score = checks.iter().filter(|hit| **hit).count() as u8;

    (length_score + variety_score).min(MAX_SCORE)
}

pub fn describe_score(score: u8) -> &'static str {
    match score {
        0 => "very weak",
        1 => "weak",
        2 => "fair",
        3 => "good",
        _ => "strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_scores() {
        assert_eq!(analyze_password_strength("zsdf123A@!pokj"), 4);
        assert_eq!(analyze_password_strength("zsdf123"), 3);
        assert_eq!(analyze_password_strength("123456"), 2);
        assert_eq!(analyze_password_strength("12"), 1);
    }

    #[test]
    fn empty_password_scores_zero() {
        assert_eq!(analyze_password_strength(""), 0);
    }

    #[test]
    fn length_term_saturates_at_four_chars() {
        assert_eq!(analyze_password_strength("abc"), 1);
        assert_eq!(analyze_password_strength("abcd"), 2);
        assert_eq!(analyze_password_strength(&"a".repeat(400)), 2);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // three two-byte characters stay under the length threshold
        assert_eq!(analyze_password_strength("ééé"), 1);
    }

    #[test]
    fn non_ascii_digits_count_as_digits() {
        assert_eq!(analyze_password_strength("٣"), 1);
        assert_eq!(analyze_password_strength("١٢٣٤"), 2);
    }

    #[test]
    fn only_fixed_specials_count() {
        assert_eq!(analyze_password_strength("~"), 1);
        assert_eq!(analyze_password_strength(" "), 0);
        assert_eq!(analyze_password_strength("§"), 0);
    }

    #[test]
    fn total_is_capped() {
        assert_eq!(analyze_password_strength("aA1!"), MAX_SCORE);
        assert_eq!(analyze_password_strength("aA1!aA1!aA1!"), MAX_SCORE);
    }

    #[test]
    fn labels() {
        assert_eq!(describe_score(0), "very weak");
        assert_eq!(describe_score(2), "fair");
        assert_eq!(describe_score(MAX_SCORE), "strong");
    }
}
