// src/models.rs
use serde::Serialize;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SPECIALS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the fixed character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Letters,
    Digits,
    Specials,
}

impl CharacterClass {
    /// Pool order: letters, digits, specials.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Specials,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Specials => SPECIALS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

// Which character classes are active for a generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub letters: bool,
    pub digits: bool,
    pub specials: bool,
}

impl Selection {
    pub fn new(letters: bool, digits: bool, specials: bool) -> Self {
        Self { letters, digits, specials }
    }

    pub fn none() -> Self {
        Self::new(false, false, false)
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Letters => self.letters,
            CharacterClass::Digits => self.digits,
            CharacterClass::Specials => self.specials,
        }
    }

    pub fn active_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|class| self.includes(*class))
    }

    pub fn is_empty(&self) -> bool {
        !(self.letters || self.digits || self.specials)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub selection: Selection,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            selection: Selection::default(),
        }
    }
}

/// Outcome of a non-interactive `generate` run, printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub password: String,
    pub masked: bool,
    pub length: usize,
    pub score: u8,
    pub max_score: u8,
    pub saved_to: Option<String>,
}
