use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_-+=[]{}";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PasswordError {
    #[error("length must be between {MIN_LENGTH} and {MAX_LENGTH}")]
    LengthOutOfRange,
}

/// Draw `length` uniformly random characters from the alphabet implied by the
/// selected character classes. Lowercase letters are always included.
pub fn generate_password(options: &PasswordOptions) -> Result<String, PasswordError> {
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&options.length) {
        return Err(PasswordError::LengthOutOfRange);
    }

    let mut alphabet = String::from(LOWERCASE);
    if options.include_uppercase {
        alphabet.push_str(UPPERCASE);
    }
    if options.include_numbers {
        alphabet.push_str(DIGITS);
    }
    if options.include_symbols {
        alphabet.push_str(SYMBOLS);
    }

    let alphabet: Vec<char> = alphabet.chars().collect();
    let mut rng = rand::thread_rng();
    let password = (0..options.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect();

    Ok(password)
}
