use serde::{Deserialize, Serialize};

use crate::helpers::{self, TextDirection};

/// ASCII punctuation dropped by [`remove_symbols`]; `-` and `/` survive.
const SYMBOLS: &str = "!@#$%^&*()_+=[]{};':\"\\|,.<>?~`";

/// Switches for [`clean`]. Each step runs only when its flag is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CleanOptions {
    pub remove_diacritics: bool,
    pub remove_numbers: bool,
    pub remove_symbols: bool,
    pub remove_english: bool,
    pub normalize_spaces: bool,
    pub add_direction_marks: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            remove_diacritics: true,
            remove_numbers: false,
            remove_symbols: true,
            remove_english: false,
            normalize_spaces: true,
            add_direction_marks: false,
        }
    }
}

pub fn clean(text: &str, options: &CleanOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_owned();
    if options.remove_diacritics {
        cleaned = remove_diacritics(&cleaned);
    }
    if options.remove_symbols {
        cleaned = remove_symbols(&cleaned);
    }
    if options.remove_numbers {
        cleaned = remove_numbers(&cleaned);
    }
    if options.remove_english {
        cleaned = remove_english(&cleaned);
    }
    if options.normalize_spaces {
        cleaned = normalize_spaces(&cleaned);
    }
    if options.add_direction_marks && helpers::is_arabic(&cleaned) {
        cleaned = helpers::wrap_rtl(&cleaned);
    }

    cleaned.trim().to_owned()
}

pub fn remove_diacritics(text: &str) -> String {
    helpers::remove_diacritics(text)
}

/// Keeps Arabic-block characters, whitespace, ASCII digits, `-` and `/`.
/// Latin letters count as symbols here.
pub fn remove_symbols(text: &str) -> String {
    text.chars()
        .filter(|&c| {
            helpers::is_arabic_char(c)
                || c.is_whitespace()
                || c.is_ascii_digit()
                || (c.is_ascii_punctuation() && !SYMBOLS.contains(c))
        })
        .collect()
}

/// Drops ASCII and Arabic-Indic digits.
pub fn remove_numbers(text: &str) -> String {
    text.chars()
        .filter(|c| !(c.is_ascii_digit() || ('٠'..='٩').contains(c)))
        .collect()
}

pub fn remove_english(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_alphabetic()).collect()
}

pub fn normalize_spaces(text: &str) -> String {
    helpers::normalize_spaces(text)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningStats {
    pub original_length: usize,
    pub cleaned_length: usize,
    pub removed_characters: i64,
    /// Share of removed characters, e.g. `"12.50%"`.
    pub compression_ratio: String,
    pub is_arabic: bool,
    pub direction: TextDirection,
}

/// Before/after summary of a cleaning pass. An empty `original` yields a
/// non-finite ratio.
pub fn cleaning_stats(original: &str, cleaned: &str) -> CleaningStats {
    let original_length = original.chars().count();
    let cleaned_length = cleaned.chars().count();
    let removed_characters = original_length as i64 - cleaned_length as i64;

    CleaningStats {
        original_length,
        cleaned_length,
        removed_characters,
        compression_ratio: format!(
            "{:.2}%",
            removed_characters as f64 / original_length as f64 * 100.0
        ),
        is_arabic: helpers::is_arabic(cleaned),
        direction: helpers::detect_direction(cleaned),
    }
}
