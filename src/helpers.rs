//! Script and direction utilities shared by the cleaner and both engines.
//!
//! Arabic detection uses the U+0600–U+06FF block; Latin detection uses
//! ASCII letters only.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Right-to-Left Embedding.
pub const RLE: char = '\u{202B}';
/// Left-to-Right Embedding.
pub const LRE: char = '\u{202A}';
/// Pop Directional Formatting.
pub const PDF: char = '\u{202C}';

const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SENTENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?؟։۔]+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline]
pub fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

#[inline]
pub fn is_diacritic(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{0652}' | '\u{0670}' | '\u{0640}')
}

#[inline]
fn is_directional_mark(c: char) -> bool {
    matches!(c, '\u{200E}' | '\u{200F}' | '\u{202A}'..='\u{202E}')
}

/// True if `text` contains at least one Arabic-block character.
pub fn is_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// True if, ignoring whitespace, ASCII digits and ASCII punctuation, every
/// remaining character is Arabic (and at least one remains).
pub fn is_fully_arabic(text: &str) -> bool {
    let mut remaining = text
        .chars()
        .filter(|c| !(c.is_whitespace() || c.is_ascii_digit() || c.is_ascii_punctuation()))
        .peekable();
    remaining.peek().is_some() && remaining.all(is_arabic_char)
}

/// Strips tashkeel and tatweel.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Unifies alef variants, teh marbuta and alef maqsura, removes diacritics
/// and collapses whitespace.
pub fn normalize_arabic(text: &str) -> String {
    let unified: String = text
        .chars()
        .filter(|&c| !is_diacritic(c))
        .map(|c| match c {
            'إ' | 'أ' | 'آ' => 'ا',
            'ة' => 'ه',
            'ى' => 'ي',
            other => other,
        })
        .collect();
    normalize_spaces(&unified)
}

pub fn count_arabic_words(text: &str) -> usize {
    text.split_whitespace().filter(|w| is_arabic(w)).count()
}

/// Arabic-majority (or tied) text is RTL; empty text is LTR.
pub fn detect_direction(text: &str) -> TextDirection {
    if text.is_empty() {
        return TextDirection::Ltr;
    }
    let arabic_chars = text.chars().filter(|&c| is_arabic_char(c)).count();
    let latin_chars = text.chars().filter(char::is_ascii_alphabetic).count();

    if arabic_chars >= latin_chars {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}

/// Collapses every whitespace run (including CR, LF, tab) to one space and trims.
pub fn normalize_spaces(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_owned()
}

/// Splits on Latin and Arabic sentence terminators.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_REGEX
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub arabic_words: usize,
    pub sentences: usize,
    pub direction: TextDirection,
    pub has_arabic: bool,
    pub is_fully_arabic: bool,
}

pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
        arabic_words: count_arabic_words(text),
        sentences: split_sentences(text).len(),
        direction: detect_direction(text),
        has_arabic: is_arabic(text),
        is_fully_arabic: is_fully_arabic(text),
    }
}

pub fn arabic_to_english_numerals(text: &str) -> String {
    text.chars()
        .map(|c| match ARABIC_DIGITS.iter().position(|&d| d == c) {
            Some(n) => char::from(b'0' + n as u8),
            None => c,
        })
        .collect()
}

pub fn english_to_arabic_numerals(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(n) if c.is_ascii_digit() => ARABIC_DIGITS[n as usize],
            _ => c,
        })
        .collect()
}

/// Keeps only Arabic-block characters and whitespace, then normalizes spaces.
pub fn extract_arabic_only(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|&c| is_arabic_char(c) || c.is_whitespace())
        .collect();
    normalize_spaces(&kept)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    pub min_length: usize,
    pub max_length: usize,
    pub require_arabic: bool,
    pub allow_numbers: bool,
    pub allow_english: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 1000,
            require_arabic: true,
            allow_numbers: true,
            allow_english: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<TextStats>,
}

/// Checks length bounds and script content. Error messages are in Arabic.
pub fn validate_arabic_text(text: &str, options: &ValidationOptions) -> ValidationReport {
    if text.is_empty() {
        return ValidationReport {
            is_valid: false,
            errors: vec!["النص مطلوب ويجب أن يكون نص صالح".to_owned()],
            stats: None,
        };
    }

    let mut errors = Vec::new();
    let length = text.chars().count();

    if length < options.min_length {
        errors.push(format!(
            "النص قصير جداً، الحد الأدنى {} حرف",
            options.min_length
        ));
    }
    if length > options.max_length {
        errors.push(format!(
            "النص طويل جداً، الحد الأقصى {} حرف",
            options.max_length
        ));
    }
    if options.require_arabic && !is_arabic(text) {
        errors.push("النص يجب أن يحتوي على أحرف عربية".to_owned());
    }
    if !options.allow_numbers
        && text
            .chars()
            .any(|c| c.is_ascii_digit() || ARABIC_DIGITS.contains(&c))
    {
        errors.push("الأرقام غير مسموحة في النص".to_owned());
    }
    if !options.allow_english && text.chars().any(|c| c.is_ascii_alphabetic()) {
        errors.push("الأحرف الإنجليزية غير مسموحة في النص".to_owned());
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        stats: Some(text_stats(text)),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayOptions {
    pub force_rtl: bool,
    pub add_rtl_marks: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            force_rtl: false,
            add_rtl_marks: true,
        }
    }
}

/// Normalizes spacing and, for RTL text, wraps it with embedding marks.
pub fn format_for_display(text: &str, options: &DisplayOptions) -> String {
    let normalized = normalize_spaces(text);
    let rtl = options.force_rtl || detect_direction(text) == TextDirection::Rtl;

    if options.add_rtl_marks && rtl {
        wrap_rtl(&normalized)
    } else {
        normalized
    }
}

/// `U+202B text U+202C`; empty input stays empty.
pub fn wrap_rtl(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut wrapped = String::with_capacity(text.len() + 6);
    wrapped.push(RLE);
    wrapped.push_str(text);
    wrapped.push(PDF);
    wrapped
}

/// `U+202A text U+202C`; empty input stays empty.
pub fn wrap_ltr(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut wrapped = String::with_capacity(text.len() + 6);
    wrapped.push(LRE);
    wrapped.push_str(text);
    wrapped.push(PDF);
    wrapped
}

/// Removes LRM, RLM and the U+202A–U+202E embedding/override marks.
pub fn clean_directional_marks(text: &str) -> String {
    text.chars().filter(|&c| !is_directional_mark(c)).collect()
}

pub fn auto_format_direction(text: &str) -> String {
    match detect_direction(text) {
        TextDirection::Rtl => wrap_rtl(text),
        TextDirection::Ltr => wrap_ltr(text),
    }
}
