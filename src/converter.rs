use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dialect_config::{Dialect, DialectPair};
use crate::dictionary_lib::{DialectTables, DictMap};
use crate::error::{DialectError, Result};
use crate::helpers::{self, TextDirection};

// Combined input size (bytes) from which batches are converted in parallel
const PARALLEL_THRESHOLD: usize = 500;

static WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    pub from: Dialect,
    pub to: Dialect,
    pub preserve_direction: bool,
    pub add_direction_marks: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            from: Dialect::Msa,
            to: Dialect::Egyptian,
            preserve_direction: true,
            add_direction_marks: false,
        }
    }
}

impl ConvertOptions {
    pub fn new(from: Dialect, to: Dialect) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }

    pub fn with_direction_marks(mut self, add: bool) -> Self {
        self.add_direction_marks = add;
        self
    }
}

/// Read-only summary of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    pub from: Dialect,
    pub to: Dialect,
    pub original_length: usize,
    pub converted_length: usize,
    pub original_words: usize,
    pub converted_words: usize,
    pub changed_characters: usize,
    /// Changed characters relative to the original length, e.g. `"41.67%"`.
    pub conversion_ratio: String,
    /// Always [`TextDirection::Rtl`].
    pub direction: TextDirection,
}

/// Converts vocabulary between MSA and the regional dialects by whole-word
/// substitution.
pub struct DialectConverter {
    tables: DialectTables,
}

impl Default for DialectConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectConverter {
    /// Converter over the built-in dictionaries.
    pub fn new() -> Self {
        let tables = DialectTables::new().expect("Failed to build built-in dialect tables");
        Self::with_tables(tables)
    }

    pub fn with_tables(tables: DialectTables) -> Self {
        DialectConverter { tables }
    }

    /// Converts `text` between two dialects given by identifier.
    ///
    /// Fails with [`DialectError::UnsupportedDialect`] for unknown identifiers
    /// and [`DialectError::ConversionUnavailable`] when no table exists for
    /// the pair. Empty text converts to an empty string.
    pub fn convert(&self, text: &str, from: &str, to: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let options = ConvertOptions::new(Dialect::try_from(from)?, Dialect::try_from(to)?);
        self.convert_with_options(text, &options)
    }

    pub fn convert_with_options(&self, text: &str, options: &ConvertOptions) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        if options.from == options.to {
            return Ok(if options.add_direction_marks {
                helpers::wrap_rtl(text)
            } else {
                text.to_owned()
            });
        }

        let pair = DialectPair::new(options.from, options.to);
        let dict = self
            .tables
            .get(pair)
            .ok_or(DialectError::ConversionUnavailable {
                from: options.from,
                to: options.to,
            })?;

        debug!(%pair, rules = dict.len(), "converting text");
        let mut converted = Self::apply_conversion(text, dict);

        if options.preserve_direction && options.add_direction_marks && helpers::is_arabic(&converted)
        {
            converted = helpers::wrap_rtl(&converted);
        }

        Ok(converted)
    }

    /// Converts every text with the same options; output order matches input.
    pub fn convert_batch<S>(&self, texts: &[S], options: &ConvertOptions) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let total: usize = texts.iter().map(|t| t.as_ref().len()).sum();
        if total >= PARALLEL_THRESHOLD {
            texts
                .par_iter()
                .map(|t| self.convert_with_options(t.as_ref(), options))
                .collect()
        } else {
            texts
                .iter()
                .map(|t| self.convert_with_options(t.as_ref(), options))
                .collect()
        }
    }

    // Longest keys first, each rule applied to the output of the previous one
    fn apply_conversion(text: &str, dict: &DictMap) -> String {
        dict.by_descending_len()
            .into_iter()
            .fold(text.to_owned(), |acc, entry| entry.apply(&acc))
    }

    /// Inserts or overwrites one entry, creating the (from, to) table if needed.
    ///
    /// Identifiers are validated against the supported dialects. Custom
    /// entries do not update the derived reverse tables.
    pub fn add_custom_mapping(
        &mut self,
        from: &str,
        to: &str,
        source_word: &str,
        target_word: &str,
    ) -> Result<()> {
        let pair = DialectPair::new(Dialect::try_from(from)?, Dialect::try_from(to)?);
        if source_word.trim().is_empty() {
            return Err(DialectError::EmptySourceWord);
        }

        self.tables
            .insert_mapping(pair, source_word.to_owned(), target_word.to_owned())?;
        debug!(%pair, source_word, target_word, "custom mapping added");
        Ok(())
    }

    pub fn supported_dialects() -> [Dialect; 5] {
        Dialect::ALL
    }

    /// One pair per populated table, in registration order.
    pub fn available_conversions(&self) -> Vec<DialectPair> {
        self.tables.pairs().to_vec()
    }

    /// Position-wise summary of what a conversion changed.
    ///
    /// `changed_characters` compares characters index by index, so
    /// insertions that shift alignment are over-counted. An empty `original`
    /// yields a non-finite ratio.
    pub fn conversion_stats(
        original: &str,
        converted: &str,
        from: Dialect,
        to: Dialect,
    ) -> ConversionStats {
        let original_length = original.chars().count();
        let changed_characters = Self::count_changed_characters(original, converted);

        ConversionStats {
            from,
            to,
            original_length,
            converted_length: converted.chars().count(),
            original_words: WHITESPACE_REGEX.split(original).count(),
            converted_words: WHITESPACE_REGEX.split(converted).count(),
            changed_characters,
            conversion_ratio: format!(
                "{:.2}%",
                changed_characters as f64 / original_length as f64 * 100.0
            ),
            direction: TextDirection::Rtl,
        }
    }

    /// Number of indices in `0..max(len)` where the characters differ;
    /// a missing character counts as a difference.
    pub fn count_changed_characters(original: &str, converted: &str) -> usize {
        let mut a = original.chars();
        let mut b = converted.chars();
        let mut changes = 0;

        loop {
            match (a.next(), b.next()) {
                (None, None) => break,
                (Some(x), Some(y)) if x == y => {}
                _ => changes += 1,
            }
        }
        changes
    }

    #[inline]
    pub fn is_arabic_text(text: &str) -> bool {
        helpers::is_arabic(text)
    }

    #[inline]
    pub fn wrap_with_rtl(text: &str) -> String {
        helpers::wrap_rtl(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_characters_is_position_wise() {
        assert_eq!(DialectConverter::count_changed_characters("abc", "abc"), 0);
        assert_eq!(DialectConverter::count_changed_characters("abc", "abd"), 1);
        assert_eq!(DialectConverter::count_changed_characters("abc", "xabc"), 4);
        assert_eq!(DialectConverter::count_changed_characters("", "ab"), 2);
    }

    #[test]
    fn longer_keys_win_over_contained_keys() {
        let converter = DialectConverter::new();
        let input = "كيف حالك";
        let expected_output = "شلونك";
        let actual_output = converter.convert(input, "msa", "iraqi").unwrap();
        assert_eq!(actual_output, expected_output);
    }

    #[test]
    fn stats_word_count_follows_whitespace_split() {
        let stats = DialectConverter::conversion_stats("", "", Dialect::Iraqi, Dialect::Msa);
        assert_eq!(stats.original_words, 1);
        assert_eq!(stats.changed_characters, 0);
    }
}
