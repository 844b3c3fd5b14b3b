//! Arabic text utilities: cleaning, dialect conversion and keyword extraction.
//!
//! The two engines, [`DialectConverter`] and [`KeywordExtractor`], are plain
//! values built from explicit configuration ([`DialectTables`],
//! [`StopWordSet`]) and are safe to share across threads for reading.
//!
//! ```rust
//! use arabic_utils_rs::{DialectConverter, ExtractOptions, KeywordExtractor, ScoringMethod};
//!
//! let converter = DialectConverter::new();
//! let msa = converter.convert("شلونك اليوم؟", "iraqi", "msa").unwrap();
//! assert_eq!(msa, "كيف حالك اليوم؟");
//!
//! let extractor = KeywordExtractor::new();
//! let options = ExtractOptions { limit: 3, method: ScoringMethod::Frequency, ..Default::default() };
//! let keywords = extractor.keyword_extract("الذكاء الاصطناعي يغير مستقبل العالم", &options);
//! assert_eq!(keywords, vec!["الذكاء", "الاصطناعي", "يغير"]);
//! ```

use once_cell::sync::Lazy;

pub mod converter;
pub mod dialect_config;
pub mod dictionary_lib;
pub mod error;
pub mod helpers;
pub mod keyword;
pub mod stop_words;
pub mod text_cleaner;

pub use converter::{ConversionStats, ConvertOptions, DialectConverter};
pub use dialect_config::{Dialect, DialectPair};
pub use dictionary_lib::{DialectTables, ReverseCollision};
pub use error::{DialectError, Result};
pub use helpers::TextDirection;
pub use keyword::{
    ExtractOptions, KeywordExtractor, KeywordTextStats, Keywords, Phrase, PhraseOptions,
    ScoredToken, ScoringMethod,
};
pub use stop_words::StopWordSet;
pub use text_cleaner::{CleanOptions, CleaningStats};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static DEFAULT_CONVERTER: Lazy<DialectConverter> = Lazy::new(DialectConverter::new);
static DEFAULT_EXTRACTOR: Lazy<KeywordExtractor> = Lazy::new(KeywordExtractor::new);

/// Cleans `text` with the default [`CleanOptions`].
pub fn clean(text: &str) -> String {
    text_cleaner::clean(text, &CleanOptions::default())
}

/// Converts `text` with the built-in dialect tables.
pub fn convert(text: &str, from: &str, to: &str) -> Result<String> {
    DEFAULT_CONVERTER.convert(text, from, to)
}

/// Top `limit` keywords of `text` using the default scoring method.
pub fn extract(text: &str, limit: usize) -> Vec<String> {
    let options = ExtractOptions {
        limit,
        ..ExtractOptions::default()
    };
    DEFAULT_EXTRACTOR.keyword_extract(text, &options)
}
