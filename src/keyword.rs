use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::helpers::{self, TextDirection};
use crate::stop_words::StopWordSet;

// Combined input size (bytes) from which batches are extracted in parallel
const PARALLEL_THRESHOLD: usize = 500;

/// How candidate tokens are ranked.
///
/// Parsing is permissive: unknown names fall back to [`ScoringMethod::Frequency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Single-document heuristic: term frequency × position × length.
    #[default]
    TfIdf,
    /// Raw occurrence count.
    Frequency,
    /// Fixed linear blend of length, frequency and position.
    Weighted,
}

impl From<&str> for ScoringMethod {
    fn from(s: &str) -> Self {
        match s {
            "tfidf" => Self::TfIdf,
            "frequency" => Self::Frequency,
            "weighted" => Self::Weighted,
            _ => Self::Frequency,
        }
    }
}

impl From<String> for ScoringMethod {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScoreWeights {
    length: f64,
    frequency: f64,
    position: f64,
}

const WEIGHTS: ScoreWeights = ScoreWeights {
    length: 0.3,
    frequency: 0.4,
    position: 0.3,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractOptions {
    pub limit: usize,
    pub min_length: usize,
    pub include_score: bool,
    pub method: ScoringMethod,
    pub add_direction_marks: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            min_length: 2,
            include_score: false,
            method: ScoringMethod::TfIdf,
            add_direction_marks: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhraseOptions {
    pub n_gram: usize,
    pub limit: usize,
}

impl Default for PhraseOptions {
    fn default() -> Self {
        Self { n_gram: 2, limit: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredToken {
    pub word: String,
    pub score: f64,
    pub frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    pub phrase: String,
    pub frequency: usize,
}

/// Result of [`KeywordExtractor::extract`]: bare words, or words with scores
/// when `include_score` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Keywords {
    Words(Vec<String>),
    Scored(Vec<ScoredToken>),
}

impl Keywords {
    pub fn len(&self) -> usize {
        match self {
            Keywords::Words(words) => words.len(),
            Keywords::Scored(tokens) => tokens.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn words(&self) -> Vec<&str> {
        match self {
            Keywords::Words(words) => words.iter().map(String::as_str).collect(),
            Keywords::Scored(tokens) => tokens.iter().map(|t| t.word.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTextStats {
    pub total_words: usize,
    pub unique_words: usize,
    /// Mean length over the unfiltered tokens; NaN for text without tokens.
    pub avg_word_length: f64,
    pub stop_words_removed: usize,
    pub direction: TextDirection,
    pub is_arabic: bool,
}

// Per distinct token, in first-occurrence order
struct TermStat<'a> {
    word: &'a str,
    frequency: usize,
    position_sum: usize,
}

impl TermStat<'_> {
    #[inline]
    fn avg_position(&self) -> f64 {
        self.position_sum as f64 / self.frequency as f64
    }

    #[inline]
    fn length_weight(&self) -> f64 {
        (self.word.chars().count() as f64 / 10.0).min(1.0)
    }
}

fn term_stats(words: &[String]) -> Vec<TermStat<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<TermStat<'_>> = Vec::new();

    for (position, word) in words.iter().enumerate() {
        match index.get(word.as_str()) {
            Some(&slot) => {
                stats[slot].frequency += 1;
                stats[slot].position_sum += position;
            }
            None => {
                index.insert(word, stats.len());
                stats.push(TermStat {
                    word,
                    frequency: 1,
                    position_sum: position,
                });
            }
        }
    }
    stats
}

/// Ranks the content words of a single Arabic document.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    stop_words: StopWordSet,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(stop_words: StopWordSet) -> Self {
        Self { stop_words }
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn extract(&self, text: &str, options: &ExtractOptions) -> Keywords {
        let scored = self.keyword_weight(text, options);
        if options.include_score {
            Keywords::Scored(scored)
        } else {
            Keywords::Words(scored.into_iter().map(|t| t.word).collect())
        }
    }

    /// Top keywords as bare words.
    pub fn keyword_extract(&self, text: &str, options: &ExtractOptions) -> Vec<String> {
        self.keyword_weight(text, options)
            .into_iter()
            .map(|t| t.word)
            .collect()
    }

    /// Top keywords with their scores and frequencies.
    pub fn keyword_weight(&self, text: &str, options: &ExtractOptions) -> Vec<ScoredToken> {
        if text.is_empty() {
            return Vec::new();
        }

        let words = Self::tokenize(&Self::clean_text(text));
        let filtered = self.filter_words(&words, options.min_length);
        let mut scored = Self::calculate_scores(&filtered, options.method);

        // Stable: equal scores keep first-occurrence order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(options.limit);

        if options.add_direction_marks {
            for token in &mut scored {
                token.word = helpers::wrap_rtl(&token.word);
            }
        }

        debug!(
            tokens = words.len(),
            candidates = filtered.len(),
            returned = scored.len(),
            method = ?options.method,
            "keywords extracted"
        );
        scored
    }

    /// Extracts keywords from every text; output order matches input.
    pub fn extract_batch<S>(&self, texts: &[S], options: &ExtractOptions) -> Vec<Keywords>
    where
        S: AsRef<str> + Sync,
    {
        let total: usize = texts.iter().map(|t| t.as_ref().len()).sum();
        if total >= PARALLEL_THRESHOLD {
            texts
                .par_iter()
                .map(|t| self.extract(t.as_ref(), options))
                .collect()
        } else {
            texts
                .iter()
                .map(|t| self.extract(t.as_ref(), options))
                .collect()
        }
    }

    /// Removes diacritics, replaces everything but Arabic letters and
    /// whitespace with a space, then collapses whitespace.
    pub fn clean_text(text: &str) -> String {
        let stripped: String = text
            .chars()
            .filter(|&c| !helpers::is_diacritic(c))
            .map(|c| {
                if (helpers::is_arabic_char(c) && c.is_alphabetic()) || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        helpers::normalize_spaces(&stripped)
    }

    pub fn tokenize(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }

    /// Keeps tokens of at least `min_length` characters that are not stop
    /// words and contain an Arabic character.
    pub fn filter_words(&self, words: &[String], min_length: usize) -> Vec<String> {
        words
            .iter()
            .filter(|w| {
                w.chars().count() >= min_length
                    && !self.stop_words.contains(w)
                    && helpers::is_arabic(w)
            })
            .cloned()
            .collect()
    }

    fn calculate_scores(words: &[String], method: ScoringMethod) -> Vec<ScoredToken> {
        let total = words.len() as f64;

        term_stats(words)
            .into_iter()
            .map(|stat| {
                let score = match method {
                    ScoringMethod::Frequency => stat.frequency as f64,
                    ScoringMethod::TfIdf => {
                        let tf = stat.frequency as f64 / total;
                        let position_weight = 1.0 - stat.avg_position() / total;
                        tf * position_weight * stat.length_weight() * 100.0
                    }
                    ScoringMethod::Weighted => {
                        let length_score = stat.length_weight() * WEIGHTS.length;
                        let frequency_score = stat.frequency as f64 / total * WEIGHTS.frequency;
                        let position_score =
                            (1.0 - stat.avg_position() / total) * WEIGHTS.position;
                        (length_score + frequency_score + position_score) * 100.0
                    }
                };
                ScoredToken {
                    word: stat.word.to_owned(),
                    score,
                    frequency: stat.frequency,
                }
            })
            .collect()
    }

    /// Most frequent runs of `n_gram` consecutive content words.
    pub fn extract_phrases(&self, text: &str, options: &PhraseOptions) -> Vec<Phrase> {
        if text.is_empty() || options.n_gram == 0 {
            return Vec::new();
        }

        let words = Self::tokenize(&Self::clean_text(text));
        let filtered = self.filter_words(&words, 2);
        let phrases: Vec<String> = filtered
            .windows(options.n_gram)
            .map(|window| window.join(" "))
            .collect();

        let mut counted: Vec<Phrase> = term_stats(&phrases)
            .into_iter()
            .map(|stat| Phrase {
                phrase: stat.word.to_owned(),
                frequency: stat.frequency,
            })
            .collect();
        counted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        counted.truncate(options.limit);
        counted
    }

    /// Token statistics. `total_words` and `avg_word_length` count every
    /// cleaned token; `unique_words` and `stop_words_removed` are measured
    /// against the filtered tokens.
    pub fn text_stats(&self, text: &str) -> KeywordTextStats {
        let words = Self::tokenize(&Self::clean_text(text));
        let filtered = self.filter_words(&words, 1);
        let unique: HashSet<&str> = filtered.iter().map(String::as_str).collect();
        let total_length: usize = words.iter().map(|w| w.chars().count()).sum();

        KeywordTextStats {
            total_words: words.len(),
            unique_words: unique.len(),
            avg_word_length: total_length as f64 / words.len() as f64,
            stop_words_removed: words.len() - filtered.len(),
            direction: helpers::detect_direction(text),
            is_arabic: helpers::is_arabic(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_method_falls_back_to_frequency() {
        assert_eq!(ScoringMethod::from("bm25"), ScoringMethod::Frequency);
        assert_eq!(ScoringMethod::from("weighted"), ScoringMethod::Weighted);
    }

    #[test]
    fn term_stats_keep_first_occurrence_order() {
        let words: Vec<String> = ["ب", "أ", "ب"].iter().map(|s| s.to_string()).collect();
        let stats = term_stats(&words);
        assert_eq!(stats[0].word, "ب");
        assert_eq!(stats[0].frequency, 2);
        assert_eq!(stats[0].avg_position(), 1.0);
        assert_eq!(stats[1].word, "أ");
    }

    #[test]
    fn tfidf_formula() {
        // N = 4; "مكتبة" at 0 and 2; length 5
        let words: Vec<String> = ["مكتبة", "كتاب", "مكتبة", "قلم"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let scored = KeywordExtractor::calculate_scores(&words, ScoringMethod::TfIdf);
        let expected = 0.5 * (1.0 - 1.0 / 4.0) * 0.5 * 100.0;
        assert!((scored[0].score - expected).abs() < 1e-9);
    }

    #[test]
    fn weighted_formula() {
        let words: Vec<String> = ["مكتبة", "كتاب"].iter().map(|s| s.to_string()).collect();
        let scored = KeywordExtractor::calculate_scores(&words, ScoringMethod::Weighted);
        // length 0.5, freq 1/2, avg position 1 of 2
        let expected = (0.3 * 0.4 + 0.4 * 0.5 + 0.3 * 0.5) * 100.0;
        assert!((scored[1].score - expected).abs() < 1e-9);
    }
}
