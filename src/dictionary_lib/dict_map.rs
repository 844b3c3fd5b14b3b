use std::collections::HashMap;

use regex::{NoExpand, Regex};

/// One source → replacement entry with its pre-compiled whole-word matcher.
#[derive(Debug, Clone)]
pub struct DictEntry {
    pub source: String,
    pub target: String,
    pub len_chars: u16,
    pattern: Regex,
}

impl DictEntry {
    /// Compiles the whole-word matcher for `source`.
    pub fn new(source: String, target: String) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&source)))?;
        let len_chars = source.chars().count().min(u16::MAX as usize) as u16;
        Ok(Self {
            source,
            target,
            len_chars,
            pattern,
        })
    }

    /// Replaces every whole-word, case-insensitive occurrence of `source` in `text`.
    #[inline]
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(&self.target))
            .into_owned()
    }
}

/// Insertion-ordered word-substitution table for one dialect pair.
///
/// Overwriting an existing key keeps its original position, so table order
/// stays stable for tie-breaking between keys of equal length.
#[derive(Debug, Clone, Default)]
pub struct DictMap {
    entries: Vec<DictEntry>,
    index: HashMap<String, usize>,
}

impl DictMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (k,v); an existing key keeps its slot and takes the new value.
    pub fn insert(&mut self, key: String, val: String) -> Result<(), regex::Error> {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].target = val;
            return Ok(());
        }
        self.push_entry(DictEntry::new(key, val)?);
        Ok(())
    }

    fn push_entry(&mut self, entry: DictEntry) {
        self.index.insert(entry.source.clone(), self.entries.len());
        self.entries.push(entry);
    }

    #[inline]
    pub fn get(&self, from: &str) -> Option<&str> {
        self.index
            .get(from)
            .map(|&slot| self.entries[slot].target.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.source.as_str(), e.target.as_str()))
    }

    /// Entries ordered longest source first; ties keep insertion order.
    pub fn by_descending_len(&self) -> Vec<&DictEntry> {
        let mut sorted: Vec<&DictEntry> = self.entries.iter().collect();
        // `sort_by` is stable
        sorted.sort_by(|a, b| b.len_chars.cmp(&a.len_chars));
        sorted
    }
}
