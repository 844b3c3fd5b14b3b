use std::collections::HashMap;
use std::fs;
use std::path::Path;

use include_flate::flate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::dialect_config::{Dialect, DialectPair};
use crate::error::Result;

pub mod dict_map;
pub use dict_map::{DictEntry, DictMap};

flate!(static IRAQI_TO_MSA: str from "src/dictionary_lib/dicts/IraqiToMsa.txt");
flate!(static EGYPTIAN_TO_MSA: str from "src/dictionary_lib/dicts/EgyptianToMsa.txt");
flate!(static LEVANTINE_TO_MSA: str from "src/dictionary_lib/dicts/LevantineToMsa.txt");
flate!(static GULF_TO_MSA: str from "src/dictionary_lib/dicts/GulfToMsa.txt");

/// File name of the forward (dialect → MSA) table for `dialect`.
pub fn dict_file_name(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Iraqi => "IraqiToMsa.txt",
        Dialect::Egyptian => "EgyptianToMsa.txt",
        Dialect::Levantine => "LevantineToMsa.txt",
        Dialect::Gulf => "GulfToMsa.txt",
        Dialect::Msa => "MsaToMsa.txt",
    }
}

/// An MSA word that several dialect words map onto; the reverse table keeps
/// only the last of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseCollision {
    pub pair: DialectPair,
    pub msa_word: String,
    pub kept: String,
    pub dropped: Vec<String>,
}

/// All word-substitution tables, keyed by dialect pair.
///
/// Built once and handed to [`DialectConverter`](crate::DialectConverter).
/// Pair order is preserved: forward tables, derived reverse tables, then any
/// custom pairs in creation order.
#[derive(Debug, Clone, Default)]
pub struct DialectTables {
    tables: HashMap<DialectPair, DictMap>,
    order: Vec<DialectPair>,
}

impl DialectTables {
    /// Built-in tables from the embedded dictionaries.
    pub fn new() -> Result<Self> {
        let forward = [
            (Dialect::Iraqi, &**IRAQI_TO_MSA),
            (Dialect::Egyptian, &**EGYPTIAN_TO_MSA),
            (Dialect::Levantine, &**LEVANTINE_TO_MSA),
            (Dialect::Gulf, &**GULF_TO_MSA),
        ]
        .into_iter()
        .map(|(dialect, content)| Ok((dialect, Self::load_dictionary_from_str(content)?)))
        .collect::<Result<Vec<_>>>()?;

        Self::from_forward(forward)
    }

    /// Tables loaded from `<dir>/IraqiToMsa.txt`, `<dir>/EgyptianToMsa.txt`, ...
    pub fn from_dicts<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let forward = Dialect::REGIONAL
            .into_iter()
            .map(|dialect| {
                let path = dir.join(dict_file_name(dialect));
                Ok((dialect, Self::load_dictionary_from_path(path)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_forward(forward)
    }

    /// Registers each forward (dialect → MSA) table and derives its inverse.
    ///
    /// Inversion is last-write-wins: when two dialect words share an MSA
    /// translation, only the later one survives in the reverse table. Use
    /// [`DialectTables::reverse_collisions`] to list such cases.
    pub fn from_forward(forward: Vec<(Dialect, DictMap)>) -> Result<Self> {
        let mut tables = DialectTables::default();
        let mut reversed = Vec::with_capacity(forward.len());

        for (dialect, dict) in forward {
            let mut inverse = DictMap::new();
            for (dialect_word, msa_word) in dict.iter() {
                inverse.insert(msa_word.to_owned(), dialect_word.to_owned())?;
            }
            let pair = DialectPair::new(dialect, Dialect::Msa);
            reversed.push((pair.reversed(), inverse));
            tables.insert_table(pair, dict);
        }
        for (pair, inverse) in reversed {
            tables.insert_table(pair, inverse);
        }

        for collision in tables.reverse_collisions() {
            warn!(
                pair = %collision.pair,
                msa_word = %collision.msa_word,
                kept = %collision.kept,
                "reverse mapping collision, earlier entries dropped"
            );
        }
        debug!(pairs = tables.order.len(), "dialect tables ready");
        Ok(tables)
    }

    fn insert_table(&mut self, pair: DialectPair, dict: DictMap) {
        if self.tables.insert(pair, dict).is_none() {
            self.order.push(pair);
        }
    }

    #[inline]
    pub fn get(&self, pair: DialectPair) -> Option<&DictMap> {
        self.tables.get(&pair)
    }

    /// Inserts one entry into the table for `pair`, creating the table if
    /// absent. A new pair is registered only once its first entry compiled.
    pub fn insert_mapping(
        &mut self,
        pair: DialectPair,
        source: String,
        target: String,
    ) -> Result<()> {
        if let Some(dict) = self.tables.get_mut(&pair) {
            dict.insert(source, target)?;
            return Ok(());
        }

        let mut dict = DictMap::new();
        dict.insert(source, target)?;
        self.insert_table(pair, dict);
        Ok(())
    }

    /// Populated pairs in registration order.
    pub fn pairs(&self) -> &[DialectPair] {
        &self.order
    }

    /// Every MSA word claimed by more than one forward entry.
    pub fn reverse_collisions(&self) -> Vec<ReverseCollision> {
        let mut collisions = Vec::new();

        for dialect in Dialect::REGIONAL {
            let pair = DialectPair::new(dialect, Dialect::Msa);
            let Some(forward) = self.get(pair) else {
                continue;
            };
            let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
            for (dialect_word, msa_word) in forward.iter() {
                match groups.iter_mut().find(|(msa, _)| *msa == msa_word) {
                    Some((_, sources)) => sources.push(dialect_word),
                    None => groups.push((msa_word, vec![dialect_word])),
                }
            }
            for (msa_word, mut sources) in groups {
                if sources.len() < 2 {
                    continue;
                }
                let kept = sources.pop().unwrap_or_default().to_owned();
                collisions.push(ReverseCollision {
                    pair: pair.reversed(),
                    msa_word: msa_word.to_owned(),
                    kept,
                    dropped: sources.into_iter().map(str::to_owned).collect(),
                });
            }
        }

        collisions
    }

    fn load_dictionary_from_path<P>(filename: P) -> Result<DictMap>
    where
        P: AsRef<Path>,
    {
        let content = fs::read_to_string(filename)?;
        Self::load_dictionary_from_str(&content)
    }

    /// Parses `source<TAB>target` lines. Blank lines and `#` comments are ignored.
    pub fn load_dictionary_from_str(dictionary_content: &str) -> Result<DictMap> {
        let mut dictionary = DictMap::new();

        for line in dictionary_content.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('\t') {
                Some((phrase, translation))
                    if !phrase.trim().is_empty() && !translation.trim().is_empty() =>
                {
                    dictionary.insert(phrase.trim().to_owned(), translation.trim().to_owned())?;
                }
                _ => warn!(line, "invalid dictionary line format"),
            }
        }

        Ok(dictionary)
    }
}
