use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DialectError;

/// Arabic dialect identifier (strongly-typed).
///
/// Every conversion endpoint is one of these five varieties. Modern Standard
/// Arabic is the pivot: the built-in tables map each regional dialect to
/// `Msa` and back.
///
/// # String parsing
///
/// Identifiers are parsed from their exact, case-sensitive spellings via
/// `TryFrom<&str>`, which powers [`DialectConverter::convert`](crate::DialectConverter::convert).
///
/// | Variant     | Name          | Description                       |
/// |------------:|---------------|-----------------------------------|
/// | 1           | `msa`         | Modern Standard Arabic            |
/// | 2           | `iraqi`       | Iraqi colloquial                  |
/// | 3           | `egyptian`    | Egyptian colloquial               |
/// | 4           | `levantine`   | Levantine (Shami) colloquial      |
/// | 5           | `gulf`        | Gulf (Khaleeji) colloquial        |
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Modern Standard Arabic.
    Msa = 1,

    /// Iraqi Arabic.
    Iraqi = 2,

    /// Egyptian Arabic.
    Egyptian = 3,

    /// Levantine Arabic.
    Levantine = 4,

    /// Gulf Arabic.
    Gulf = 5,
}

impl Dialect {
    /// All supported dialects, in their canonical order.
    pub const ALL: [Dialect; 5] = [
        Dialect::Msa,
        Dialect::Iraqi,
        Dialect::Egyptian,
        Dialect::Levantine,
        Dialect::Gulf,
    ];

    /// The regional dialects that have a built-in table to and from MSA.
    pub const REGIONAL: [Dialect; 4] = [
        Dialect::Iraqi,
        Dialect::Egyptian,
        Dialect::Levantine,
        Dialect::Gulf,
    ];

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Msa => "msa",
            Dialect::Iraqi => "iraqi",
            Dialect::Egyptian => "egyptian",
            Dialect::Levantine => "levantine",
            Dialect::Gulf => "gulf",
        }
    }

    /// Identifier strings of [`Dialect::ALL`].
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|d| d.as_str()).collect()
    }
}

impl TryFrom<&str> for Dialect {
    type Error = DialectError;

    /// Parses an exact identifier: `"msa"`, `"iraqi"`, `"egyptian"`, `"levantine"`, `"gulf"`.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "msa" => Ok(Self::Msa),
            "iraqi" => Ok(Self::Iraqi),
            "egyptian" => Ok(Self::Egyptian),
            "levantine" => Ok(Self::Levantine),
            "gulf" => Ok(Self::Gulf),
            _ => Err(DialectError::UnsupportedDialect {
                value: s.to_owned(),
                supported: Self::names(),
            }),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered (from, to) dialect pair identifying one mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DialectPair {
    pub from: Dialect,
    pub to: Dialect,
}

impl DialectPair {
    #[inline]
    pub fn new(from: Dialect, to: Dialect) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for DialectPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_to_{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(Dialect::try_from("gulf").unwrap(), Dialect::Gulf);
        assert!(Dialect::try_from("Gulf").is_err());
        assert!(Dialect::try_from("").is_err());
    }

    #[test]
    fn unsupported_error_lists_valid_names() {
        let err = Dialect::try_from("moroccan").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("moroccan"));
        assert!(message.contains("msa, iraqi, egyptian, levantine, gulf"));
    }

    #[test]
    fn pair_display_uses_table_key() {
        let pair = DialectPair::new(Dialect::Iraqi, Dialect::Msa);
        assert_eq!(pair.to_string(), "iraqi_to_msa");
        assert_eq!(pair.reversed().to_string(), "msa_to_iraqi");
    }
}
