use std::collections::HashSet;

/// Default Arabic stop words: particles, prepositions, pronouns,
/// demonstratives, question words and common adverbs of time and place.
pub static ARABIC_STOP_WORDS: &[&str] = &[
    // Prepositions and particles
    "في", "من", "إلى", "على", "عن", "مع", "أن",
    // Demonstratives and relatives
    "هذا", "هذه", "ذلك", "تلك", "التي", "الذي",
    // Auxiliaries and pronouns
    "كان", "كانت", "يكون", "تكون", "هو", "هي",
    // Conjunctions, negation, quantifiers
    "أو", "لا", "نعم", "كل", "بعض", "جميع", "كما", "لكن", "غير",
    "سوف", "قد", "لقد", "أم", "أما", "إما",
    // Question words
    "كيف", "متى", "أين", "ماذا", "لماذا", "أي", "أية", "هل",
    "بل", "لم", "لن", "ما",
    // Adverbs of place and time
    "عند", "لدى", "حول", "دون", "ضد", "أثناء", "خلال", "بعد", "قبل",
    "أمام", "خلف", "فوق", "تحت", "يمين", "يسار", "داخل", "خارج", "بين",
    "أمس", "اليوم", "غداً", "هنا", "هناك", "حيث",
];

/// Immutable stop-word predicate.
#[derive(Debug, Clone)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl Default for StopWordSet {
    fn default() -> Self {
        Self::from_words(ARABIC_STOP_WORDS.iter().copied())
    }
}

impl StopWordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
