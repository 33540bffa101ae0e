use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

/// Accented and Latin-adjacent letters with their plain ASCII spelling.
const DEFAULT_TABLE: &[(char, &str)] = &[
    ('Š', "S"), ('š', "s"), ('Đ', "Dj"), ('đ', "dj"), ('Ž', "Z"), ('ž', "z"),
    ('Č', "C"), ('č', "c"), ('Ć', "C"), ('ć', "c"),
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Æ', "A"), ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ñ', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"), ('Ý', "Y"), ('Þ', "B"),
    ('ß', "Ss"),
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"),
    ('æ', "a"), ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"),
    ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ð', "o"), ('ñ', "n"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"), ('ø', "o"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ý', "y"), ('þ', "b"), ('ÿ', "y"),
    ('Ŕ', "R"), ('ŕ', "r"),
];

static SHARED_DEFAULT: Lazy<Arc<Transliterator>> =
    Lazy::new(|| Arc::new(Transliterator::default()));

/// Char-for-string replacement table applied before non-ASCII stripping.
///
/// Characters without an entry are copied unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transliterator {
    table: HashMap<char, String>,
}

impl Transliterator {
    /// The built-in table, built once per process.
    #[must_use]
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&*SHARED_DEFAULT)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add or override a single mapping.
    #[must_use]
    pub fn with_entry(mut self, from: char, to: impl Into<String>) -> Self {
        self.table.insert(from, to.into());
        self
    }

    #[must_use]
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[must_use]
    pub fn transliterate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut buf = [0u8; 4];
        for c in input.chars() {
            let fallback: &str = c.encode_utf8(&mut buf);
            out.push_str(self.lookup(c).unwrap_or(fallback));
        }
        out
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        DEFAULT_TABLE
            .iter()
            .fold(Self::empty(), |t, (from, to)| t.with_entry(*from, *to))
    }
}
