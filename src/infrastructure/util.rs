use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::application::ports::random::RandomSource;
use crate::application::ports::util::SlugGenerator;
use crate::config::{ConfigError, SlugConfig, check_token};
use crate::domain::slug::SlugFields;
use crate::infrastructure::random::ThreadRandom;
use crate::infrastructure::transliteration::Transliterator;

// "Sam's" becomes "Sams". Only a trailing 's is special-cased.
static POSSESSIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"'s(?-u:\b)").expect("possessive pattern is valid"));
static NON_ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\d]+").expect("separator pattern is valid"));
static NON_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^-A-Za-z0-9_]+").expect("strip pattern is valid"));

/// Smallest and largest six-digit base-36 numbers.
const FALLBACK_LOW: u64 = 36u64.pow(5);
const FALLBACK_HIGH: u64 = 36u64.pow(6) - 1;

/// Turns text into lowercase, hyphenated, ASCII slugs.
///
/// `space` replaces every run of non-alphanumeric characters inside a field,
/// `glue` joins fields and separates the dedup counter.
#[derive(Clone)]
pub struct Slugger {
    space: String,
    glue: String,
    transliterator: Arc<Transliterator>,
    random: Arc<dyn RandomSource>,
}

impl Slugger {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if either token holds a character
    /// outside lowercase ASCII letters, digits, `-` and `_`. Such a glue would
    /// leak into dedup suffixes, which are appended after the final strip.
    pub fn new(space: impl Into<String>, glue: impl Into<String>) -> Result<Self, ConfigError> {
        let (space, glue) = (space.into(), glue.into());
        check_token("SLUG_SPACE", &space)?;
        check_token("SLUG_GLUE", &glue)?;
        Ok(Self::with_tokens(space, glue))
    }

    /// `SlugConfig` is validated on construction, so its tokens are trusted.
    #[must_use]
    pub fn from_config(config: &SlugConfig) -> Self {
        Self::with_tokens(config.space().to_string(), config.glue().to_string())
    }

    fn with_tokens(space: String, glue: String) -> Self {
        Self {
            space,
            glue,
            transliterator: Transliterator::shared_default(),
            random: Arc::new(ThreadRandom),
        }
    }

    #[must_use]
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    #[must_use]
    pub fn with_transliterator(mut self, transliterator: Transliterator) -> Self {
        self.transliterator = Arc::new(transliterator);
        self
    }

    #[must_use]
    pub fn space(&self) -> &str {
        &self.space
    }

    #[must_use]
    pub fn glue(&self) -> &str {
        &self.glue
    }

    fn normalize_field(&self, value: &str) -> String {
        let value = POSSESSIVE.replace_all(value, "s");
        let value = NON_ALPHANUMERIC.replace_all(&value, NoExpand(self.space.as_str()));
        value
            .trim_matches(|c: char| self.space.contains(c))
            .to_string()
    }

    fn fallback(&self) -> String {
        let slug = to_base36(self.random.between(FALLBACK_LOW, FALLBACK_HIGH));
        tracing::debug!(slug = %slug, "no usable characters in input, using random slug");
        slug
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::with_tokens("-".into(), "-".into())
    }
}

impl std::fmt::Debug for Slugger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slugger")
            .field("space", &self.space)
            .field("glue", &self.glue)
            .field("transliterations", &self.transliterator.len())
            .finish_non_exhaustive()
    }
}

impl SlugGenerator for Slugger {
    fn slugify(&self, fields: &SlugFields) -> String {
        let parts: Vec<String> = fields
            .iter()
            .map(|field| self.normalize_field(field))
            .filter(|part| !is_blank(part))
            .collect();
        let joined = parts.join(self.glue.as_str());

        let ascii = self.transliterator.transliterate(&joined);
        let slug = NON_SLUG.replace_all(&ascii, "").to_ascii_lowercase();

        if is_blank(slug.trim()) {
            self.fallback()
        } else {
            slug
        }
    }

    fn suffixed(&self, base: &str, attempt: u64) -> String {
        format!("{base}{}{attempt}", self.glue)
    }
}

/// Empty, or the lone digit zero, which the slug pipeline treats as nothing.
fn is_blank(value: &str) -> bool {
    value.is_empty() || value == "0"
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n > 0 {
        let digit = u32::try_from(n % 36)
            .ok()
            .and_then(|d| char::from_digit(d, 36))
            .unwrap_or('0');
        digits.push(digit);
        n /= 36;
    }
    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_bounds_are_six_digits() {
        assert_eq!(to_base36(FALLBACK_LOW), "100000");
        assert_eq!(to_base36(FALLBACK_HIGH), "zzzzzz");
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn default_sluggers_share_one_table() {
        let a = Slugger::default();
        let b = Slugger::new("_", "-").unwrap();
        assert!(Arc::ptr_eq(&a.transliterator, &b.transliterator));

        let custom = Slugger::default().with_transliterator(Transliterator::empty());
        assert!(!Arc::ptr_eq(&a.transliterator, &custom.transliterator));
    }

    #[test]
    fn tokens_outside_slug_alphabet_are_rejected() {
        assert!(Slugger::new("-", "X").is_err());
        assert!(Slugger::new(".", ".").is_err());
        assert!(Slugger::new("-", "_").is_ok());
        assert!(Slugger::new("", "").is_ok());
    }

    #[test]
    fn field_normalization_collapses_and_trims() {
        let slugger = Slugger::default();
        assert_eq!(slugger.normalize_field("  Hello,   World! "), "Hello-World");
        assert_eq!(slugger.normalize_field("Sam's"), "Sams");
        assert_eq!(slugger.normalize_field("!!!"), "");
    }

    #[test]
    fn possessive_needs_word_boundary() {
        let slugger = Slugger::default();
        assert_eq!(slugger.normalize_field("it'sy"), "it-sy");
        assert_eq!(slugger.normalize_field("don't"), "don-t");
    }

    #[test]
    fn non_latin_letters_survive_field_normalization() {
        let slugger = Slugger::default();
        assert_eq!(slugger.normalize_field("Привет мир"), "Привет-мир");
    }

    #[test]
    fn multi_character_space_trims_any_of_its_characters() {
        let slugger = Slugger::new("_-", "-").unwrap();
        assert_eq!(slugger.normalize_field("-a b-"), "a_-b");
    }
}
