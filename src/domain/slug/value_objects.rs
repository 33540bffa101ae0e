use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated slug: non-empty, lowercase ASCII letters, digits, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for an empty value or one with
    /// characters outside lowercase ASCII letters, digits, `-` and `_`.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if let Some(bad) = value.chars().find(|c| !is_slug_char(*c)) {
            return Err(DomainError::Validation(format!(
                "slug contains invalid character {bad:?}"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The fields contributing to a slug, in order. A single string is a
/// one-field list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugFields(Vec<String>);

impl SlugFields {
    #[must_use]
    pub fn single(value: impl Into<String>) -> Self {
        Self(vec![value.into()])
    }

    #[must_use]
    pub fn push(mut self, value: impl Into<String>) -> Self {
        self.0.push(value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SlugFields {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<String> for SlugFields {
    fn from(value: String) -> Self {
        Self::single(value)
    }
}

impl From<&String> for SlugFields {
    fn from(value: &String) -> Self {
        Self::single(value.as_str())
    }
}

impl From<Vec<String>> for SlugFields {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for SlugFields {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for SlugFields {
    fn from(values: [&str; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SlugFields {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
