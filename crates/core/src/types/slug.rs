//! URL-safe slug type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and hyphens (found {found:?})")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL-safe product identifier.
///
/// Slugs appear in URLs and are immutable once assigned, so parsing is
/// strict: lowercase alphanumerics and interior hyphens only.
///
/// ## Examples
///
/// ```
/// use mercata_core::Slug;
///
/// assert!(Slug::parse("wireless-mouse-2").is_ok());
///
/// assert!(Slug::parse("").is_err());              // empty
/// assert!(Slug::parse("Wireless Mouse").is_err()); // uppercase, space
/// assert!(Slug::parse("-mouse").is_err());         // edge hyphen
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 128;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is longer than 128 characters
    /// - Contains a character outside `[a-z0-9-]`
    /// - Starts or ends with a hyphen
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(found) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(SlugError::InvalidCharacter { found });
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(Slug::parse("a").is_ok());
        assert!(Slug::parse("wireless-mouse").is_ok());
        assert!(Slug::parse("model-3000-pro").is_ok());
    }

    #[test]
    fn test_empty_slug() {
        assert!(matches!(Slug::parse(""), Err(SlugError::Empty)));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            Slug::parse("Wireless"),
            Err(SlugError::InvalidCharacter { found: 'W' })
        ));
        assert!(matches!(
            Slug::parse("a b"),
            Err(SlugError::InvalidCharacter { found: ' ' })
        ));
        assert!(matches!(
            Slug::parse("caf\u{e9}"),
            Err(SlugError::InvalidCharacter { .. })
        ));
    }

    #[test]
    fn test_edge_hyphens() {
        assert!(matches!(Slug::parse("-mouse"), Err(SlugError::EdgeHyphen)));
        assert!(matches!(Slug::parse("mouse-"), Err(SlugError::EdgeHyphen)));
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(Slug::MAX_LENGTH + 1);
        assert!(matches!(
            Slug::parse(&long),
            Err(SlugError::TooLong { max: 128 })
        ));
    }

    #[test]
    fn test_serde_transparent() {
        let slug = Slug::parse("usb-hub").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"usb-hub\"");
    }
}
