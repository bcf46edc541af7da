//! Package name and source URL validation.
//!
//! Candidate names and URLs are checked here before they ever reach a
//! store backend. Both validators are pure: checks run in a fixed order
//! and the first failing rule wins, so callers can surface a specific
//! rejection reason.

use std::fmt;

use url::Url;

use crate::error::ValidationError;

/// Maximum accepted length of a package name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// A validated package name.
///
/// Constructed only through [`PackageName::parse`], so holding one is
/// proof the name satisfies every syntax rule. Names are the registry's
/// unique key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    /// Validate a candidate package name.
    ///
    /// Rules, in order:
    /// 1. not empty,
    /// 2. at most [`MAX_NAME_LENGTH`] characters,
    /// 3. only lowercase ASCII letters, digits, `.`, `_`, `-`,
    /// 4. does not start or end with `.`, `_`, or `-`,
    /// 5. no two adjacent characters drawn from `.`, `_`, `-` (mixed
    ///    runs like `a._b` count too).
    pub fn parse(candidate: &str) -> std::result::Result<Self, ValidationError> {
        if candidate.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if candidate.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong);
        }

        if !candidate.bytes().all(is_allowed_byte) {
            return Err(ValidationError::InvalidCharacters);
        }

        if candidate.starts_with(SEPARATORS) || candidate.ends_with(SEPARATORS) {
            return Err(ValidationError::LeadingOrTrailingSeparator);
        }

        // The charset is ASCII-only at this point, so a byte scan is safe.
        let has_adjacent_separators = candidate
            .as_bytes()
            .windows(2)
            .any(|pair| is_separator_byte(pair[0]) && is_separator_byte(pair[1]));
        if has_adjacent_separators {
            return Err(ValidationError::ConsecutiveSeparators);
        }

        Ok(Self(candidate.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the name, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated package source URL.
///
/// Accepts any syntactically valid absolute URI (`git://`, `https://`,
/// ...). The original string is kept as submitted; no normalization and
/// no reachability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageUrl(String);

impl PackageUrl {
    /// Validate a candidate source URL.
    pub fn parse(candidate: &str) -> std::result::Result<Self, ValidationError> {
        Url::parse(candidate).map_err(|_| ValidationError::InvalidUrl)?;
        Ok(Self(candidate.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_allowed_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit() || is_separator_byte(byte)
}

fn is_separator_byte(byte: u8) -> bool {
    matches!(byte, b'.' | b'_' | b'-')
}
