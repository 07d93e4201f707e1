use crate::domain::YearMonth;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A calendar release tag: `YY.MM` or `YY.MM.N`
///
/// Ordered by (year, month, minor); a tag without a minor sorts before
/// every tag of the same month that has one. The minor is signed: tags this
/// tool produces start at 1, but zero or negative minors found in the wild
/// are carried through as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalverTag {
    pub year_month: YearMonth,
    pub minor: Option<i64>,
}

impl CalverTag {
    /// The first release of a month, without a minor suffix
    pub fn first_of(year_month: YearMonth) -> Self {
        CalverTag {
            year_month,
            minor: None,
        }
    }

    /// A follow-up release within a month
    pub fn with_minor(year_month: YearMonth, minor: i64) -> Self {
        CalverTag {
            year_month,
            minor: Some(minor),
        }
    }

    /// Parse a tag string (e.g., "24.06" or "24.06.3")
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split('.').collect();

        let (year, month, minor) = match parts.as_slice() {
            [year, month] => (*year, *month, None),
            [year, month, minor] => (*year, *month, Some(*minor)),
            _ => {
                return Err(ReleaseError::malformed(format!(
                    "'{}' - expected YY.MM or YY.MM.N",
                    tag
                )))
            }
        };

        let year_month = YearMonth::from_parts(year, month).map_err(|e| match e {
            ReleaseError::MalformedTag(reason) => {
                ReleaseError::malformed(format!("'{}': {}", tag, reason))
            }
            other => other,
        })?;

        let minor = minor.map(|m| parse_minor(tag, m)).transpose()?;

        Ok(CalverTag { year_month, minor })
    }
}

/// An optionally signed decimal integer (`3`, `+3`, `-1`)
fn parse_minor(tag: &str, minor: &str) -> Result<i64> {
    minor.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ReleaseError::malformed(format!(
            "'{}': minor version {} overflows",
            tag, minor
        )),
        _ => ReleaseError::malformed(format!("'{}': invalid minor version: {}", tag, minor)),
    })
}

impl fmt::Display for CalverTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.minor {
            Some(minor) => write!(f, "{}.{}", self.year_month, minor),
            None => write!(f, "{}", self.year_month),
        }
    }
}

impl FromStr for CalverTag {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        CalverTag::parse(s)
    }
}

/// Tag naming pattern (e.g., "{version}", "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern, rejecting patterns without a `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains("{version}") {
            return Err(ReleaseError::tag(format!(
                "Pattern '{}' must contain {{version}} placeholder",
                pattern
            )));
        }
        Ok(TagPattern { pattern })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="24.06.1" -> "v24.06.1"
    pub fn format(&self, version: &CalverTag) -> String {
        self.pattern.replace("{version}", &version.to_string())
    }

    /// Extract the version part of a tag name, if the name fits the pattern
    pub fn strip<'a>(&self, tag: &'a str) -> Option<&'a str> {
        let (prefix, suffix) = self.pattern.split_once("{version}")?;
        tag.strip_prefix(prefix)?.strip_suffix(suffix)
    }

    /// Validate if a tag name is a calendar release under this pattern
    pub fn matches(&self, tag: &str) -> Result<bool> {
        // Escape everything, then swap the placeholder for the YY.MM[.N] shape
        let escaped = regex::escape(&self.pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\d{2}\.\d{2}(?:\.[+-]?\d+)?)");

        let re = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| ReleaseError::tag(format!("Invalid pattern: {}", e)))?;
        Ok(re.is_match(tag))
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: "{version}".to_string(),
        }
    }
}
