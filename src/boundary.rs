use std::fmt;

/// Warnings that occur when computing a release tag near the edges of the scheme.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release exists yet, the first tag is seeded from the current month
    NoPriorRelease { seed_tag: String },
    /// The local clock is earlier than the month of the latest tag
    ClockBehindLatestTag { latest_tag: String, current: String },
    /// The latest release carries a zero or negative minor, which this tool never produces
    NonPositiveMinor { tag: String },
    /// A listed tag name does not fit the configured tag pattern
    TagMismatchPattern { tag: String, pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorRelease { seed_tag } => {
                write!(
                    f,
                    "No prior release found, starting with initial tag '{}'",
                    seed_tag
                )
            }
            BoundaryWarning::ClockBehindLatestTag {
                latest_tag,
                current,
            } => {
                write!(
                    f,
                    "Current month {} is earlier than latest tag '{}'; the new tag will not sort after it",
                    current, latest_tag
                )
            }
            BoundaryWarning::NonPositiveMinor { tag } => {
                write!(f, "Latest tag '{}' has a minor version below 1", tag)
            }
            BoundaryWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Tag '{}' does not match pattern '{}'", tag, pattern)
            }
        }
    }
}
