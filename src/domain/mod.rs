//! Domain logic - pure calendar versioning rules independent of git operations

pub mod calendar;
pub mod tag;

pub use calendar::YearMonth;
pub use tag::{CalverTag, TagPattern};
