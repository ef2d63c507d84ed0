//! Error types for level data and configuration.
//!
//! Only data loaded from outside the binary can fail. Broken simulation
//! invariants (such as starting a level index the catalog does not have)
//! panic instead.

use std::fmt;

/// Errors raised while loading level catalogs or settings
#[derive(Debug)]
pub enum Error {
    /// Input was not valid JSON for the expected shape.
    Parse(serde_json::Error),

    /// A catalog must hold at least one level.
    EmptyCatalog,

    /// Level time limits must be positive and finite.
    InvalidTimeLimit {
        /// Zero-based level index.
        level: usize,
        value: f32,
    },

    /// Waypoint coordinates are normalized and must lie in [0, 1] x [0, 1].
    WaypointOutOfBounds {
        /// Zero-based level index.
        level: usize,
        /// Zero-based waypoint index within the level.
        index: usize,
    },

    /// A tuning value is outside the range the simulation supports.
    InvalidTuning {
        /// Name of the offending field (for logging).
        name: &'static str,
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "parse error: {err}"),
            Error::EmptyCatalog => write!(f, "level catalog has no levels"),
            Error::InvalidTimeLimit { level, value } => {
                write!(f, "level {level}: time limit {value} must be positive")
            }
            Error::WaypointOutOfBounds { level, index } => write!(
                f,
                "level {level}: waypoint {index} lies outside the unit square"
            ),
            Error::InvalidTuning {
                name,
                value,
                expected,
            } => write!(f, "tuning `{name}` = {value}, expected {expected}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
