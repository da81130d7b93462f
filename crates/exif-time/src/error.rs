//! Error types for time-of-day pattern matching.

use thiserror::Error;

/// Why a single [`TimeFormat`](crate::TimeFormat) rejected a text.
///
/// [`ExifTime::from_exif`](crate::ExifTime::from_exif) folds all of these
/// into `None`; they exist for tracing and for callers driving
/// [`TimeFormat::parse`](crate::TimeFormat::parse) directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("expected HH:mm:ss at start of {text:?}")]
    MalformedClock { text: String },

    #[error("expected fractional seconds in {text:?}")]
    MissingFraction { text: String },

    #[error("unexpected fractional seconds in {text:?}")]
    UnexpectedFraction { text: String },

    #[error("expected timezone offset in {text:?}")]
    MissingOffset { text: String },

    #[error("unexpected trailing {suffix:?} in {text:?}")]
    UnexpectedSuffix { text: String, suffix: String },

    #[error("invalid timezone offset: {offset:?}")]
    InvalidOffset { offset: String },

    #[error("time component out of range: {text:?}")]
    OutOfRange { text: String },
}
