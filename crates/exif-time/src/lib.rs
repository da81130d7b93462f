//! Time-of-day values from image and media metadata.
//!
//! Metadata writers record times in several loosely related encodings,
//! optionally with fractional seconds and a timezone offset. Some emit
//! all-zero placeholders to mean "unknown". This crate parses those
//! encodings into [`ExifTime`], keeps the original text for diagnostics,
//! renders a stable string form, and (with the `serde` feature)
//! serializes to a tagged record.
//!
//! # Quick Start
//!
//! ```rust
//! use exif_time::ExifTime;
//!
//! let time = ExifTime::from_exif("14:05:09+02:00").unwrap();
//! assert_eq!((time.hour(), time.minute(), time.second()), (14, 5, 9));
//! assert_eq!(time.to_string(), "14:05:09");
//!
//! // Placeholders are rejected, midnight is not.
//! assert!(ExifTime::from_exif("0").is_none());
//! assert!(ExifTime::from_exif("00:00:00").is_some());
//! ```
//!
//! # Modules
//!
//! - [`time`]: the [`ExifTime`] value type
//! - [`format`]: accepted textual patterns, in match order
//! - [`error`]: why a single pattern rejected a text
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`ExifTime`] using the
//!   `{"_ctor": "ExifTime", ...}` record layout.
//!
//! # Logging
//!
//! Rejections are reported through `tracing` at `trace` and `debug` level.
//! No subscriber is installed by this crate.

pub mod error;
pub mod format;
#[cfg(feature = "serde")]
mod record;
pub mod time;

pub use error::TimeParseError;
pub use format::TimeFormat;
pub use time::ExifTime;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
