//! Textual time-of-day patterns emitted by metadata writers.
//!
//! Patterns are tried in [`TimeFormat::ALL`] order:
//! - `HH:mm:ss.uZZ`: fractional seconds followed by a timezone offset
//! - `HH:mm:ssZZ`: timezone offset
//! - `HH:mm:ss.u`: fractional seconds
//! - `HH:mm:ss`
//!
//! Offsets (`Z`, `+HH:mm`, `-HH:mm`) are validated and then discarded.

use std::fmt;

use chrono::{FixedOffset, NaiveTime};

use crate::error::TimeParseError;

const SECONDS_PER_MINUTE: i32 = 60;
const SECONDS_PER_HOUR: i32 = 60 * SECONDS_PER_MINUTE;

/// Length of the `HH:mm:ss` prefix shared by every pattern.
const CLOCK_LEN: usize = 8;

/// Number of fraction digits kept (millisecond precision).
const MILLISECOND_DIGITS: usize = 3;

/// A textual time-of-day pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// `HH:mm:ss.u` followed by `Z`, `+HH:mm` or `-HH:mm`.
    FractionWithOffset,
    /// `HH:mm:ss` followed by `Z`, `+HH:mm` or `-HH:mm`.
    Offset,
    /// `HH:mm:ss.u` with no offset.
    Fraction,
    /// Bare `HH:mm:ss`.
    Plain,
}

impl TimeFormat {
    /// Every pattern, in the order text is matched against them.
    ///
    /// Offset-bearing patterns come first so that a text carrying an offset
    /// is never read as a plain time with trailing garbage.
    pub const ALL: [TimeFormat; 4] = [
        TimeFormat::FractionWithOffset,
        TimeFormat::Offset,
        TimeFormat::Fraction,
        TimeFormat::Plain,
    ];

    /// Returns the pattern in `HH:mm:ss` notation.
    pub fn pattern(self) -> &'static str {
        match self {
            TimeFormat::FractionWithOffset => "HH:mm:ss.uZZ",
            TimeFormat::Offset => "HH:mm:ssZZ",
            TimeFormat::Fraction => "HH:mm:ss.u",
            TimeFormat::Plain => "HH:mm:ss",
        }
    }

    fn has_fraction(self) -> bool {
        matches!(self, TimeFormat::FractionWithOffset | TimeFormat::Fraction)
    }

    fn has_offset(self) -> bool {
        matches!(self, TimeFormat::FractionWithOffset | TimeFormat::Offset)
    }

    /// Matches `text` (already trimmed) against this pattern.
    ///
    /// The fraction is truncated to milliseconds. Any offset is checked for
    /// well-formedness and dropped; the returned time is the local
    /// wall-clock reading.
    pub fn parse(self, text: &str) -> Result<NaiveTime, TimeParseError> {
        let clock = Clock::split(text)?;

        match (self.has_fraction(), clock.fraction) {
            (true, None) => {
                return Err(TimeParseError::MissingFraction {
                    text: text.to_string(),
                });
            }
            (false, Some(_)) => {
                return Err(TimeParseError::UnexpectedFraction {
                    text: text.to_string(),
                });
            }
            _ => {}
        }

        if self.has_offset() {
            if clock.suffix.is_empty() {
                return Err(TimeParseError::MissingOffset {
                    text: text.to_string(),
                });
            }
            parse_timezone_offset(clock.suffix)?;
        } else if !clock.suffix.is_empty() {
            return Err(TimeParseError::UnexpectedSuffix {
                text: text.to_string(),
                suffix: clock.suffix.to_string(),
            });
        }

        let millis = parse_fractional_millis(clock.fraction);
        NaiveTime::from_hms_milli_opt(clock.hour, clock.minute, clock.second, millis).ok_or_else(
            || TimeParseError::OutOfRange {
                text: text.to_string(),
            },
        )
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// A text split into its `HH:mm:ss` fields, optional fraction digits and
/// whatever follows them.
struct Clock<'a> {
    hour: u32,
    minute: u32,
    second: u32,
    fraction: Option<&'a str>,
    suffix: &'a str,
}

impl<'a> Clock<'a> {
    fn split(text: &'a str) -> Result<Self, TimeParseError> {
        let malformed = || TimeParseError::MalformedClock {
            text: text.to_string(),
        };

        let bytes = text.as_bytes();
        if bytes.len() < CLOCK_LEN || bytes[2] != b':' || bytes[5] != b':' {
            return Err(malformed());
        }

        let hour = two_digits(&bytes[0..2]).ok_or_else(malformed)?;
        let minute = two_digits(&bytes[3..5]).ok_or_else(malformed)?;
        let second = two_digits(&bytes[6..8]).ok_or_else(malformed)?;

        // The prefix is all ASCII, so CLOCK_LEN is a char boundary.
        let rest = &text[CLOCK_LEN..];
        let (fraction, suffix) = match rest.strip_prefix('.') {
            Some(after_dot) => {
                let end = after_dot
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(after_dot.len());
                if end == 0 {
                    return Err(TimeParseError::MissingFraction {
                        text: text.to_string(),
                    });
                }
                (Some(&after_dot[..end]), &after_dot[end..])
            }
            None => (None, rest),
        };

        Ok(Clock {
            hour,
            minute,
            second,
            fraction,
            suffix,
        })
    }
}

/// Parses exactly two ASCII digits.
fn two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Some(u32::from(tens - b'0') * 10 + u32::from(ones - b'0'))
        }
        _ => None,
    }
}

/// Parses a timezone offset (`Z`, `+HH:mm`, `-HH:mm`).
fn parse_timezone_offset(offset: &str) -> Result<FixedOffset, TimeParseError> {
    let invalid = || TimeParseError::InvalidOffset {
        offset: offset.to_string(),
    };

    if offset == "Z" || offset == "z" {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let bytes = offset.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(invalid());
    }

    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(invalid()),
    };

    let hours = two_digits(&bytes[1..3]).ok_or_else(invalid)?;
    let minutes = two_digits(&bytes[4..6]).ok_or_else(invalid)?;
    if minutes > 59 {
        return Err(invalid());
    }

    // Both fields are at most 99, so the casts are lossless.
    let seconds = sign * (hours as i32 * SECONDS_PER_HOUR + minutes as i32 * SECONDS_PER_MINUTE);

    // chrono bounds offsets to strictly less than a day.
    FixedOffset::east_opt(seconds).ok_or_else(invalid)
}

/// Truncates fraction digits to milliseconds, right-padding short runs.
fn parse_fractional_millis(fraction: Option<&str>) -> u32 {
    fraction.map_or(0, |digits| {
        digits
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(MILLISECOND_DIGITS)
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
    })
}
