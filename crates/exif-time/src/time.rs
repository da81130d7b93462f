//! Time-of-day values as recorded in image and media metadata.
//!
//! Metadata times may omit a timezone offset and may carry fractional seconds
//! at any precision. Some writers emit all-zero placeholders (`"0"`, `"00"`)
//! to mean "time unknown"; those are rejected rather than read as midnight.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{NaiveTime, Timelike};

use crate::format::TimeFormat;

const NANOSECONDS_PER_MILLISECOND: u32 = 1_000_000;
const NANOSECONDS_PER_SECOND: u32 = 1_000 * NANOSECONDS_PER_MILLISECOND;

/// A time of day without a timezone offset.
///
/// Values are immutable. `raw_value` keeps the trimmed text a value was
/// parsed from; it is informational and does not take part in equality or
/// hashing.
#[derive(Debug, Clone)]
pub struct ExifTime {
    hour: u32,
    minute: u32,
    second: u32,
    millisecond: Option<u32>,
    raw_value: Option<String>,
}

impl ExifTime {
    /// Creates a time from its fields without validation.
    ///
    /// Intended for trusted input such as deserialized records. Use
    /// [`ExifTime::from_exif`] for text of unknown origin.
    pub fn new(
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: Option<u32>,
        raw_value: Option<String>,
    ) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
            raw_value,
        }
    }

    /// Parses a metadata time string.
    ///
    /// Accepts, in priority order, `HH:mm:ss.uZZ`, `HH:mm:ssZZ`,
    /// `HH:mm:ss.u` and `HH:mm:ss` (see [`TimeFormat`]). Surrounding
    /// whitespace is ignored. Returns `None` for blank text, for runs of
    /// `'0'` characters, and for text matching no pattern.
    ///
    /// ```rust
    /// use exif_time::ExifTime;
    ///
    /// let time = ExifTime::from_exif(" 23:59:59.500Z ").unwrap();
    /// assert_eq!(time.millisecond(), Some(500));
    /// assert_eq!(time.raw_value(), Some("23:59:59.500Z"));
    /// assert_eq!(time.to_string(), "23:59:59.500");
    ///
    /// assert!(ExifTime::from_exif("00").is_none());
    /// ```
    pub fn from_exif(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.bytes().all(|b| b == b'0') {
            tracing::trace!(text, "rejecting blank or zero placeholder time");
            return None;
        }

        let parsed = TimeFormat::ALL
            .iter()
            .find_map(|format| match format.parse(text) {
                Ok(time) => Some(time),
                Err(err) => {
                    tracing::trace!(text, %format, %err, "time pattern did not match");
                    None
                }
            });

        if parsed.is_none() {
            tracing::debug!(text, "unrecognized metadata time");
        }
        Self::from_date_time(parsed, Some(text))
    }

    /// Builds a time from any chrono value with a time of day.
    ///
    /// Returns `None` when `dt` is `None` (for example a failed upstream
    /// parse) or when it holds a leap second, which this type does not
    /// model. The millisecond is always present in the result.
    pub fn from_date_time<T: Timelike>(dt: Option<T>, raw_value: Option<&str>) -> Option<Self> {
        let dt = dt?;
        let nanosecond = dt.nanosecond();
        if nanosecond >= NANOSECONDS_PER_SECOND {
            tracing::trace!(raw_value, "rejecting leap second");
            return None;
        }

        Some(Self::new(
            dt.hour(),
            dt.minute(),
            dt.second(),
            Some(nanosecond / NANOSECONDS_PER_MILLISECOND),
            raw_value.map(str::to_string),
        ))
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Sub-second part in milliseconds, if the source carried one.
    pub fn millisecond(&self) -> Option<u32> {
        self.millisecond
    }

    /// Alias for [`ExifTime::millisecond`].
    pub fn millis(&self) -> Option<u32> {
        self.millisecond
    }

    /// The trimmed text this value was parsed from.
    pub fn raw_value(&self) -> Option<&str> {
        self.raw_value.as_deref()
    }

    /// Converts to a chrono time, or `None` if the fields are out of range
    /// (possible only for values built with [`ExifTime::new`]).
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            self.hour,
            self.minute,
            self.second,
            self.millisecond.unwrap_or(0),
        )
    }

    /// Same as the `Display` rendering; times carry no offset to add.
    pub fn to_iso_string(&self) -> String {
        self.to_string()
    }

    /// Same as the `Display` rendering.
    pub fn to_exif_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExifTime {
    /// Writes `HH:MM:SS`, plus `.mmm` when the millisecond is non-zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        match self.millisecond {
            Some(ms) if ms != 0 => write!(f, ".{:03}", ms),
            _ => Ok(()),
        }
    }
}

impl PartialEq for ExifTime {
    fn eq(&self, other: &Self) -> bool {
        self.hour == other.hour
            && self.minute == other.minute
            && self.second == other.second
            && self.millisecond == other.millisecond
    }
}

impl Eq for ExifTime {}

impl Hash for ExifTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hour.hash(state);
        self.minute.hash(state);
        self.second.hash(state);
        self.millisecond.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate};

    use super::*;

    fn fields(time: &ExifTime) -> (u32, u32, u32, Option<u32>) {
        (time.hour(), time.minute(), time.second(), time.millisecond())
    }

    #[test]
    fn test_sentinels_rejected() {
        for text in ["", "   ", "\t\n", "0", "00", "000", " 0000 "] {
            assert!(ExifTime::from_exif(text).is_none(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_midnight_is_valid() {
        let time = ExifTime::from_exif("00:00:00").unwrap();
        assert_eq!(fields(&time), (0, 0, 0, Some(0)));
        assert_eq!(time.to_string(), "00:00:00");
    }

    #[test]
    fn test_zero_run_with_separators_is_not_a_sentinel() {
        // Fails for lack of seconds, not because it is all zeros.
        assert!(ExifTime::from_exif("00:00").is_none());
        assert!(ExifTime::from_exif("00:00:00.000").is_some());
    }

    #[test]
    fn test_offset_consumed() {
        let time = ExifTime::from_exif("14:05:09+02:00").unwrap();
        assert_eq!(fields(&time), (14, 5, 9, Some(0)));
        assert_eq!(time.to_string(), "14:05:09");
        assert_eq!(time.raw_value(), Some("14:05:09+02:00"));
    }

    #[test]
    fn test_fraction_with_offset() {
        let time = ExifTime::from_exif("23:59:59.500Z").unwrap();
        assert_eq!(fields(&time), (23, 59, 59, Some(500)));
        assert_eq!(time.to_string(), "23:59:59.500");

        let time = ExifTime::from_exif("07:08:09.1234-05:30").unwrap();
        assert_eq!(fields(&time), (7, 8, 9, Some(123)));
    }

    #[test]
    fn test_fraction_without_offset() {
        let time = ExifTime::from_exif("12:34:56.7").unwrap();
        assert_eq!(fields(&time), (12, 34, 56, Some(700)));
        assert_eq!(time.millis(), Some(700));
        assert_eq!(time.to_string(), "12:34:56.700");
    }

    #[test]
    fn test_raw_value_is_trimmed_input() {
        let time = ExifTime::from_exif("  10:11:12 \n").unwrap();
        assert_eq!(time.raw_value(), Some("10:11:12"));
    }

    #[test]
    fn test_garbage_rejected() {
        for text in [
            "not-a-time",
            "24:00:00",
            "12:60:00",
            "12:00:60",
            "1:02:03",
            "12:00:00.",
            "12:00:00+2",
            "12:00:00 UTC",
            "2024:01:01 12:00:00",
        ] {
            assert!(ExifTime::from_exif(text).is_none(), "accepted {text:?}");
        }
    }

    #[test]
    fn test_render_subsecond_suffix() {
        assert_eq!(ExifTime::new(1, 2, 3, None, None).to_string(), "01:02:03");
        assert_eq!(ExifTime::new(1, 2, 3, Some(0), None).to_string(), "01:02:03");
        assert_eq!(ExifTime::new(1, 2, 3, Some(5), None).to_string(), "01:02:03.005");
        assert_eq!(ExifTime::new(1, 2, 3, Some(50), None).to_string(), "01:02:03.050");
        assert_eq!(ExifTime::new(13, 0, 0, Some(999), None).to_string(), "13:00:00.999");
    }

    #[test]
    fn test_string_forms_agree() {
        let time = ExifTime::new(9, 8, 7, Some(6), None);
        assert_eq!(time.to_iso_string(), "09:08:07.006");
        assert_eq!(time.to_exif_string(), "09:08:07.006");
    }

    #[test]
    fn test_from_date_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_milli_opt(14, 30, 5, 250)
            .unwrap();
        let time = ExifTime::from_date_time(Some(dt), Some("2024:03:15 14:30:05.25")).unwrap();
        assert_eq!(fields(&time), (14, 30, 5, Some(250)));
        assert_eq!(time.raw_value(), Some("2024:03:15 14:30:05.25"));

        let dt = DateTime::parse_from_rfc3339("2024-03-15T08:00:00+09:00").unwrap();
        let time = ExifTime::from_date_time(Some(dt), None).unwrap();
        assert_eq!(fields(&time), (8, 0, 0, Some(0)));
        assert_eq!(time.raw_value(), None);
    }

    #[test]
    fn test_from_date_time_rejects_absent_and_leap() {
        assert!(ExifTime::from_date_time(None::<NaiveTime>, Some("12:00:00")).is_none());

        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert!(ExifTime::from_date_time(Some(leap), None).is_none());
    }

    #[test]
    fn test_equality_ignores_raw_value() {
        let parsed = ExifTime::from_exif("10:00:00.5").unwrap();
        let built = ExifTime::new(10, 0, 0, Some(500), None);
        assert_eq!(parsed, built);
        assert_ne!(parsed, ExifTime::new(10, 0, 0, Some(501), None));
    }

    #[test]
    fn test_to_naive_time() {
        let time = ExifTime::new(6, 7, 8, Some(9), None);
        assert_eq!(
            time.to_naive_time(),
            NaiveTime::from_hms_milli_opt(6, 7, 8, 9)
        );
        assert!(ExifTime::new(25, 0, 0, None, None).to_naive_time().is_none());
    }
}
