//! RFC 3339 date and time formats
//!
//! Covers `date`, `time` and `date-time`, plus the ISO 8601 `duration` and
//! `period` profiles from RFC 3339 Appendix A. Only the RFC 3339 subset is
//! accepted: ordinal dates, week dates, comma fractions and missing offsets
//! are all rejected.

use chrono::NaiveDate;

const MINUTES_PER_DAY: i32 = 24 * 60;
const LEAP_SECOND_MINUTE: i32 = 23 * 60 + 59;

/// Reads a zero-padded decimal field of exactly `width` digits at `start`.
fn fixed_field(bytes: &[u8], start: usize, width: usize) -> Option<u32> {
    let digits = bytes.get(start..start + width)?;
    digits.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}

/// Like [`fixed_field`], rejecting values above `max`.
fn bounded_field(bytes: &[u8], start: usize, width: usize, max: u32) -> Option<u32> {
    fixed_field(bytes, start, width).filter(|&n| n <= max)
}

/// `full-date = date-fullyear "-" date-month "-" date-mday`
fn parse_date(bytes: &[u8]) -> Option<NaiveDate> {
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = fixed_field(bytes, 0, 4)?;
    let month = fixed_field(bytes, 5, 2)?;
    let day = fixed_field(bytes, 8, 2)?;
    // chrono rejects month 0/13 and days past the end of the month,
    // including Feb 29 outside leap years
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

/// `time-offset = "Z" / time-numoffset`, returned as minutes east of UTC.
fn parse_offset(bytes: &[u8]) -> Option<i32> {
    match bytes {
        [b'Z' | b'z'] => Some(0),
        [sign @ (b'+' | b'-'), _, _, b':', _, _] => {
            let hours = bounded_field(bytes, 1, 2, 23)?;
            let minutes = bounded_field(bytes, 4, 2, 59)?;
            let total = i32::try_from(hours * 60 + minutes).ok()?;
            Some(if *sign == b'+' { total } else { -total })
        }
        _ => None,
    }
}

/// `full-time = partial-time time-offset`
fn parse_time(bytes: &[u8]) -> Option<()> {
    if bytes.len() < 9 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let hour = bounded_field(bytes, 0, 2, 23)?;
    let minute = bounded_field(bytes, 3, 2, 59)?;
    let second = bounded_field(bytes, 6, 2, 60)?;

    let mut rest = &bytes[8..];
    if let [b'.', fraction @ ..] = rest {
        let digits = fraction.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        rest = &fraction[digits..];
    }
    let offset = parse_offset(rest)?;

    // A leap second can only be inserted at 23:59:60 UTC, so shift the
    // local wall-clock minute back by the offset before checking.
    if second == 60 {
        let local = i32::try_from(hour * 60 + minute).ok()?;
        if (local - offset).rem_euclid(MINUTES_PER_DAY) != LEAP_SECOND_MINUTE {
            return None;
        }
    }
    Some(())
}

/// Validates an RFC 3339 `full-date`, e.g. `1963-06-19`.
pub fn is_date(value: &str) -> bool {
    parse_date(value.as_bytes()).is_some()
}

/// Validates an RFC 3339 `full-time`, e.g. `08:30:06.283185Z`.
///
/// The offset is mandatory. A leap second (`:60`) is only accepted when the
/// instant falls on 23:59 UTC.
pub fn is_time(value: &str) -> bool {
    parse_time(value.as_bytes()).is_some()
}

/// Validates an RFC 3339 `date-time`, e.g. `1963-06-19T08:30:06Z`.
///
/// The `T` separator and `Z` offset are case-insensitive.
pub fn is_date_time(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.get(10) {
        Some(b'T' | b't') => parse_date(&bytes[..10]).is_some() && parse_time(&bytes[11..]).is_some(),
        _ => false,
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Counts `<digits><unit>` components in `part`.
///
/// Units must come from `order`, in that order, each at most once.
fn duration_units(part: &str, order: &[u8]) -> Option<usize> {
    let mut bytes = part.as_bytes();
    let mut allowed = order;
    let mut count = 0;
    while !bytes.is_empty() {
        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let unit = *bytes.get(digits)?;
        let position = allowed.iter().position(|&u| u == unit)?;
        allowed = &allowed[position + 1..];
        bytes = &bytes[digits + 1..];
        count += 1;
    }
    Some(count)
}

/// Validates an ISO 8601 duration as profiled by RFC 3339 Appendix A.
///
/// ```
/// use schema_formats::is_duration;
///
/// assert!(is_duration("P4DT12H30M5S"));
/// assert!(is_duration("P1W"));
/// assert!(!is_duration("PT"));
/// ```
pub fn is_duration(value: &str) -> bool {
    let Some(body) = value.strip_prefix('P') else {
        return false;
    };
    if let Some(weeks) = body.strip_suffix('W') {
        return all_digits(weeks);
    }

    let (date, time) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };
    let Some(date_units) = duration_units(date, b"YMD") else {
        return false;
    };
    match time {
        None => date_units > 0,
        // "T" must introduce at least one time unit
        Some(time) => matches!(duration_units(time, b"HMS"), Some(n) if n > 0),
    }
}

/// Validates an RFC 3339 Appendix A `period`: `start/end`, `start/duration`
/// or `duration/end`.
pub fn is_period(value: &str) -> bool {
    let Some((start, end)) = value.split_once('/') else {
        return false;
    };
    if is_date_time(start) {
        is_date_time(end) || is_duration(end)
    } else {
        is_duration(start) && is_date_time(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_field() {
        assert_eq!(fixed_field(b"2020", 0, 4), Some(2020));
        assert_eq!(fixed_field(b"-07", 1, 2), Some(7));
        assert_eq!(fixed_field(b"1a", 0, 2), None);
        assert_eq!(fixed_field(b"1", 0, 2), None);
        assert_eq!(bounded_field(b"24", 0, 2, 23), None);
    }

    #[test]
    fn test_month_lengths() {
        let long = ["01", "03", "05", "07", "08", "10", "12"];
        let short = ["04", "06", "09", "11"];
        for month in long {
            assert!(is_date(&format!("2020-{month}-31")), "{month}");
            assert!(!is_date(&format!("2020-{month}-32")), "{month}");
        }
        for month in short {
            assert!(is_date(&format!("2020-{month}-30")), "{month}");
            assert!(!is_date(&format!("2020-{month}-31")), "{month}");
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_date("2020-02-29"));
        assert!(!is_date("2021-02-29"));
        assert!(is_date("2000-02-29")); // divisible by 400
        assert!(!is_date("1900-02-29")); // century
        assert!(!is_date("2020-02-30"));
        assert!(!is_date("2020-00-10"));
        assert!(!is_date("2020-01-00"));
    }

    #[test]
    fn test_date_shape() {
        assert!(!is_date("1998-1-20"));
        assert!(!is_date("1998-01-1"));
        assert!(!is_date("2013-350"));
        assert!(!is_date("06/19/1963"));
        assert!(!is_date(" 1963-06-19"));
        assert!(!is_date("1963-06-19 "));
        assert!(!is_date("+963-06-19"));
        assert!(!is_date(""));
    }

    #[test]
    fn test_leap_second_follows_utc() {
        assert!(is_time("23:59:60Z"));
        assert!(is_time("15:59:60-08:00"));
        assert!(is_time("00:29:60+00:30"));
        assert!(!is_time("22:59:60Z"));
        assert!(!is_time("23:58:60Z"));
        assert!(!is_time("23:59:60+01:00"));
    }

    #[test]
    fn test_offsets() {
        assert!(is_time("08:30:06+23:59"));
        assert!(!is_time("08:30:06+24:00"));
        assert!(!is_time("08:30:06+00:60"));
        assert!(!is_time("08:30:06+0000"));
        assert!(!is_time("08:30:06"));
        assert!(!is_time("08:30:06Zz"));
        assert!(!is_time("08:30:06.Z"));
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert!(!is_date("2020-01-0\u{e9}"));
        assert!(!is_time("08:30:0\u{e9}Z"));
        assert!(!is_date_time("2020-01-01\u{e9}08:30:06Z"));
        assert!(!is_date_time("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"));
    }

    #[test]
    fn test_duration_units_order() {
        assert_eq!(duration_units("1Y2M3D", b"YMD"), Some(3));
        assert_eq!(duration_units("", b"YMD"), Some(0));
        assert_eq!(duration_units("3D1Y", b"YMD"), None);
        assert_eq!(duration_units("1Y1Y", b"YMD"), None);
        assert_eq!(duration_units("Y", b"YMD"), None);
        assert_eq!(duration_units("12", b"YMD"), None);
    }

    #[test]
    fn test_durations() {
        assert!(is_duration("P4DT12H30M5S"));
        assert!(is_duration("P1Y2M3DT4H5M6S"));
        assert!(is_duration("PT36H"));
        assert!(is_duration("P0D"));
        assert!(is_duration("P2W"));

        assert!(!is_duration("P"));
        assert!(!is_duration("PT"));
        assert!(!is_duration("P1YT"));
        assert!(!is_duration("PT1D"));
        assert!(!is_duration("P2D1Y"));
        assert!(!is_duration("P1Y1W"));
        assert!(!is_duration("PW"));
        assert!(!is_duration("P1.5D"));
        assert!(!is_duration("4DT12H30M5S"));
    }

    #[test]
    fn test_periods() {
        assert!(is_period("1963-06-19T08:30:06Z/1963-06-19T08:30:07Z"));
        assert!(is_period("2007-03-01T13:00:00Z/P1Y2M10DT2H30M"));
        assert!(is_period("P1Y2M10DT2H30M/2008-05-11T15:30:00Z"));
        assert!(!is_period("P1D/P2D"));
        assert!(!is_period("2007-03-01T13:00:00Z"));
        assert!(!is_period("2007-03-01/2008-03-01"));
    }
}
