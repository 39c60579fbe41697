use anyhow::{bail, Context, Result};
use chrono::{NaiveTime, Timelike};

/// Wire format of reading times.
pub const TIME_FORMAT: &str = "%H:%M:%S";

const TIME_LEN: usize = 8;

/// chrono reports second `60` as a leap second through the nanosecond field.
const LEAP_SECOND_NANOS: u32 = 1_000_000_000;

/// Cheap shape check done before any parsing: eight characters, two colons.
pub fn has_time_shape(value: &str) -> bool {
    value.len() == TIME_LEN && value.matches(':').count() == 2
}

pub fn parse_time(value: &str) -> Result<NaiveTime> {
    let time = NaiveTime::parse_from_str(value, TIME_FORMAT)
        .with_context(|| format!("failed to parse time {value:?}"))?;
    if is_leap_second(time) {
        bail!("leap second in time {value:?}");
    }
    Ok(time)
}

/// Shape check plus a successful parse. Seconds run `00..=59`.
pub fn parse_checked_time(value: &str) -> Option<NaiveTime> {
    if !has_time_shape(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .ok()
        .filter(|time| !is_leap_second(*time))
}

fn is_leap_second(time: NaiveTime) -> bool {
    time.nanosecond() >= LEAP_SECOND_NANOS
}

/// Hours elapsed since midnight, fractional.
pub fn hours_since_midnight(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_shape() {
        assert!(has_time_shape("10:00:00"));
        assert!(!has_time_shape("10:00"));
        assert!(!has_time_shape("10-00-00"));
        assert!(!has_time_shape("10:00:000"));
    }

    #[test]
    fn test_parse_checked_time_rejects_out_of_range() {
        assert!(parse_checked_time("25:00:00").is_none());
        assert!(parse_checked_time("ab:cd:ef").is_none());
        assert_eq!(
            parse_checked_time("09:30:15"),
            NaiveTime::from_hms_opt(9, 30, 15)
        );
    }

    #[test]
    fn test_leap_second_rejected() {
        assert!(parse_checked_time("10:30:60").is_none());
        assert!(parse_checked_time("23:59:60").is_none());
        assert!(parse_time("10:30:60").is_err());
        assert!(parse_checked_time("10:30:59").is_some());
    }

    #[test]
    fn test_parse_time_error_mentions_input() {
        let err = parse_time("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_hours_since_midnight() {
        let t = NaiveTime::from_hms_opt(1, 30, 36).unwrap();
        assert!((hours_since_midnight(t) - 1.51).abs() < 1e-9);
        assert_eq!(hours_since_midnight(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0.0);
    }
}
