//! Tokenizer and fixed-grammar parser for class-time strings.
//!
//! The grammar is `<day-run> <HH:MM>-<HH:MM>`, e.g. `"MoWe 10:00-11:30"`.
//! Structural problems (no day run, no time range) are parse failures.
//! Clock values that fail to parse are kept as [`Clock::Invalid`] so the
//! caller can apply its fallback policy explicitly instead of inheriting an
//! accidental default.

use super::types::{DayToken, Weekday};
use thiserror::Error;

/// Structural failures when parsing a class-time string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassTimeError {
    /// The string was empty or whitespace-only
    #[error("empty class time string")]
    Empty,

    /// No time range followed the day-code run
    #[error("missing time range after day codes")]
    MissingTimeRange,
}

/// One parsed clock value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clock {
    /// Minutes since midnight
    Valid(i32),
    /// The raw text that failed to parse
    Invalid(String),
}

impl Clock {
    pub fn minutes(&self) -> Option<i32> {
        match self {
            Clock::Valid(m) => Some(*m),
            Clock::Invalid(_) => None,
        }
    }

    /// Explicit fallback: malformed clock values count as 00:00. Blocks
    /// anchored at midnight fall before the grid window and are dropped by
    /// the layout engine's window check.
    pub fn minutes_or_zero(&self) -> i32 {
        self.minutes().unwrap_or(0)
    }
}

/// A parsed class-time string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTime {
    pub days: Vec<DayToken>,
    pub start: Clock,
    pub end: Clock,
}

impl ClassTime {
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.days.iter().any(|d| d.is_day(day))
    }
}

/// Parses a class-time string like `"TuTh 14:00-15:30"`.
pub fn parse_class_time(raw: &str) -> Result<ClassTime, ClassTimeError> {
    let mut parts = raw.split_whitespace();
    let day_run = parts.next().ok_or(ClassTimeError::Empty)?;
    let range = parts.next().ok_or(ClassTimeError::MissingTimeRange)?;

    // A range with no '-' leaves the end side empty, which parses as
    // invalid and later degrades to zero.
    let (start_raw, end_raw) = match range.split_once('-') {
        Some((start, end)) => (start, end),
        None => (range, ""),
    };

    Ok(ClassTime {
        days: tokenize_day_run(day_run),
        start: parse_clock(start_raw),
        end: parse_clock(end_raw),
    })
}

/// Splits a day run into two-character codes, with a single trailing
/// character allowed (Friday's one-letter code).
pub fn tokenize_day_run(run: &str) -> Vec<DayToken> {
    let chars: Vec<char> = run.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let end = (i + 2).min(chars.len());
        let code: String = chars[i..end].iter().collect();
        tokens.push(match code.as_str() {
            "Mo" => DayToken::Known(Weekday::Monday),
            "Tu" => DayToken::Known(Weekday::Tuesday),
            "We" => DayToken::Known(Weekday::Wednesday),
            "Th" => DayToken::Known(Weekday::Thursday),
            "F" => DayToken::Known(Weekday::Friday),
            _ => DayToken::Unknown(code),
        });
        i = end;
    }

    tokens
}

/// Parses an `HH:MM` clock value into minutes since midnight.
///
/// A bare hour (`"14"`) is accepted with zero minutes. Anything
/// non-numeric yields [`Clock::Invalid`].
pub fn parse_clock(raw: &str) -> Clock {
    let (hours_raw, minutes_raw) = match raw.split_once(':') {
        Some((h, m)) => (h, m),
        None => (raw, "0"),
    };

    let hours = hours_raw.parse::<i32>();
    let minutes = minutes_raw.parse::<i32>();
    match (hours, minutes) {
        (Ok(h), Ok(m)) => Clock::Valid(h * 60 + m),
        _ => Clock::Invalid(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_class_time() {
        let parsed = parse_class_time("MoWe 10:00-11:30").unwrap();
        assert_eq!(
            parsed.days,
            vec![
                DayToken::Known(Weekday::Monday),
                DayToken::Known(Weekday::Wednesday)
            ]
        );
        assert_eq!(parsed.start, Clock::Valid(600));
        assert_eq!(parsed.end, Clock::Valid(690));
    }

    #[test]
    fn test_single_character_friday_code() {
        let parsed = parse_class_time("MoWeF 13:00-14:00").unwrap();
        assert!(parsed.meets_on(Weekday::Friday));
        assert!(parsed.meets_on(Weekday::Monday));
        assert!(!parsed.meets_on(Weekday::Tuesday));
    }

    #[test]
    fn test_unknown_day_codes_pass_through() {
        let parsed = parse_class_time("SaSu 09:00-10:00").unwrap();
        assert_eq!(
            parsed.days,
            vec![
                DayToken::Unknown("Sa".to_string()),
                DayToken::Unknown("Su".to_string())
            ]
        );
        for day in Weekday::ALL {
            assert!(!parsed.meets_on(day));
        }
    }

    #[test]
    fn test_empty_string_is_structural_failure() {
        assert_eq!(parse_class_time(""), Err(ClassTimeError::Empty));
        assert_eq!(parse_class_time("   "), Err(ClassTimeError::Empty));
    }

    #[test]
    fn test_missing_time_range_is_structural_failure() {
        assert_eq!(
            parse_class_time("MoWe"),
            Err(ClassTimeError::MissingTimeRange)
        );
    }

    #[test]
    fn test_malformed_clock_is_kept_not_zeroed() {
        let parsed = parse_class_time("Mo xx:30-11:00").unwrap();
        assert_eq!(parsed.start, Clock::Invalid("xx:30".to_string()));
        assert_eq!(parsed.start.minutes_or_zero(), 0);
        assert_eq!(parsed.end, Clock::Valid(660));
    }

    #[test]
    fn test_range_without_separator_has_invalid_end() {
        let parsed = parse_class_time("Mo 10:00").unwrap();
        assert_eq!(parsed.start, Clock::Valid(600));
        assert_eq!(parsed.end, Clock::Invalid(String::new()));
    }

    #[test]
    fn test_bare_hour_clock() {
        assert_eq!(parse_clock("14"), Clock::Valid(840));
        assert_eq!(parse_clock("08:05"), Clock::Valid(485));
    }
}
