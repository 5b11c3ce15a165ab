//! Typed path segments for the calendar routes.
//!
//! The router only builds a calendar route when every segment parses, so the
//! constraints live in `FromStr`: years and days are plain digit runs, months
//! must be exactly two digits between 01 and 12. Anything else falls through
//! to the catch-all route.

use std::fmt;
use std::str::FromStr;

/// Calendar year from the path: `/app/2024`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearNumber(u32);

impl YearNumber {
    pub fn new(year: u32) -> Self {
        Self(year)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for YearNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for YearNumber {
    type Err = SegmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s).map(Self)
    }
}

/// Calendar month from the path, always two digits: `/app/2024/08`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthNumber(u8);

impl MonthNumber {
    /// `None` unless `month` is a real month number.
    pub fn new(month: u8) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self(month))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// English month name for headings.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}

impl fmt::Display for MonthNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for MonthNumber {
    type Err = SegmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(SegmentParseError);
        }
        let value = parse_digits(s)?;
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(SegmentParseError)
    }
}

/// Day of month from the path: `/app/2024/08/21`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayNumber(u32);

impl DayNumber {
    pub fn new(day: u32) -> Self {
        Self(day)
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DayNumber {
    type Err = SegmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s).map(Self)
    }
}

/// The segment is not the digit run the route wanted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentParseError;

impl fmt::Display for SegmentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a run of ascii digits")
    }
}

impl std::error::Error for SegmentParseError {}

// Digit runs past u32::MAX are rejected, so such paths reach the catch-all.
fn parse_digits(s: &str) -> Result<u32, SegmentParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SegmentParseError);
    }
    s.parse().map_err(|_| SegmentParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_parses_digit_runs_only() {
        assert_eq!("2024".parse(), Ok(YearNumber::new(2024)));
        assert_eq!("0007".parse(), Ok(YearNumber::new(7)));
        assert!("".parse::<YearNumber>().is_err());
        assert!("20x4".parse::<YearNumber>().is_err());
        assert!("-2024".parse::<YearNumber>().is_err());
    }

    #[test]
    fn test_month_requires_two_digits_in_range() {
        assert_eq!("01".parse(), Ok(MonthNumber::new(1).unwrap()));
        assert_eq!("12".parse(), Ok(MonthNumber::new(12).unwrap()));
        assert!("00".parse::<MonthNumber>().is_err());
        assert!("13".parse::<MonthNumber>().is_err());
        assert!("1".parse::<MonthNumber>().is_err());
        assert!("012".parse::<MonthNumber>().is_err());
        assert!("ab".parse::<MonthNumber>().is_err());
    }

    #[test]
    fn test_month_display_keeps_the_leading_zero() {
        let month = MonthNumber::new(8).unwrap();
        assert_eq!(month.to_string(), "08");
        assert_eq!(month.to_string().parse(), Ok(month));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(MonthNumber::new(1).unwrap().name(), "January");
        assert_eq!(MonthNumber::new(12).unwrap().name(), "December");
        assert!(MonthNumber::new(0).is_none());
        assert!(MonthNumber::new(13).is_none());
    }

    #[test]
    fn test_day_parses_digit_runs_only() {
        assert_eq!("21".parse(), Ok(DayNumber::new(21)));
        assert_eq!("3".parse(), Ok(DayNumber::new(3)));
        assert!("21st".parse::<DayNumber>().is_err());
        assert!("".parse::<DayNumber>().is_err());
    }

    #[test]
    fn test_digit_runs_are_bounded_by_u32() {
        assert_eq!("4294967295".parse(), Ok(YearNumber::new(u32::MAX)));
        assert!("4294967296".parse::<YearNumber>().is_err());
        assert!("99999999999".parse::<DayNumber>().is_err());
    }
}
