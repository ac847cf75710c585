//! Date validation functions

use chrono::NaiveDate;

/// Format emitted by HTML date inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO calendar date (`YYYY-MM-DD`)
///
/// Only the zero-padded form is accepted, so a parsed date always formats
/// back to the exact input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
}

/// A date is acceptable when it is today or earlier
pub fn is_not_future(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[rstest]
    #[case("2000-01-01", Some((2000, 1, 1)))]
    #[case("2024-02-29", Some((2024, 2, 29)))]
    #[case("2023-02-29", None)]
    #[case("2000-1-1", None)]
    #[case("01/02/2000", None)]
    #[case("", None)]
    #[case("yesterday", None)]
    fn test_parse_date(#[case] input: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_date(input), expected);
    }

    #[rstest]
    #[case("2024-06-14", true)]
    #[case("2024-06-15", true)]
    #[case("2024-06-16", false)]
    #[case("2099-01-01", false)]
    fn test_is_not_future(#[case] input: &str, #[case] ok: bool) {
        let date = parse_date(input).unwrap();
        assert_eq!(is_not_future(date, today()), ok);
    }
}
