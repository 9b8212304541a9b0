use chrono::{DateTime, NaiveDate};

use crate::{CoreError, CoreResult};

/// Parses a travel date given as `yyyy-MM-dd` or as an RFC 3339 timestamp
/// (the calendar date of the timestamp's own offset is used).
pub fn parse_travel_date(input: &str) -> CoreResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CoreError::InvalidDate("empty".to_string()));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))
        .map_err(|e| CoreError::InvalidDate(format!("{input}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_travel_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(parse_travel_date("2025-07-04").unwrap(), expected);
        assert_eq!(parse_travel_date(" 2025-07-04 ").unwrap(), expected);
        assert_eq!(parse_travel_date("2025-07-04T23:30:00-05:00").unwrap(), expected);
    }

    #[test]
    fn test_rejects_bad_dates() {
        assert!(parse_travel_date("").is_err());
        assert!(parse_travel_date("2025-02-30").is_err());
        assert!(matches!(
            parse_travel_date("next tuesday"),
            Err(CoreError::InvalidDate(_))
        ));
    }
}
