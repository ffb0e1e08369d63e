//! Canonical epoch label to timestamp mapping
//!
//! Every event timestamp in the scheme comes from here; wall-clock time is
//! never consulted. `YYYY-Qn` maps to the first second of the quarter's
//! first month in the UTC calendar.

use chrono::{TimeZone, Utc};

use crate::{LineageError, Result};

/// Resolve an epoch label to its canonical Unix timestamp.
///
/// The label must contain exactly one literal `-Q` separator. The year and
/// quarter tokens must parse as integers, and the quarter must be within
/// 1..=4. Q1 maps to January, Q2 to April, Q3 to July, Q4 to October; the
/// result is `year-month-01T00:00:00Z` in seconds since the Unix epoch.
pub fn deterministic_created_at(label: &str) -> Result<i64> {
    let parts: Vec<&str> = label.split("-Q").collect();
    let [year_token, quarter_token] = parts.as_slice() else {
        return Err(LineageError::InvalidLabel(label.to_owned()));
    };

    let year: i32 = year_token.parse()?;
    let quarter: i32 = quarter_token.parse()?;
    if !(1..=4).contains(&quarter) {
        return Err(LineageError::InvalidQuarter(quarter));
    }

    let month = (quarter - 1) * 3 + 1;
    let datetime = Utc
        .with_ymd_and_hms(year, month as u32, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| LineageError::YearOutOfRange(label.to_owned()))?;

    Ok(datetime.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_starts_resolve_to_known_timestamps() {
        assert_eq!(deterministic_created_at("2025-Q1").unwrap(), 1735689600);
        assert_eq!(deterministic_created_at("2025-Q2").unwrap(), 1743465600);
        assert_eq!(deterministic_created_at("2025-Q3").unwrap(), 1751328000);
        assert_eq!(deterministic_created_at("2025-Q4").unwrap(), 1759276800);
        assert_eq!(deterministic_created_at("2026-Q1").unwrap(), 1767225600);
    }

    #[test]
    fn test_missing_separator_is_invalid() {
        assert!(matches!(
            deterministic_created_at("2025Q1"),
            Err(LineageError::InvalidLabel(_))
        ));
        assert!(matches!(
            deterministic_created_at(""),
            Err(LineageError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_repeated_separator_is_invalid() {
        assert!(matches!(
            deterministic_created_at("2025-Q1-Q2"),
            Err(LineageError::InvalidLabel(_))
        ));
    }

    #[test]
    fn test_non_integer_tokens_fail_to_parse() {
        assert!(matches!(
            deterministic_created_at("year-Q1"),
            Err(LineageError::Parse(_))
        ));
        assert!(matches!(
            deterministic_created_at("2025-Q"),
            Err(LineageError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_quarters_are_rejected() {
        assert!(matches!(
            deterministic_created_at("2025-Q0"),
            Err(LineageError::InvalidQuarter(0))
        ));
        assert!(matches!(
            deterministic_created_at("2025-Q5"),
            Err(LineageError::InvalidQuarter(5))
        ));
    }

    #[test]
    fn test_pre_epoch_years_resolve() {
        // UTC calendar, no lower bound at 1970
        assert_eq!(deterministic_created_at("1969-Q4").unwrap(), -7948800);
    }
}
