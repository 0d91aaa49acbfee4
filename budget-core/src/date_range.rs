use crate::error::{ReportError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used for the request body and the custom date inputs: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Month (1-based) in which the financial year begins.
pub const FINANCIAL_YEAR_START_MONTH: u32 = 4;

/// How the reporting window is chosen on the form.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRangeType {
    /// January 1 of the current year through today
    #[default]
    Calendar,
    /// April 1 of the current financial year through today
    Financial,
    /// Two explicit dates supplied by the user
    Custom,
}

impl DateRangeType {
    pub const ALL: [DateRangeType; 3] = [
        DateRangeType::Calendar,
        DateRangeType::Financial,
        DateRangeType::Custom,
    ];

    /// Value used for the radio input and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRangeType::Calendar => "calendar",
            DateRangeType::Financial => "financial",
            DateRangeType::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangeType::Calendar => "Calendar Year to Date",
            DateRangeType::Financial => "Financial Year to Date",
            DateRangeType::Custom => "Custom Range",
        }
    }
}

impl fmt::Display for DateRangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRangeType {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(DateRangeType::Calendar),
            "financial" => Ok(DateRangeType::Financial),
            "custom" => Ok(DateRangeType::Custom),
            _ => Err(ReportError::UnknownRangeType(s.to_string())),
        }
    }
}

/// An inclusive reporting window: start date through end date.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    /// January 1 of `today`'s year through `today`.
    pub fn calendar_to_date(today: NaiveDate) -> DateRange {
        let jan_1 = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        DateRange(jan_1, today)
    }

    /// Start of the current financial year through `today`.
    pub fn financial_to_date(today: NaiveDate) -> DateRange {
        DateRange(financial_year_start(&today), today)
    }

    /// Parse two user-supplied dates. Both must be valid `YYYY-MM-DD`
    /// calendar days and the start must not come after the end.
    pub fn custom(start: &str, end: &str) -> Result<DateRange> {
        let start = parse_input_date(start)?;
        let end = parse_input_date(end)?;
        if start > end {
            log::debug!("custom range rejected: {} is after {}", start, end);
            return Err(ReportError::InvalidDateRange);
        }
        Ok(DateRange(start, end))
    }

    /// Resolve the window for the selected mode. The custom inputs are
    /// only consulted when `kind` is `Custom`.
    pub fn resolve(
        kind: DateRangeType,
        today: NaiveDate,
        custom_start: &str,
        custom_end: &str,
    ) -> Result<DateRange> {
        match kind {
            DateRangeType::Calendar => Ok(DateRange::calendar_to_date(today)),
            DateRangeType::Financial => Ok(DateRange::financial_to_date(today)),
            DateRangeType::Custom => DateRange::custom(custom_start, custom_end),
        }
    }
}

/// Get the first day of the financial year containing `date`.
/// The financial year runs Apr 1 to Mar 31,
/// e.g. Apr 1 2024 -> Apr 1 2024, Mar 31 2025 -> Apr 1 2024.
pub fn financial_year_start(date: &NaiveDate) -> NaiveDate {
    let year = if date.month() >= FINANCIAL_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    NaiveDate::from_ymd_opt(year, FINANCIAL_YEAR_START_MONTH, 1).unwrap_or(*date)
}

/// Parse a date typed into one of the custom date inputs. Years are held
/// to four digits so the formatted value stays exactly ten characters.
pub fn parse_input_date(s: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
        log::debug!("unparseable date {:?}: {}", s, e);
        ReportError::InvalidDateRange
    })?;
    if !(1..=9999).contains(&date.year()) {
        return Err(ReportError::InvalidDateRange);
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_calendar_range_starts_on_jan_1() {
        let today = ymd(2024, 7, 15);
        let range = DateRange::resolve(DateRangeType::Calendar, today, "", "").unwrap();
        assert_eq!(range, DateRange(ymd(2024, 1, 1), today));
    }

    #[test]
    fn test_calendar_range_on_new_years_day() {
        let today = ymd(2025, 1, 1);
        let range = DateRange::calendar_to_date(today);
        assert_eq!(range.start(), today);
        assert_eq!(range.end(), today);
    }

    #[test]
    fn test_financial_range_after_april() {
        let today = ymd(2024, 11, 3);
        let range = DateRange::resolve(DateRangeType::Financial, today, "", "").unwrap();
        assert_eq!(range, DateRange(ymd(2024, 4, 1), today));
    }

    #[test]
    fn test_financial_range_before_april() {
        let today = ymd(2025, 3, 31);
        let range = DateRange::financial_to_date(today);
        assert_eq!(range, DateRange(ymd(2024, 4, 1), today));
    }

    #[test]
    fn test_financial_year_start_boundaries() {
        assert_eq!(financial_year_start(&ymd(2024, 4, 1)), ymd(2024, 4, 1));
        assert_eq!(financial_year_start(&ymd(2024, 1, 1)), ymd(2023, 4, 1));
        assert_eq!(financial_year_start(&ymd(2024, 12, 31)), ymd(2024, 4, 1));
    }

    #[test]
    fn test_custom_range_ignores_today() {
        let range =
            DateRange::resolve(DateRangeType::Custom, ymd(2030, 1, 1), "2024-02-01", "2024-02-29")
                .unwrap();
        assert_eq!(range, DateRange(ymd(2024, 2, 1), ymd(2024, 2, 29)));
    }

    #[test]
    fn test_custom_single_day_is_valid() {
        let range = DateRange::custom(" 2024-05-05 ", "2024-05-05").unwrap();
        assert_eq!(range.start(), range.end());
    }

    #[test]
    fn test_custom_reversed_range_rejected() {
        let err = DateRange::custom("2024-05-06", "2024-05-05").unwrap_err();
        assert!(matches!(err, ReportError::InvalidDateRange));
    }

    #[test]
    fn test_custom_unparseable_rejected() {
        for (start, end) in [
            ("", "2024-05-05"),
            ("2024-05-05", ""),
            ("2024-02-30", "2024-03-01"),
            ("05/01/2024", "2024-06-01"),
            ("not a date", "2024-06-01"),
        ] {
            let err = DateRange::custom(start, end).unwrap_err();
            assert!(err.is_validation(), "{start:?}..{end:?} should be rejected");
        }
    }

    #[test]
    fn test_serialized_dates_are_ten_characters() {
        for date in [ymd(1, 1, 1), ymd(2024, 4, 1), ymd(9999, 12, 31)] {
            let value = serde_json::to_value(date).unwrap();
            let s = value.as_str().unwrap();
            assert_eq!(s.len(), 10);
            assert_eq!(s, date.format(DATE_FORMAT).to_string());
            assert_eq!(parse_input_date(s).unwrap(), date);
        }
    }

    #[test]
    fn test_five_digit_year_rejected() {
        assert!(parse_input_date("10000-01-01").is_err());
    }

    #[test]
    fn test_range_type_parse() {
        assert_eq!("Financial".parse::<DateRangeType>().unwrap(), DateRangeType::Financial);
        assert_eq!(" custom ".parse::<DateRangeType>().unwrap(), DateRangeType::Custom);
        assert!("fiscal".parse::<DateRangeType>().is_err());
        for kind in DateRangeType::ALL {
            assert_eq!(kind.as_str().parse::<DateRangeType>().unwrap(), kind);
        }
    }
}
