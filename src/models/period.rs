//! Budget period representation
//!
//! A budget declares how often its ceiling recurs ([`PeriodKind`]); the
//! concrete dated interval ([`BudgetPeriod`]) is derived from a reference
//! instant at computation time. Both monthly and yearly periods run from the
//! first instant of the calendar unit through its last instant, inclusive.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a budget ceiling recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Monthly,
    Yearly,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// A concrete dated budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// A calendar month (e.g. "2024-03")
    Monthly { year: i32, month: u32 },

    /// A calendar year (e.g. "2024")
    Yearly { year: i32 },
}

impl BudgetPeriod {
    /// Create a monthly period
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    /// Create a yearly period
    pub fn yearly(year: i32) -> Self {
        Self::Yearly { year }
    }

    /// The period of the given kind containing `instant`
    pub fn containing(kind: PeriodKind, instant: DateTime<Utc>) -> Self {
        let date = instant.date_naive();
        match kind {
            PeriodKind::Monthly => Self::Monthly {
                year: date.year(),
                month: date.month(),
            },
            PeriodKind::Yearly => Self::Yearly { year: date.year() },
        }
    }

    /// First calendar day of the period
    pub fn first_day(&self) -> NaiveDate {
        let (year, month) = match self {
            Self::Monthly { year, month } => (*year, *month),
            Self::Yearly { year } => (*year, 1),
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last calendar day of the period
    pub fn last_day(&self) -> NaiveDate {
        self.next_first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    /// First instant of the period
    pub fn start(&self) -> DateTime<Utc> {
        self.first_day().and_time(NaiveTime::MIN).and_utc()
    }

    /// Last instant of the period (inclusive)
    pub fn end(&self) -> DateTime<Utc> {
        self.next_start() - Duration::nanoseconds(1)
    }

    /// Check if an instant falls within the period, inclusive at both ends
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start() && instant < self.next_start()
    }

    fn next_first_day(&self) -> NaiveDate {
        let (year, month) = match self {
            Self::Monthly { year, month } if *month >= 12 => (*year + 1, 1),
            Self::Monthly { year, month } => (*year, *month + 1),
            Self::Yearly { year } => (*year + 1, 1),
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
    }

    fn next_start(&self) -> DateTime<Utc> {
        self.next_first_day().and_time(NaiveTime::MIN).and_utc()
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Yearly { year } => write!(f, "{:04}", year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_containing_monthly() {
        let period = BudgetPeriod::containing(PeriodKind::Monthly, instant("2024-03-15T12:30:00Z"));
        assert_eq!(period, BudgetPeriod::monthly(2024, 3));
    }

    #[test]
    fn test_containing_yearly() {
        let period = BudgetPeriod::containing(PeriodKind::Yearly, instant("2024-03-15T12:30:00Z"));
        assert_eq!(period, BudgetPeriod::yearly(2024));
    }

    #[test]
    fn test_monthly_bounds() {
        let period = BudgetPeriod::monthly(2024, 3);
        assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(period.start(), instant("2024-03-01T00:00:00Z"));
        assert_eq!(period.end(), instant("2024-03-31T23:59:59.999999999Z"));
    }

    #[test]
    fn test_leap_february() {
        let period = BudgetPeriod::monthly(2024, 2);
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_december_rollover() {
        let period = BudgetPeriod::monthly(2024, 12);
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert!(period.contains(instant("2024-12-31T23:59:59.999Z")));
        assert!(!period.contains(instant("2025-01-01T00:00:00Z")));
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let period = BudgetPeriod::monthly(2024, 3);
        assert!(period.contains(instant("2024-03-01T00:00:00Z")));
        assert!(period.contains(instant("2024-03-31T23:59:59.999Z")));
        assert!(!period.contains(instant("2024-02-29T23:59:59.999Z")));
        assert!(!period.contains(instant("2024-04-01T00:00:00Z")));
    }

    #[test]
    fn test_yearly_bounds() {
        let period = BudgetPeriod::yearly(2024);
        assert_eq!(period.start(), instant("2024-01-01T00:00:00Z"));
        assert!(period.contains(instant("2024-12-31T23:59:59.999Z")));
        assert!(!period.contains(instant("2025-01-01T00:00:00Z")));
    }

    #[test]
    fn test_display() {
        assert_eq!(BudgetPeriod::monthly(2024, 3).to_string(), "2024-03");
        assert_eq!(BudgetPeriod::yearly(2024).to_string(), "2024");
        assert_eq!(PeriodKind::Monthly.to_string(), "monthly");
    }

    #[test]
    fn test_kind_serde_lowercase() {
        assert_eq!(serde_json::to_string(&PeriodKind::Monthly).unwrap(), "\"monthly\"");
        let kind: PeriodKind = serde_json::from_str("\"yearly\"").unwrap();
        assert_eq!(kind, PeriodKind::Yearly);
    }

    #[test]
    fn test_period_serde_roundtrip() {
        let period = BudgetPeriod::monthly(2024, 3);
        let json = serde_json::to_string(&period).unwrap();
        let back: BudgetPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, back);
    }
}
