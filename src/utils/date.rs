//! UTC date utilities without timezone dependencies.
//!
//! The sitemap only needs today's date as `YYYY-MM-DD`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Calendar date in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateUtc {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl DateUtc {
    pub const fn from_ymd(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Current date from the system clock.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_days((secs / 86_400) as i64)
    }

    /// Civil date from days since 1970-01-01 (Howard Hinnant's `civil_from_days`).
    #[allow(clippy::cast_possible_truncation)] // month/day are bounded by the algorithm
    pub fn from_unix_days(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + i64::from(month <= 2);
        Self::from_ymd(year as i32, month, day)
    }

    /// Format as `YYYY-MM-DD` (W3C datetime, date precision).
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(DateUtc::from_unix_days(0), DateUtc::from_ymd(1970, 1, 1));
    }

    #[test]
    fn test_known_dates() {
        // 2000-02-29 (leap day in a 400-year leap year)
        assert_eq!(DateUtc::from_unix_days(11_016), DateUtc::from_ymd(2000, 2, 29));
        // 2024-06-15
        assert_eq!(DateUtc::from_unix_days(19_889), DateUtc::from_ymd(2024, 6, 15));
        // 1969-12-31
        assert_eq!(DateUtc::from_unix_days(-1), DateUtc::from_ymd(1969, 12, 31));
    }

    #[test]
    fn test_to_iso() {
        assert_eq!(DateUtc::from_ymd(2025, 1, 5).to_iso(), "2025-01-05");
    }

    #[test]
    fn test_today_is_after_epoch() {
        assert!(DateUtc::today() > DateUtc::from_ymd(2020, 1, 1));
    }
}
