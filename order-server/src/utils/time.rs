//! 时间工具函数 (业务时区日期)
//!
//! 查询参数中的日期在 API handler 层解析，缺省为业务时区的今天。

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// `now` 在业务时区的日历日期
pub fn today_in(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// 可选日期参数，缺省为今天
pub fn date_or_today(date: Option<&str>, now: DateTime<Utc>, tz: Tz) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date(d),
        None => Ok(today_in(now, tz)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-05-02").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
        );
        let err = parse_date("02/05/2024").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_today_crosses_midnight_in_business_tz() {
        // 20:00 UTC is already the next day in Kolkata (+05:30)
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap();
        assert_eq!(
            today_in(now, chrono_tz::Asia::Kolkata),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
        );
        assert_eq!(
            today_in(now, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_date_or_today() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
        let tz = chrono_tz::Asia::Kolkata;
        assert_eq!(
            date_or_today(None, now, tz).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(
            date_or_today(Some("2024-06-10"), now, tz).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
    }
}
