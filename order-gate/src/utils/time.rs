//! 时间工具函数 - 业务时区与西语日期
//!
//! 规则层只接收业务时区下的 naive 时间 (`NaiveDateTime`)，
//! 时区换算统一在这里完成。

use chrono::{NaiveDate, NaiveDateTime, Utc, Weekday};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::invalid_request(format!("Invalid date format: {}", date)))
}

/// 解析 IANA 时区名 (e.g. "America/Santiago")
pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|e| AppError::config(format!("Invalid timezone {}: {}", name, e)))
}

/// 业务时区下的当前时间
pub fn business_now(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// 西语星期名 (展示给用户)
pub fn weekday_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_weekday_es() {
        let thursday = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        assert_eq!(weekday_es(thursday.weekday()), "Jueves");
        assert_eq!(weekday_es(Weekday::Wed), "Miércoles");
        assert_eq!(weekday_es(Weekday::Sat), "Sábado");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-06").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 6).unwrap()
        );
        assert!(parse_date("06/03/2025").is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(
            parse_timezone("America/Santiago").unwrap(),
            chrono_tz::America::Santiago
        );
        let err = parse_timezone("Mars/Olympus").unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::ConfigError);
    }
}
