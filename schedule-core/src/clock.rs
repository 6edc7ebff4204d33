//! Clock values for live-state queries.
//!
//! The schedule can be previewed at an arbitrary moment by passing a `now`
//! override written as summit-local wall time, e.g. `2024-03-05,10:30:00`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ScheduleError, ScheduleResult};

pub const NOW_OVERRIDE_FORMAT: &str = "%Y-%m-%d,%H:%M:%S";

/// Parse a `now` override as wall time in `tz`.
pub fn parse_now_override(value: &str, tz: Tz) -> ScheduleResult<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), NOW_OVERRIDE_FORMAT)
        .map_err(|_| ScheduleError::InvalidNow(value.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ScheduleError::InvalidNow(value.to_string()))
}

/// The override if one is given, the system clock otherwise.
pub fn resolve_now(now_override: Option<&str>, tz: Tz) -> ScheduleResult<DateTime<Utc>> {
    match now_override {
        Some(value) => parse_now_override(value, tz),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::utc;

    #[test]
    fn override_is_summit_local() {
        let now = parse_now_override("2024-03-05,10:30:00", chrono_tz::America::New_York).unwrap();
        assert_eq!(now, utc(2024, 3, 5, 15, 30, 0));
    }

    #[test]
    fn override_uses_24_hour_clock() {
        let now = parse_now_override("2024-03-05,17:05:09", chrono_tz::UTC).unwrap();
        assert_eq!(now, utc(2024, 3, 5, 17, 5, 9));
    }

    #[test]
    fn malformed_override_is_rejected() {
        assert!(matches!(
            parse_now_override("2024-03-05 10:30", chrono_tz::UTC),
            Err(ScheduleError::InvalidNow(_))
        ));
    }

    #[test]
    fn override_in_dst_gap_is_rejected() {
        assert!(parse_now_override("2026-03-29,02:30:00", chrono_tz::Europe::Berlin).is_err());
    }

    #[test]
    fn resolve_without_override_uses_system_clock() {
        let before = Utc::now();
        let now = resolve_now(None, chrono_tz::UTC).unwrap();
        assert!(now >= before);
    }
}
