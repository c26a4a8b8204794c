use chrono::{DateTime, Duration, Local, NaiveDate, Timelike};

pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

/// First day of the historical window: `lookback_days` before `today`.
pub fn lookback_start(today: NaiveDate, lookback_days: i64) -> NaiveDate {
    today - Duration::days(lookback_days)
}

pub fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day, STANDARD_TIME_FORMAT).ok()
}

/// Plot x coordinate for a `YYYY-MM-DD` date string: whole days since the
/// Unix epoch. Returns `None` for strings that do not parse as dates.
pub fn day_to_plot_x(day: &str) -> Option<f64> {
    let date = parse_day(day)?;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    Some(date.signed_duration_since(epoch).num_days() as f64)
}

/// Inverse of [`day_to_plot_x`], used by the plot axis formatter.
pub fn plot_x_to_day(x: f64) -> String {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
    let date = epoch + Duration::days(x.round() as i64);
    date.format(STANDARD_TIME_FORMAT).to_string()
}

/// The provider publishes its daily rates at a fixed local hour. Before
/// that cutoff the freshest data is still yesterday's, so the stamp shows
/// the previous date.
pub fn last_update_stamp(now: DateTime<Local>, cutoff_hour: u32) -> String {
    let date = if now.time().hour() < cutoff_hour {
        now.date_naive() - Duration::days(1)
    } else {
        now.date_naive()
    };
    format!("{}, {:02}:00", date.format(STANDARD_TIME_FORMAT), cutoff_hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn lookback_start_is_one_year_before() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let start = lookback_start(today, 365);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
    }

    #[test]
    fn plot_x_round_trips_through_date() {
        let x = day_to_plot_x("2024-06-01").unwrap();
        assert_eq!(plot_x_to_day(x), "2024-06-01");
    }

    #[test]
    fn plot_x_rejects_garbage() {
        assert!(day_to_plot_x("not-a-date").is_none());
    }

    #[test]
    fn stamp_before_cutoff_shows_yesterday() {
        let now = Local.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        assert_eq!(last_update_stamp(now, 16), "2025-01-14, 16:00");
    }

    #[test]
    fn stamp_after_cutoff_shows_today() {
        let now = Local.with_ymd_and_hms(2025, 1, 15, 17, 0, 0).unwrap();
        assert_eq!(last_update_stamp(now, 16), "2025-01-15, 16:00");
    }
}
