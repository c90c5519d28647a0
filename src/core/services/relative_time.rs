use std::fmt;

use chrono::{DateTime, Utc};

use crate::core::config::Locale;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// How long ago a card was created, bucketed for display. Counts are
/// rounded up, so 61 seconds is two minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

pub fn relative_time(created: DateTime<Utc>, now: DateTime<Utc>) -> RelativeTime {
    let elapsed = (now - created).num_milliseconds();
    if elapsed < MINUTE_MS {
        RelativeTime::JustNow
    } else if elapsed < HOUR_MS {
        RelativeTime::Minutes(div_ceil(elapsed, MINUTE_MS))
    } else if elapsed < DAY_MS {
        RelativeTime::Hours(div_ceil(elapsed, HOUR_MS))
    } else {
        RelativeTime::Days(div_ceil(elapsed, DAY_MS))
    }
}

fn div_ceil(value: i64, unit: i64) -> i64 {
    (value + unit - 1) / unit
}

impl RelativeTime {
    pub fn localized(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Zh => match self {
                RelativeTime::JustNow => "刚刚".to_string(),
                RelativeTime::Minutes(n) => format!("{} 分钟前", n),
                RelativeTime::Hours(n) => format!("{} 小时前", n),
                RelativeTime::Days(n) => format!("{} 天前", n),
            },
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, unit) = match self {
            RelativeTime::JustNow => return f.write_str("just now"),
            RelativeTime::Minutes(n) => (*n, "minute"),
            RelativeTime::Hours(n) => (*n, "hour"),
            RelativeTime::Days(n) => (*n, "day"),
        };
        if count == 1 {
            write!(f, "1 {} ago", unit)
        } else {
            write!(f, "{} {}s ago", count, unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ago(elapsed: Duration) -> RelativeTime {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        relative_time(now - elapsed, now)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(ago(Duration::zero()), RelativeTime::JustNow);
        assert_eq!(ago(Duration::milliseconds(59_999)), RelativeTime::JustNow);
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(ago(Duration::minutes(-5)), RelativeTime::JustNow);
    }

    #[test]
    fn minutes_round_up() {
        assert_eq!(ago(Duration::seconds(60)), RelativeTime::Minutes(1));
        assert_eq!(ago(Duration::seconds(61)), RelativeTime::Minutes(2));
        assert_eq!(ago(Duration::milliseconds(HOUR_MS - 1)), RelativeTime::Minutes(60));
    }

    #[test]
    fn hours_round_up() {
        assert_eq!(ago(Duration::hours(1)), RelativeTime::Hours(1));
        assert_eq!(ago(Duration::minutes(61)), RelativeTime::Hours(2));
        assert_eq!(ago(Duration::milliseconds(DAY_MS - 1)), RelativeTime::Hours(24));
    }

    #[test]
    fn days_round_up() {
        assert_eq!(ago(Duration::days(1)), RelativeTime::Days(1));
        assert_eq!(ago(Duration::hours(25)), RelativeTime::Days(2));
        assert_eq!(ago(Duration::days(400)), RelativeTime::Days(400));
    }

    #[test]
    fn english_labels() {
        assert_eq!(RelativeTime::JustNow.to_string(), "just now");
        assert_eq!(ago(Duration::seconds(61)).to_string(), "2 minutes ago");
        assert_eq!(RelativeTime::Minutes(1).to_string(), "1 minute ago");
        assert_eq!(RelativeTime::Hours(3).to_string(), "3 hours ago");
        assert_eq!(RelativeTime::Days(1).to_string(), "1 day ago");
    }

    #[test]
    fn chinese_labels() {
        assert_eq!(RelativeTime::JustNow.localized(Locale::Zh), "刚刚");
        assert_eq!(RelativeTime::Minutes(2).localized(Locale::Zh), "2 分钟前");
        assert_eq!(RelativeTime::Hours(5).localized(Locale::Zh), "5 小时前");
        assert_eq!(RelativeTime::Days(7).localized(Locale::Zh), "7 天前");
        assert_eq!(RelativeTime::Days(7).localized(Locale::En), "7 days ago");
    }
}
