use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// One of the 7 days of the reminder week. Monday opens the week and Sunday
/// closes it, so a date library reporting Sunday as day 0 must be remapped to
/// the last slot before it reaches this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayTag {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// The week in reminder order. All "days so far" slicing goes through this
/// constant instead of relying on implicit array positions.
pub const WEEK: [WeekdayTag; 7] = [
    WeekdayTag::Mon,
    WeekdayTag::Tue,
    WeekdayTag::Wed,
    WeekdayTag::Thu,
    WeekdayTag::Fri,
    WeekdayTag::Sat,
    WeekdayTag::Sun,
];

impl WeekdayTag {
    /// Zero-based slot in `WEEK`, `Mon` = 0 .. `Sun` = 6.
    pub fn position(self) -> usize {
        match self {
            WeekdayTag::Mon => 0,
            WeekdayTag::Tue => 1,
            WeekdayTag::Wed => 2,
            WeekdayTag::Thu => 3,
            WeekdayTag::Fri => 4,
            WeekdayTag::Sat => 5,
            WeekdayTag::Sun => 6,
        }
    }

    /// Tag for a calendar date. `num_days_from_monday` already puts Sunday in
    /// the last slot, which is the ordering this module wants.
    pub fn from_date(date: NaiveDate) -> Self {
        WEEK[date.weekday().num_days_from_monday() as usize]
    }

    /// The elapsed part of the week: Monday through `self`, in week order.
    pub fn days_so_far(self) -> &'static [WeekdayTag] {
        &WEEK[..=self.position()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WeekdayTag::Mon => "mon",
            WeekdayTag::Tue => "tue",
            WeekdayTag::Wed => "wed",
            WeekdayTag::Thu => "thu",
            WeekdayTag::Fri => "fri",
            WeekdayTag::Sat => "sat",
            WeekdayTag::Sun => "sun",
        }
    }
}

impl Display for WeekdayTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum InvalidWeekdayTagError {
    #[error("Invalid weekday tag: {0}")]
    Malformed(String),
}

impl FromStr for WeekdayTag {
    type Err = InvalidWeekdayTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(WeekdayTag::Mon),
            "tue" => Ok(WeekdayTag::Tue),
            "wed" => Ok(WeekdayTag::Wed),
            "thu" => Ok(WeekdayTag::Thu),
            "fri" => Ok(WeekdayTag::Fri),
            "sat" => Ok(WeekdayTag::Sat),
            "sun" => Ok(WeekdayTag::Sun),
            _ => Err(InvalidWeekdayTagError::Malformed(s.to_string())),
        }
    }
}

/// Monday 00:00 of the week containing `now`. Together with `now` itself this
/// bounds the window of completion events a reminder query may consider.
pub fn week_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let date = now.date_naive();
    let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    monday.and_time(NaiveTime::MIN).and_utc()
}
