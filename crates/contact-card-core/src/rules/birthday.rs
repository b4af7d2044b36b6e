use crate::error::CoreError;
use crate::time::{local_today, parse_calendar_date};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayStyle {
    #[default]
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonthStyle {
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
    #[serde(rename = "long")]
    Long,
    #[default]
    #[serde(rename = "short")]
    Short,
    #[serde(rename = "narrow")]
    Narrow,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YearStyle {
    #[default]
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "2-digit")]
    TwoDigit,
}

impl DayStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            DayStyle::Numeric => "numeric",
            DayStyle::TwoDigit => "2-digit",
        }
    }
}

impl MonthStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            MonthStyle::Numeric => "numeric",
            MonthStyle::TwoDigit => "2-digit",
            MonthStyle::Long => "long",
            MonthStyle::Short => "short",
            MonthStyle::Narrow => "narrow",
        }
    }

    fn is_textual(self) -> bool {
        matches!(self, MonthStyle::Long | MonthStyle::Short | MonthStyle::Narrow)
    }
}

impl YearStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            YearStyle::Numeric => "numeric",
            YearStyle::TwoDigit => "2-digit",
        }
    }
}

impl FromStr for DayStyle {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(DayStyle::Numeric),
            "2-digit" | "two-digit" => Ok(DayStyle::TwoDigit),
            _ => Err(CoreError::InvalidDayStyle(raw.to_string())),
        }
    }
}

impl FromStr for MonthStyle {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(MonthStyle::Numeric),
            "2-digit" | "two-digit" => Ok(MonthStyle::TwoDigit),
            "long" => Ok(MonthStyle::Long),
            "short" => Ok(MonthStyle::Short),
            "narrow" => Ok(MonthStyle::Narrow),
            _ => Err(CoreError::InvalidMonthStyle(raw.to_string())),
        }
    }
}

impl FromStr for YearStyle {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(YearStyle::Numeric),
            "2-digit" | "two-digit" => Ok(YearStyle::TwoDigit),
            _ => Err(CoreError::InvalidYearStyle(raw.to_string())),
        }
    }
}

/// How a parsed birthday is displayed. Defaults to `Mar 3, 1999`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayFormat {
    pub day: DayStyle,
    pub month: MonthStyle,
    pub year: YearStyle,
}

/// Formats birthday text using US ordering.
///
/// Textual months render as `March 3, 1999`; numeric months as `3/3/1999`.
/// Returns `None` when the text is not a recognizable date, in which case
/// callers show the raw text instead.
pub fn format_birthday(raw: &str, format: &BirthdayFormat) -> Option<String> {
    let date = parse_calendar_date(raw)?;

    let day = match format.day {
        DayStyle::Numeric => date.day().to_string(),
        DayStyle::TwoDigit => format!("{:02}", date.day()),
    };
    let year = match format.year {
        YearStyle::Numeric => date.year().to_string(),
        YearStyle::TwoDigit => format!("{:02}", date.year().rem_euclid(100)),
    };
    let month = match format.month {
        MonthStyle::Numeric => date.month().to_string(),
        MonthStyle::TwoDigit => format!("{:02}", date.month()),
        MonthStyle::Long => date.format("%B").to_string(),
        MonthStyle::Short => date.format("%b").to_string(),
        MonthStyle::Narrow => date.format("%B").to_string().chars().take(1).collect(),
    };

    if format.month.is_textual() {
        Some(format!("{month} {day}, {year}"))
    } else {
        Some(format!("{month}/{day}/{year}"))
    }
}

/// Age in whole years on `today` for someone born on the date in `raw`.
///
/// The age increments on the anniversary itself. Returns `None` when the
/// text is not a recognizable date.
pub fn calculate_age(raw: &str, today: NaiveDate) -> Option<i32> {
    let birth = parse_calendar_date(raw)?;
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

pub fn calculate_age_today(raw: &str) -> Option<i32> {
    calculate_age(raw, local_today())
}
