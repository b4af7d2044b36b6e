use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 10] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%Y.%m.%d",
];

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

// Parsed with a leading day of 1 prepended to the input.
const MONTH_YEAR_FORMATS: [&str; 4] = ["%B %Y", "%B, %Y", "%m/%Y", "%Y-%m"];

const TWO_DIGIT_YEAR_FORMATS: [&str; 2] = ["%m/%d/%y", "%m-%d-%y"];

/// Parses free-form birthday text into a calendar date.
///
/// Month names may be written in full or abbreviated. Date-times are
/// accepted and reduced to their calendar date without any timezone shift.
/// A month and year without a day means the first of that month. Two-digit
/// years below 50 land in the 2000s, the rest in the 1900s; any other year
/// must be written with four digits.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_full_year(trimmed).or_else(|| parse_two_digit_year(trimmed))
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_full_year(input: &str) -> Option<NaiveDate> {
    let dates = DATE_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok());
    let datetimes = DATETIME_FORMATS
        .iter()
        .filter_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|dt| dt.date());
    let rfc3339 = DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.date_naive());
    let first_of_month = format!("1 {input}");
    let month_years = MONTH_YEAR_FORMATS.iter().filter_map(|fmt| {
        NaiveDate::parse_from_str(&first_of_month, &format!("%d {fmt}")).ok()
    });

    dates
        .chain(datetimes)
        .chain(rfc3339)
        .chain(month_years)
        .find(|date| has_four_digit_year(input, date.year()))
}

fn parse_two_digit_year(input: &str) -> Option<NaiveDate> {
    let date = TWO_DIGIT_YEAR_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())?;
    let short = date.year().rem_euclid(100);
    let year = if short < 50 { 2000 + short } else { 1900 + short };
    date.with_year(year)
}

// chrono's `%Y` reads one to four digits, so "March 1990" would otherwise
// match `%B %d %Y` as the 19th of March in year 90.
fn has_four_digit_year(input: &str, year: i32) -> bool {
    input
        .split(|ch: char| !ch.is_ascii_digit())
        .any(|run| run.len() == 4 && run.parse::<i32>() == Ok(year))
}
