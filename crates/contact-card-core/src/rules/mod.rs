pub mod birthday;

pub use birthday::{
    calculate_age, calculate_age_today, format_birthday, BirthdayFormat, DayStyle, MonthStyle,
    YearStyle,
};
