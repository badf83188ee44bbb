//! Human-readable date formatting
//!
//! The client displays dates exactly as the server formats them, in the
//! style `August 30th 2026, 3:05:07 pm`.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Encode a date as an unambiguous human-readable string.
pub fn format_date(date: DateTime<Utc>) -> String {
    let day = date.day();
    let (is_pm, hour) = date.hour12();
    format!(
        "{} {}{} {}, {}:{:02}:{:02} {}",
        month_name(date.month()),
        day,
        ordinal_suffix(day),
        date.year(),
        hour,
        date.minute(),
        date.second(),
        if is_pm { "pm" } else { "am" },
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    // 11th, 12th, 13th are irregular.
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
