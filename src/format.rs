//! Locale-formatted display strings
//!
//! Numbers and dates follow ru-RU conventions: no-break space thousands
//! separator, decimal comma, `dd.mm.yyyy` dates and Russian month names.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

pub const DEFAULT_CURRENCY: &str = "₽";

const GROUP_SEPARATOR: char = '\u{a0}';
const MAX_FRACTION_DIGITS: u32 = 3;

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Short or long date rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `05.01.2026`
    #[default]
    Short,
    /// `понедельник, 5 января 2026 г. в 14:30`
    Long,
}

/// Format `amount` with ru-RU grouping followed by `currency`
pub fn format_currency(amount: f64, currency: &str) -> String {
    format!("{} {}", format_number(amount), currency)
}

/// ru-RU number formatting with up to three fraction digits
pub fn format_number(amount: f64) -> String {
    if !amount.is_finite() {
        return "не число".to_string();
    }

    let scale = 10u64.pow(MAX_FRACTION_DIGITS);
    let scaled = (amount.abs() * scale as f64).round() as u64;
    let integer = scaled / scale;
    let fraction = scaled % scale;

    let mut out = String::new();
    if amount < 0.0 && scaled > 0 {
        out.push('-');
    }
    out.push_str(&group_digits(integer));

    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

pub fn format_date(date: NaiveDateTime, style: DateStyle) -> String {
    match style {
        DateStyle::Short => date.format("%d.%m.%Y").to_string(),
        DateStyle::Long => format!(
            "{}, {} {} {} г. в {:02}:{:02}",
            weekday_name(date.weekday()),
            date.day(),
            MONTHS_GENITIVE[date.month0() as usize],
            date.year(),
            date.hour(),
            date.minute()
        ),
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "понедельник",
        Weekday::Tue => "вторник",
        Weekday::Wed => "среда",
        Weekday::Thu => "четверг",
        Weekday::Fri => "пятница",
        Weekday::Sat => "суббота",
        Weekday::Sun => "воскресенье",
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
