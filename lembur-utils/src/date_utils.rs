use thiserror::*;
use time::{macros::date, Date, Duration, Month};

#[derive(Debug, Error)]
pub enum LemburDateError {
    #[error("Invalid date: {0}")]
    DateError(#[from] time::error::ComponentRange),

    #[error("Unrecognized date: {0}")]
    UnrecognizedFormat(String),
}

/// Day zero of spreadsheet serial dates.
const SPREADSHEET_EPOCH: Date = date!(1899 - 12 - 30);
const SECONDS_PER_DAY: i64 = 86_400;

fn parse_component<T: std::str::FromStr>(component: &str, value: &str) -> Result<T, LemburDateError> {
    component
        .trim()
        .parse::<T>()
        .map_err(|_| LemburDateError::UnrecognizedFormat(value.to_string()))
}

fn build_date(year: i32, month: u8, day: u8) -> Result<Date, LemburDateError> {
    Ok(Date::from_calendar_date(year, Month::try_from(month)?, day)?)
}

/// Parses a calendar date written as `YYYY-MM-DD`.
///
/// A time part after the date (`2024-01-31T00:00:00.000Z`) is ignored, the
/// result is a plain calendar date without timezone.  Unpadded months and days
/// are accepted.
pub fn parse_calendar_date(value: &str) -> Result<Date, LemburDateError> {
    let trimmed = value.trim();
    let date_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    let mut parts = date_part.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => build_date(
            parse_component(year, value)?,
            parse_component(month, value)?,
            parse_component(day, value)?,
        ),
        _ => Err(LemburDateError::UnrecognizedFormat(value.to_string())),
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Turns the date cell of an imported overtime row into a calendar date.
///
/// Supported shapes:
/// * `YYYY-MM-DD`, optionally followed by a time
/// * `D/M/YYYY` (day first)
/// * a spreadsheet serial day number like `45292` or `45292.0`
pub fn normalize_import_date(value: &str) -> Result<Date, LemburDateError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LemburDateError::UnrecognizedFormat(value.to_string()));
    }

    if trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split('/').collect();
        if let [day, month, year] = parts.as_slice() {
            return build_date(
                parse_component(year, value)?,
                parse_component(month, value)?,
                parse_component(day, value)?,
            );
        }
        return Err(LemburDateError::UnrecognizedFormat(value.to_string()));
    }

    let whole_days = trimmed.split('.').next().unwrap_or(trimmed);
    if !whole_days.is_empty() && whole_days.bytes().all(|b| b.is_ascii_digit()) {
        let serial: i64 = parse_component(whole_days, value)?;
        return serial
            .checked_mul(SECONDS_PER_DAY)
            .map(Duration::seconds)
            .and_then(|offset| SPREADSHEET_EPOCH.checked_add(offset))
            .ok_or_else(|| LemburDateError::UnrecognizedFormat(value.to_string()));
    }

    if trimmed.contains('-') {
        return parse_calendar_date(trimmed);
    }

    Err(LemburDateError::UnrecognizedFormat(value.to_string()))
}
