use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid date \"{input}\" (expected DD/MM/YYYY)")]
    InvalidDayMonthYear { input: String },

    #[error("Invalid week \"{input}\" (expected YYYY-Www)")]
    InvalidWeek { input: String },

    #[error("Invalid month \"{input}\" (expected YYYY-MM)")]
    InvalidMonth { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("\"{value}\" is not a valid {label} (choose one of: {options})")]
    UnknownOption {
        label: &'static str,
        value: String,
        options: String,
    },

    #[error("{label} dropdown is closed")]
    DropdownClosed { label: &'static str },

    #[error("{0}")]
    MissingField(&'static str),

    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },

    #[error("Duplicate {collection} id: {id}")]
    DuplicateId { collection: &'static str, id: String },

    #[error("No product with id {id}")]
    UnknownProduct { id: String },

    #[error("Failed to read {}: {source}", path.display())]
    ReadData {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    ParseData { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_day_month_year() {
        let e = AppError::InvalidDayMonthYear {
            input: "2025-06-16".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "2025-06-16" (expected DD/MM/YYYY)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_unknown_option() {
        let e = AppError::UnknownOption {
            label: "machine",
            value: "Lathe".to_string(),
            options: "Drilling, Milling 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#""Lathe" is not a valid machine (choose one of: Drilling, Milling 1)"#
        );
    }

    #[test]
    fn app_error_display_missing_field_is_message() {
        let e = AppError::MissingField("Please select a week");
        assert_eq!(e.to_string(), "Please select a week");
    }

    #[test]
    fn app_error_display_duplicate_id() {
        let e = AppError::DuplicateId {
            collection: "alert",
            id: "3".to_string(),
        };
        assert_eq!(e.to_string(), "Duplicate alert id: 3");
    }
}
