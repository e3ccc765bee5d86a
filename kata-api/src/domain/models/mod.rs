mod booking;
mod event;
mod expense;
mod note;
mod recipe;
mod survey;
mod task;

pub use booking::Booking;
pub use event::CalendarEvent;
pub use expense::Expense;
pub use note::Note;
pub use recipe::Recipe;
pub use survey::SurveyOption;
pub use task::TaskItem;

use std::sync::LazyLock;

use time::format_description::BorrowedFormatItem;
use time::Date;

static DATE_FORMAT: LazyLock<Vec<BorrowedFormatItem<'static>>> = LazyLock::new(|| {
    time::format_description::parse("[year]-[month]-[day]").expect("valid date format")
});

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, DATE_FORMAT.as_slice())
}

/// Serde adapter for `YYYY-MM-DD` date fields.
pub(crate) mod date_string {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date
            .format(DATE_FORMAT.as_slice())
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let value = String::deserialize(deserializer)?;
        Date::parse(&value, DATE_FORMAT.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2024-03-09").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), Month::March);
        assert_eq!(date.day(), 9);
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("next tuesday").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }
}
