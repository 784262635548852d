//! Shared date display formatting.
//!
//! All user-facing date strings go through these helpers so the grid, the
//! slides, and both export formats agree on wording.

use chrono::NaiveDate;

/// "March 2024" — the month grouping key used by the slide builder.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "March 5, 2024"
pub fn full_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Tuesday, March 5"
pub fn weekday_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// "March 5, 2024 - April 9, 2024"
pub fn date_range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", full_date(start), full_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(month_label(date), "March 2024");
        assert_eq!(full_date(date), "March 5, 2024");
        assert_eq!(weekday_date(date), "Tuesday, March 5");
    }

    #[test]
    fn range_label_joins_both_ends() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(date_range_label(start, end), "March 5, 2024 - July 4, 2024");
    }
}
