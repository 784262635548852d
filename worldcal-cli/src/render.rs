//! Terminal rendering for worldcal-core types.

use owo_colors::OwoColorize;
use worldcal_core::datetime::month_label;
use worldcal_core::MonthGrid;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let title = month_label(self.days[0].date);
        lines.push(format!("{:^27}", title).bold().to_string());
        lines.push(
            WEEKDAYS
                .iter()
                .map(|d| format!("{d:>3}"))
                .collect::<Vec<_>>()
                .join(" "),
        );

        let mut row: Vec<String> = vec!["   ".to_string(); self.leading_blanks as usize];
        for day in &self.days {
            // Pad before styling so ANSI escapes do not skew the columns.
            let padded = format!("{:>3}", day.date.format("%-d").to_string());
            let cell = if day.events.is_empty() {
                padded
            } else {
                padded.bold().to_string()
            };
            row.push(cell);
            if row.len() == 7 {
                lines.push(row.join(" "));
                row.clear();
            }
        }
        if !row.is_empty() {
            while row.len() < 7 {
                row.push("   ".to_string());
            }
            lines.push(row.join(" "));
        }

        lines.join("\n")
    }
}
