use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;
use worldcal_core::{export, EventFilter, EventStore, ExportFormat, ExportSelection};

/// Output format as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportKind {
    /// Paged PDF document
    Pdf,
    /// Interactive HTML slideshow
    Html,
}

impl From<ExportKind> for ExportFormat {
    fn from(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Pdf => ExportFormat::Paged,
            ExportKind::Html => ExportFormat::Interactive,
        }
    }
}

pub async fn run(
    format: ExportKind,
    months: &[String],
    year: Option<i32>,
    country: Option<String>,
    category: Option<&str>,
    out: Option<PathBuf>,
) -> Result<()> {
    let months = months
        .iter()
        .map(|m| parse_month(m))
        .collect::<Result<Vec<u32>>>()?;
    let year = year.unwrap_or_else(|| Local::now().year());
    let category = category.map(super::parse_category).transpose()?;

    let mut store = EventStore::new();
    super::import_holidays(&mut store, year).await;

    let filter = EventFilter { country, category };
    let events = store.filter(&filter);

    let selection = ExportSelection::from_months(&events, &months)
        .context("Nothing to export. Pick at least one month that has events")?;

    let today = Local::now().date_naive();
    let artifact = export(&selection, format.into(), today)?;

    let path = out.unwrap_or_else(|| PathBuf::from(".")).join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} {} ({} events, {})",
        "Saved".green(),
        path.display(),
        selection.events.len(),
        worldcal_core::datetime::date_range_label(selection.start, selection.end)
    );

    Ok(())
}

/// Accept month numbers ("3") and English names ("march").
fn parse_month(arg: &str) -> Result<u32> {
    if let Ok(number) = arg.parse::<u32>() {
        return Ok(number);
    }

    const MONTHS: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    match MONTHS.iter().position(|m| *m == arg.to_lowercase()) {
        Some(index) => Ok(index as u32 + 1),
        None => bail!("Unknown month '{arg}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_parse_by_number_and_name() {
        assert_eq!(parse_month("3").unwrap(), 3);
        assert_eq!(parse_month("march").unwrap(), 3);
        assert_eq!(parse_month("December").unwrap(), 12);
        assert!(parse_month("mars").is_err());
    }
}
