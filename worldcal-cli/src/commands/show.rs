use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;
use worldcal_core::{EventFilter, EventStore, MonthGrid};

use crate::render::Render;

pub async fn run(month: Option<&str>, country: Option<String>) -> Result<()> {
    let (year, month) = match month {
        Some(arg) => parse_month_arg(arg)?,
        None => {
            let today = Local::now().date_naive();
            (today.year(), today.month())
        }
    };

    let mut store = EventStore::new();
    super::import_holidays(&mut store, year).await;

    let filter = EventFilter {
        country,
        ..Default::default()
    };
    let events = store.filter(&filter);

    let grid = MonthGrid::build(year, month, &events)?;
    println!("{}", grid.render());

    let busy_days: Vec<_> = grid.days.iter().filter(|d| !d.events.is_empty()).collect();
    if busy_days.is_empty() {
        println!("{}", "No events this month".dimmed());
        return Ok(());
    }

    for day in busy_days {
        for event in &day.events {
            let tag = format!("[{}]", event.country);
            println!(
                "  {}  {} {}",
                format!("{:>2}", day.date.day()).bold(),
                event.title,
                tag.dimmed()
            );
        }
    }

    Ok(())
}

/// Parse "YYYY-MM".
fn parse_month_arg(arg: &str) -> Result<(i32, u32)> {
    let (year, month) = arg
        .split_once('-')
        .with_context(|| format!("Invalid month '{arg}'. Expected YYYY-MM"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{arg}'"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month in '{arg}'"))?;
    Ok((year, month))
}
