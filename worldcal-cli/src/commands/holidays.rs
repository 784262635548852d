use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;
use worldcal_core::datetime;
use worldcal_core::{EventFilter, EventStore};

pub async fn run(year: Option<i32>, country: Option<String>, category: Option<&str>) -> Result<()> {
    let year = year.unwrap_or_else(|| Local::now().year());
    let category = category.map(super::parse_category).transpose()?;

    let mut store = EventStore::new();
    super::import_holidays(&mut store, year).await;

    let filter = EventFilter { country, category };
    let mut events = store.filter(&filter);
    events.sort_by_key(|e| e.date);

    if events.is_empty() {
        println!("{}", "No holidays found".dimmed());
        return Ok(());
    }

    // Group by day and print, one header per date.
    let mut current: Option<NaiveDate> = None;
    for event in &events {
        if current != Some(event.date) {
            if current.is_some() {
                println!();
            }
            println!("{}", datetime::full_date(event.date).bold());
            current = Some(event.date);
        }

        let tag = format!("[{}]", event.country);
        match &event.description {
            Some(description) => {
                println!("  {} {} {}", event.title, description.dimmed(), tag.dimmed())
            }
            None => println!("  {} {}", event.title, tag.dimmed()),
        }
    }

    Ok(())
}
