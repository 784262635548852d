use anyhow::Result;
use owo_colors::OwoColorize;
use worldcal_core::source::{CountrySource, TimezoneSource};
use worldcal_sources::{IanaTimezones, RestCountriesClient};

pub async fn run(code: &str) -> Result<()> {
    let countries = RestCountriesClient::new().fetch_countries().await;
    if countries.is_empty() {
        println!("{}", "No country data available".dimmed());
        return Ok(());
    }

    let Some(country) = countries
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
    else {
        anyhow::bail!("Country '{}' not found", code);
    };

    let timezones = IanaTimezones::new();
    let zone = timezones.resolve_timezone(country);
    let dst = if timezones.observes_dst(&zone) {
        "yes"
    } else {
        "no"
    };

    println!("{} {}", country.name.bold(), format!("[{}]", country.code).dimmed());
    println!("  Capital:      {}", country.capital);
    println!("  Flag:         {}", country.flag.dimmed());
    println!("  Timezone:     {}", zone);
    println!("  Local time:   {}", timezones.current_time(&zone));
    println!("  UTC offset:   {}", timezones.utc_offset(&zone));
    println!("  Observes DST: {}", dst);

    Ok(())
}
