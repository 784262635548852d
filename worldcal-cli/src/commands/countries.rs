use anyhow::Result;
use owo_colors::OwoColorize;
use worldcal_core::source::CountrySource;
use worldcal_sources::RestCountriesClient;

pub async fn run() -> Result<()> {
    let countries = RestCountriesClient::new().fetch_countries().await;

    if countries.is_empty() {
        println!("{}", "No country data available".dimmed());
        return Ok(());
    }

    for country in &countries {
        let code = format!("[{}]", country.code);
        println!(
            "{} {} {}",
            code.dimmed(),
            country.name,
            format!("capital: {}", country.capital).dimmed()
        );
    }
    println!("\n{} countries", countries.len());

    Ok(())
}
