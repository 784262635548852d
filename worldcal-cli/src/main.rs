mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::export::ExportKind;

#[derive(Parser)]
#[command(name = "worldcal")]
#[command(about = "Browse world holidays, annotate a calendar, and export documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries from the reference source
    Countries,

    /// Import public holidays and list them by day
    Holidays {
        /// Holiday year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Only show holidays for this country code
        #[arg(short, long)]
        country: Option<String>,

        /// Only show events in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Render a month grid with its events
    Show {
        /// Month to render (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Only show events for this country code
        #[arg(short, long)]
        country: Option<String>,
    },

    /// Country details and timezone information
    Info {
        /// Country code (e.g. "DE")
        country: String,
    },

    /// Export selected months as a PDF or an interactive HTML slideshow
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportKind,

        /// Months to include (numbers or names, e.g. "3,4" or "march,april")
        #[arg(long, value_delimiter = ',', required = true)]
        months: Vec<String>,

        /// Holiday year to draw events from (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Only include events for this country code
        #[arg(short, long)]
        country: Option<String>,

        /// Only include events in this category
        #[arg(long)]
        category: Option<String>,

        /// Output directory (defaults to the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Countries => commands::countries::run().await,
        Commands::Holidays {
            year,
            country,
            category,
        } => commands::holidays::run(year, country, category.as_deref()).await,
        Commands::Show { month, country } => commands::show::run(month.as_deref(), country).await,
        Commands::Info { country } => commands::info::run(&country).await,
        Commands::Export {
            format,
            months,
            year,
            country,
            category,
            out,
        } => commands::export::run(format, &months, year, country, category.as_deref(), out).await,
    }
}
