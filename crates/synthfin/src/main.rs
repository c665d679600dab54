use std::io;
use std::path::PathBuf;

use clap::Parser;
use synthfin::{Dashboard, RunConfig, export_csv, init_logging, prompt_selection};
use synthfin::{render_insights, render_preview};
use synthfin_core::config::DEFAULT_PLATFORM;
use synthfin_core::{FinancialSummary, SeriesGenerator};

#[derive(Parser, Debug)]
#[command(name = "synthfin")]
#[command(about = "Generate and chart a synthetic financial history for a platform")]
struct Args {
    /// Platform to generate; prompts with a numbered menu when omitted
    #[arg(short, long)]
    platform: Option<String>,

    /// First year of the series (default: 2010)
    #[arg(long)]
    start_year: Option<i32>,

    /// Last year of the series, inclusive (default: 2025)
    #[arg(long)]
    end_year: Option<i32>,

    /// Seed for reproducible noise; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory the CSV is written to (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// YAML run configuration; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the data directory holding the log file (default: ~/.synthfin/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Skip the chart dashboard
    #[arg(long)]
    no_charts: bool,

    /// Skip writing the CSV file
    #[arg(long)]
    no_export: bool,
}

impl Args {
    /// Command-line values as a config layer
    fn overrides(&self) -> RunConfig {
        RunConfig {
            platform: self.platform.clone(),
            start_year: self.start_year,
            end_year: self.end_year,
            seed: self.seed,
            output_dir: self.output_dir.clone(),
            platforms: Vec::new(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".synthfin")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let file_config = match &args.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading run configuration");
            RunConfig::load(path)?
        }
        None => RunConfig::default(),
    };
    let config = file_config.merge(args.overrides());
    let catalog = config.catalog();
    let range = config.year_range()?;

    println!("SYNTHETIC PLATFORM FINANCIALS ({}-{})", range.start(), range.end());
    println!("============================================================");

    let platform = match &config.platform {
        Some(name) => name.clone(),
        None => {
            let selection = prompt_selection(io::stdin().lock(), io::stdout(), &catalog.names())?;
            if selection.is_fallback() {
                tracing::warn!(platform = selection.name(), "invalid menu choice, using first entry");
            }
            selection.into_name()
        }
    };

    if !catalog.contains(&platform) && platform != DEFAULT_PLATFORM {
        tracing::warn!(%platform, "unknown platform, using the default profile");
        println!("Unknown platform {platform:?}, using the default profile.");
    }

    let generator = SeriesGenerator::new(catalog.resolve(&platform), range);
    println!("Generating financial data for {}...", generator.config().name);

    let table = match config.seed {
        Some(seed) => generator.generate_seeded(seed),
        None => generator.generate_random(),
    };
    tracing::info!(
        platform = %generator.config().name,
        start = range.start(),
        end = range.end(),
        seed = ?config.seed,
        "generated table"
    );

    if !args.no_export {
        let output_dir = config.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
        let path = export_csv(&table, &output_dir)?;
        println!("Data saved: {}", path.display());
    }

    println!("\nData preview:");
    print!("{}", render_preview(&table, 5));

    let summary = FinancialSummary::from_table(&table);
    println!();
    print!("{}", render_insights(&table, &summary));

    if !args.no_charts {
        let mut dashboard = Dashboard::new(table);
        ratatui::run(|terminal| dashboard.run(terminal))?;

        if let Err(err) = ratatui::try_restore() {
            tracing::error!("Failed to restore terminal: {err}");
        }
    }

    println!("\nFinancial analysis of {} complete.", summary.platform);
    println!("Period: {}-{}", summary.start_year, summary.end_year);
    tracing::info!("synthfin shutting down");

    Ok(())
}
