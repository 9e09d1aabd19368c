use anyhow::Context;
use clap::Parser;
use colored::*;
use station_inventory::ExportConfig;
use station_inventory::cases::load_case_table;
use station_inventory::cli::Args;
use station_inventory::table::{export, render_preview, write_dataframe};
use station_inventory::{InventoryLoader, StateDirectory};
use std::path::Path;
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    if let Err(error) = run(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let export_config = args.export_config()?;
    if let Some(cases_path) = &args.cases {
        return run_cases(args, cases_path, export_config);
    }

    let loader = InventoryLoader::new(StateDirectory::us(), args.loader_config());

    let inventory = loader.load(&args.inventory_path).with_context(|| {
        format!(
            "Failed to load station inventory {}",
            args.inventory_path.display()
        )
    })?;

    let shown = match args.preview_rows() {
        Some(rows) => inventory.head(rows),
        None => &inventory.records[..],
    };
    println!("{}", render_preview(shown));

    if let Some(config) = export_config {
        let rows = export(&inventory, &config)
            .with_context(|| format!("Failed to export to {}", config.output_path.display()))?;
        if !args.quiet {
            eprintln!(
                "{} {} rows to {}",
                "Wrote".bright_green(),
                rows.to_string().bright_white().bold(),
                config.output_path.display()
            );
        }
    }

    if !args.quiet {
        eprintln!("{} {}", "Loaded".bright_green(), inventory.stats.summary());
    }

    Ok(())
}

/// Print the per-year case report and optionally export the wide table
fn run_cases(
    args: &Args,
    cases_path: &Path,
    export_config: Option<ExportConfig>,
) -> anyhow::Result<()> {
    let table = load_case_table(cases_path)
        .with_context(|| format!("Failed to load case counts {}", cases_path.display()))?;

    println!("{}", table.render());

    if let Some(config) = export_config {
        let mut df = table.to_dataframe()?;
        let rows = write_dataframe(&mut df, &config)
            .with_context(|| format!("Failed to export to {}", config.output_path.display()))?;
        if !args.quiet {
            eprintln!(
                "{} {} rows to {}",
                "Wrote".bright_green(),
                rows.to_string().bright_white().bold(),
                config.output_path.display()
            );
        }
    }

    Ok(())
}

/// Set up structured logging on stderr based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_inventory={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}
