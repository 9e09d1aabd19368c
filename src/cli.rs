//! Command-line interface components.

use crate::config::{CompressionAlgorithm, ExportConfig, LoaderConfig};
use crate::constants::{DEFAULT_CASES_FILE, DEFAULT_INVENTORY_FILE, DEFAULT_PREVIEW_ROWS};
use crate::error::Result;
use crate::models::{StateSource, UnknownStatePolicy};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "station_inventory")]
#[command(about = "Load a GHCN-Daily station inventory and resolve US state names")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the fixed-width station inventory
    #[arg(value_name = "INVENTORY_PATH", default_value = DEFAULT_INVENTORY_FILE)]
    pub inventory_path: PathBuf,

    /// Number of rows to preview
    #[arg(short = 'n', long, default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub rows: usize,

    /// Print every row instead of a preview
    #[arg(long, conflicts_with = "rows")]
    pub all: bool,

    /// Derive the state code from the station identifier instead of the state column
    #[arg(long)]
    pub state_from_id: bool,

    /// Fail on state codes that are not US states or territories
    #[arg(long)]
    pub strict: bool,

    /// Report yearly case counts per state from a CSV instead of loading an inventory
    #[arg(
        long,
        value_name = "CASES_CSV",
        num_args = 0..=1,
        default_missing_value = DEFAULT_CASES_FILE
    )]
    pub cases: Option<PathBuf>,

    /// Write the full table to this file (.parquet or .csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parquet compression algorithm (snappy, zstd, lz4, none)
    #[arg(long, default_value = "snappy")]
    pub compression: String,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Loader settings selected by the flags
    pub fn loader_config(&self) -> LoaderConfig {
        let state_source = if self.state_from_id {
            StateSource::StationId
        } else {
            StateSource::Column
        };
        let policy = if self.strict {
            UnknownStatePolicy::Fail
        } else {
            UnknownStatePolicy::Blank
        };

        LoaderConfig::default()
            .with_state_source(state_source)
            .with_unknown_state_policy(policy)
    }

    /// Rows to print; `None` prints everything
    pub fn preview_rows(&self) -> Option<usize> {
        (!self.all).then_some(self.rows)
    }

    /// Export settings, if an output file was requested
    pub fn export_config(&self) -> Result<Option<ExportConfig>> {
        let Some(output) = &self.output else {
            return Ok(None);
        };
        let compression: CompressionAlgorithm = self.compression.parse()?;
        let config = ExportConfig::new(output).with_compression(compression);
        config.validate()?;
        Ok(Some(config))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_script_behaviour() {
        let args = Args::parse_from(["station_inventory"]);
        assert_eq!(args.inventory_path, PathBuf::from("ghcnd-stations.txt"));

        let config = args.loader_config();
        assert_eq!(args.preview_rows(), Some(5));
        assert!(args.cases.is_none());
        assert_eq!(config.state_source, StateSource::Column);
        assert_eq!(config.unknown_state_policy, UnknownStatePolicy::Blank);
        assert!(args.export_config().unwrap().is_none());
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "station_inventory",
            "stations.txt",
            "--all",
            "--strict",
            "--state-from-id",
            "-o",
            "out.parquet",
            "--compression",
            "zstd",
            "-vv",
        ]);

        let config = args.loader_config();
        assert_eq!(args.preview_rows(), None);
        assert_eq!(config.unknown_state_policy, UnknownStatePolicy::Fail);
        assert_eq!(config.state_source, StateSource::StationId);

        let export = args.export_config().unwrap().unwrap();
        assert_eq!(export.output_path, PathBuf::from("out.parquet"));
        assert_eq!(export.compression, CompressionAlgorithm::Zstd);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_cases_flag() {
        let args = Args::parse_from(["station_inventory", "--cases"]);
        assert_eq!(
            args.cases,
            Some(PathBuf::from("coccidioidomycosis_cases_by_state_2014_2022.csv"))
        );

        let args = Args::parse_from(["station_inventory", "--cases", "cases.csv", "-o", "cases.csv"]);
        assert_eq!(args.cases, Some(PathBuf::from("cases.csv")));
        assert!(args.export_config().unwrap().is_some());
    }

    #[test]
    fn test_invalid_export_settings() {
        let args = Args::parse_from(["station_inventory", "-o", "out.txt"]);
        assert!(args.export_config().is_err());

        let args = Args::parse_from(["station_inventory", "-o", "out.csv", "--compression", "gzip"]);
        assert!(args.export_config().is_err());
    }

    #[test]
    fn test_conflicting_flags() {
        assert!(Args::try_parse_from(["station_inventory", "--all", "-n", "3"]).is_err());
        assert!(Args::try_parse_from(["station_inventory", "-q", "-v"]).is_err());
    }
}
