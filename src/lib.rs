//! Station Inventory Library
//!
//! Loads GHCN-Daily fixed-width station inventories into an ordered table of
//! station identifiers, two-letter US state codes and full state names.
//!
//! This library provides tools for:
//! - Positional slicing of fixed-width inventory lines, tolerant of short lines
//! - Resolving state codes through an immutable state directory
//! - Rendering a text preview of the table
//! - Exporting the table to Parquet or CSV via polars
//! - Cleaning yearly per-state case counts into state-aligned series

pub mod cases;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod states;
pub mod table;

pub use config::{CompressionAlgorithm, ExportConfig, LoaderConfig};
pub use error::{InventoryError, Result};
pub use loader::{InventoryLoader, load_station_inventory};
pub use models::{LoadStats, StateSource, StationInventory, StationRecord, UnknownStatePolicy};
pub use states::StateDirectory;
