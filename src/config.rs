//! Configuration for loading and exporting station inventories.
//!
//! Provides loader settings (state source, unknown-code policy) and export
//! settings (output path, Parquet compression).

use crate::error::{InventoryError, Result};
use crate::models::{StateSource, UnknownStatePolicy};
use polars::prelude::ParquetCompression;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported compression algorithms for parquet files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompressionAlgorithm {
    /// Snappy compression - good balance of speed and compression
    #[default]
    Snappy,
    /// ZSTD compression - better compression ratio, slower
    Zstd,
    /// LZ4 compression - fastest, lower compression ratio
    Lz4,
    /// No compression
    Uncompressed,
}

impl CompressionAlgorithm {
    /// Convert to polars ParquetCompression type
    pub fn to_polars_compression(&self) -> ParquetCompression {
        match self {
            CompressionAlgorithm::Snappy => ParquetCompression::Snappy,
            CompressionAlgorithm::Zstd => ParquetCompression::Zstd(None),
            CompressionAlgorithm::Lz4 => ParquetCompression::Lz4Raw,
            CompressionAlgorithm::Uncompressed => ParquetCompression::Uncompressed,
        }
    }
}

impl FromStr for CompressionAlgorithm {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "snappy" => Ok(Self::Snappy),
            "zstd" => Ok(Self::Zstd),
            "lz4" => Ok(Self::Lz4),
            "none" | "uncompressed" => Ok(Self::Uncompressed),
            other => Err(InventoryError::configuration(format!(
                "Unsupported compression '{}', expected snappy, zstd, lz4 or none",
                other
            ))),
        }
    }
}

/// Output file formats for the full table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Parquet,
    Csv,
}

impl ExportFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "parquet" => Some(Self::Parquet),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Settings for reading a station inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub state_source: StateSource,
    pub unknown_state_policy: UnknownStatePolicy,
}

impl LoaderConfig {
    pub fn with_state_source(mut self, state_source: StateSource) -> Self {
        self.state_source = state_source;
        self
    }

    pub fn with_unknown_state_policy(mut self, policy: UnknownStatePolicy) -> Self {
        self.unknown_state_policy = policy;
        self
    }

    /// Abort on unrecognised state codes
    pub fn strict(self) -> Self {
        self.with_unknown_state_policy(UnknownStatePolicy::Fail)
    }
}

/// Settings for writing the full table to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: PathBuf,
    pub compression: CompressionAlgorithm,
}

impl ExportConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            compression: CompressionAlgorithm::default(),
        }
    }

    pub fn with_compression(mut self, compression: CompressionAlgorithm) -> Self {
        self.compression = compression;
        self
    }

    /// Resolve the output format, rejecting unknown extensions
    pub fn format(&self) -> Result<ExportFormat> {
        ExportFormat::from_path(&self.output_path).ok_or_else(|| {
            InventoryError::configuration(format!(
                "Cannot infer export format from '{}', use a .parquet or .csv extension",
                self.output_path.display()
            ))
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.format().map(|_| ())
    }
}
