//! Fixed-width station inventory loading.
//!
//! Reads a GHCN-Daily style station inventory, slices the identifier and
//! state columns at fixed character offsets, and resolves each state code
//! to its full name. Every input line becomes one record, in order.

use crate::config::LoaderConfig;
use crate::constants::{COUNTRY_PREFIX_LEN, ID_COLUMNS, STATE_COLUMNS};
use crate::error::{InventoryError, Result};
use crate::models::{LoadStats, StateSource, StationInventory, StationRecord, UnknownStatePolicy};
use crate::states::StateDirectory;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Load an inventory with the US state directory and default settings
pub fn load_station_inventory(file_path: impl AsRef<Path>) -> Result<StationInventory> {
    InventoryLoader::default().load(file_path.as_ref())
}

/// Slice the characters in `[start, end)` of a line.
///
/// Ranges running past the end of the line are clamped, so short lines
/// yield a partial or empty field instead of an error.
pub fn fixed_width_field(line: &str, (start, end): (usize, usize)) -> &str {
    let byte_offset = |n: usize| line.char_indices().nth(n).map_or(line.len(), |(i, _)| i);
    let from = byte_offset(start);
    let to = byte_offset(end).max(from);
    &line[from..to]
}

/// First two letters of an identifier after its country prefix
pub fn state_code_from_id(id: &str) -> String {
    id.chars()
        .skip(COUNTRY_PREFIX_LEN)
        .filter(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect()
}

/// Loader holding the state directory and extraction settings
#[derive(Debug, Clone, Default)]
pub struct InventoryLoader {
    directory: StateDirectory,
    config: LoaderConfig,
}

impl InventoryLoader {
    pub fn new(directory: StateDirectory, config: LoaderConfig) -> Self {
        Self { directory, config }
    }

    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn directory(&self) -> &StateDirectory {
        &self.directory
    }

    /// Read and parse an inventory file
    pub fn load(&self, file_path: &Path) -> Result<StationInventory> {
        let start_time = Instant::now();

        let bytes = std::fs::read(file_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InventoryError::FileNotFound {
                path: file_path.to_path_buf(),
            },
            _ => InventoryError::Io(e),
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "{} is not valid UTF-8, decoding lossily",
                    file_path.display()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let mut inventory = self.parse_str(&text)?;
        inventory.stats.load_time = start_time.elapsed();

        info!(
            "Loaded {} from {} in {:?}",
            inventory.stats.summary(),
            file_path.display(),
            inventory.stats.load_time
        );

        Ok(inventory)
    }

    /// Parse inventory text already held in memory
    pub fn parse_str(&self, text: &str) -> Result<StationInventory> {
        let mut stats = LoadStats::default();
        let mut records = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let record = self.parse_line(line, line_num + 1, &mut stats)?;
            if record.has_state() {
                stats.records_with_state += 1;
            }
            records.push(record);
        }
        stats.lines_read = records.len();

        debug!(
            "Parsed {} lines ({} blank, {} short)",
            stats.lines_read, stats.blank_lines, stats.short_lines
        );

        Ok(StationInventory { records, stats })
    }

    fn parse_line(&self, line: &str, line_num: usize, stats: &mut LoadStats) -> Result<StationRecord> {
        if line.trim().is_empty() {
            stats.blank_lines += 1;
        } else if line.chars().count() < STATE_COLUMNS.1 {
            stats.short_lines += 1;
        }

        let id = fixed_width_field(line, ID_COLUMNS);
        let state_code = match self.config.state_source {
            StateSource::Column => fixed_width_field(line, STATE_COLUMNS).trim().to_string(),
            StateSource::StationId => state_code_from_id(id),
        };

        let state_full_name = self.resolve_state(&state_code, line_num, stats)?;

        Ok(StationRecord::new(id, state_code, state_full_name))
    }

    fn resolve_state(&self, code: &str, line_num: usize, stats: &mut LoadStats) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        if let Some(name) = self.directory.resolve(code) {
            return Ok(name.to_string());
        }

        match self.config.unknown_state_policy {
            UnknownStatePolicy::Fail => Err(InventoryError::UnknownStateCode {
                code: code.to_string(),
                line: line_num,
            }),
            UnknownStatePolicy::Blank => {
                if stats.unknown_state_codes.insert(code.to_string()) {
                    warn!("Unrecognised state code '{}' first seen on line {}", code, line_num);
                }
                Ok(String::new())
            }
        }
    }
}
