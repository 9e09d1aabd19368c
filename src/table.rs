//! Tabular views of a station inventory.
//!
//! Converts inventories to polars DataFrames, renders the plain-text
//! preview printed by the CLI, and writes the full table to Parquet or CSV.

use crate::config::{ExportConfig, ExportFormat};
use crate::constants::{COLUMN_ID, COLUMN_STATE, COLUMN_STATE_FULL, PREVIEW_COLUMN_GAP};
use crate::error::{InventoryError, Result};
use crate::models::{StationInventory, StationRecord};
use polars::prelude::*;
use std::fs::File;
use tracing::{debug, warn};

/// Build a DataFrame with `ID`, `State` and `State_Full` string columns
pub fn to_dataframe(inventory: &StationInventory) -> Result<DataFrame> {
    let ids: Vec<&str> = inventory.iter().map(|r| r.id.as_str()).collect();
    let codes: Vec<&str> = inventory.iter().map(|r| r.state_code.as_str()).collect();
    let names: Vec<&str> = inventory.iter().map(|r| r.state_full_name.as_str()).collect();

    let df = df!(
        COLUMN_ID => ids,
        COLUMN_STATE => codes,
        COLUMN_STATE_FULL => names
    )?;

    Ok(df)
}

/// Render records as a left-aligned text table with a header line
pub fn render_preview(records: &[StationRecord]) -> String {
    let header = [COLUMN_ID, COLUMN_STATE, COLUMN_STATE_FULL];
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| [r.id.as_str(), r.state_code.as_str(), r.state_full_name.as_str()])
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(header)
        .chain(rows)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            cells.join(PREVIEW_COLUMN_GAP).trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the full inventory table, returning the number of rows written
pub fn export(inventory: &StationInventory, config: &ExportConfig) -> Result<usize> {
    let mut df = to_dataframe(inventory)?;
    write_dataframe(&mut df, config)
}

/// Write a DataFrame in the format implied by the output extension.
///
/// Failures carry the output path, and a partially written file is removed.
pub fn write_dataframe(df: &mut DataFrame, config: &ExportConfig) -> Result<usize> {
    let format = config.format()?;
    let output_path = &config.output_path;
    let export_err = |reason: String| InventoryError::Export {
        path: output_path.clone(),
        reason,
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| export_err(format!("Failed to create output directory: {}", e)))?;
    }

    let mut file = File::create(output_path)
        .map_err(|e| export_err(format!("Failed to create output file: {}", e)))?;

    let written = match format {
        ExportFormat::Parquet => ParquetWriter::new(file)
            .with_compression(config.compression.to_polars_compression())
            .finish(df)
            .map(|_| ()),
        ExportFormat::Csv => CsvWriter::new(&mut file).include_header(true).finish(df),
    };

    if let Err(e) = written {
        if let Err(remove_err) = std::fs::remove_file(output_path) {
            warn!(
                "Could not remove partial output {}: {}",
                output_path.display(),
                remove_err
            );
        }
        return Err(export_err(e.to_string()));
    }

    debug!(
        "Wrote {} rows to {} as {:?}",
        df.height(),
        output_path.display(),
        format
    );

    Ok(df.height())
}
