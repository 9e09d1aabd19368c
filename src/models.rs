//! Core data structures for station inventories.
//!
//! Defines the per-line station record, the loaded inventory, load
//! statistics, and the policy enums that steer extraction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// One row of the inventory table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StationRecord {
    /// Station identifier, verbatim from the fixed-width columns
    pub id: String,
    /// Trimmed two-letter state code, empty when absent
    pub state_code: String,
    /// Full state name, empty when the code is empty or unrecognised
    pub state_full_name: String,
}

impl StationRecord {
    pub fn new(
        id: impl Into<String>,
        state_code: impl Into<String>,
        state_full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            state_code: state_code.into(),
            state_full_name: state_full_name.into(),
        }
    }

    /// Whether the record resolved to a known state
    pub fn has_state(&self) -> bool {
        !self.state_full_name.is_empty()
    }
}

/// Where the state code of a record is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StateSource {
    /// Fixed-width state column
    #[default]
    Column,
    /// First two letters of the identifier after its country prefix
    StationId,
}

/// How unrecognised, non-empty state codes are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownStatePolicy {
    /// Leave the full name empty and keep loading
    #[default]
    Blank,
    /// Abort the load
    Fail,
}

/// Statistics gathered while loading an inventory
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    pub lines_read: usize,
    pub records_with_state: usize,
    pub blank_lines: usize,
    /// Lines ending before the state column
    pub short_lines: usize,
    /// Distinct codes that did not resolve
    pub unknown_state_codes: BTreeSet<String>,
    pub load_time: Duration,
}

impl LoadStats {
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "{} stations, {} with a US state",
            self.lines_read, self.records_with_state
        );
        if !self.unknown_state_codes.is_empty() {
            let codes: Vec<_> = self.unknown_state_codes.iter().map(String::as_str).collect();
            summary.push_str(&format!(", unrecognised codes: {}", codes.join(", ")));
        }
        summary
    }
}

/// Loaded station table in input line order
#[derive(Debug, Clone, Default)]
pub struct StationInventory {
    pub records: Vec<StationRecord>,
    pub stats: LoadStats,
}

impl StationInventory {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` records
    pub fn head(&self, n: usize) -> &[StationRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a StationInventory {
    type Item = &'a StationRecord;
    type IntoIter = std::slice::Iter<'a, StationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_clamps_to_length() {
        let inventory = StationInventory {
            records: vec![
                StationRecord::new("A", "", ""),
                StationRecord::new("B", "NY", "New York"),
            ],
            stats: LoadStats::default(),
        };

        assert_eq!(inventory.head(5).len(), 2);
        assert_eq!(inventory.head(1)[0].id, "A");
        assert!(inventory.head(0).is_empty());
        assert!(inventory.records[1].has_state());
        assert!(!inventory.records[0].has_state());
    }

    #[test]
    fn test_stats_summary() {
        let mut stats = LoadStats {
            lines_read: 3,
            records_with_state: 1,
            ..Default::default()
        };
        assert_eq!(stats.summary(), "3 stations, 1 with a US state");

        stats.unknown_state_codes.insert("ZZ".to_string());
        stats.unknown_state_codes.insert("ON".to_string());
        assert_eq!(
            stats.summary(),
            "3 stations, 1 with a US state, unrecognised codes: ON, ZZ"
        );
    }

    #[test]
    fn test_policy_defaults() {
        assert_eq!(StateSource::default(), StateSource::Column);
        assert_eq!(UnknownStatePolicy::default(), UnknownStatePolicy::Blank);
    }
}
