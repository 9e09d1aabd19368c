//! State code resolution.
//!
//! Maps two-letter postal abbreviations to full state and territory names.
//! The directory is built once and shared read-only by the loader.

use crate::constants::US_STATES;
use std::collections::HashMap;

/// Immutable lookup from state code to full name
#[derive(Debug, Clone)]
pub struct StateDirectory {
    names: HashMap<&'static str, &'static str>,
}

impl StateDirectory {
    /// Directory of US states, DC, territories and freely associated states
    pub fn us() -> Self {
        Self::from_entries(US_STATES)
    }

    /// Build a directory from `(code, name)` pairs
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            names: entries.iter().copied().collect(),
        }
    }

    /// Full name for a code, exact and case-sensitive
    pub fn resolve(&self, code: &str) -> Option<&'static str> {
        self.names.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.names.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Known codes in alphabetical order
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        let mut codes: Vec<_> = self.names.keys().copied().collect();
        codes.sort_unstable();
        codes.into_iter()
    }
}

impl Default for StateDirectory {
    fn default() -> Self {
        Self::us()
    }
}
