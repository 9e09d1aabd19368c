//! Yearly case counts per state.
//!
//! Reads a `State,Cases,Year` CSV (the CDC coccidioidomycosis table is the
//! conventional input), drops unusable rows, and lays the counts out as one
//! series per year aligned to a single alphabetical list of states.

use crate::constants::{CASES_COLUMN_CASES, CASES_COLUMN_STATE, CASES_COLUMN_YEAR, PREVIEW_COLUMN_GAP};
use crate::error::{InventoryError, Result};
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, info};

/// Case counts for one year, aligned to [`CaseTable::states`]
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub year: i32,
    /// `None` where the state has no usable row for this year
    pub cases: Vec<Option<f64>>,
}

/// Cleaned case counts, one series per year in ascending order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseTable {
    /// Every state seen in any year, sorted
    pub states: Vec<String>,
    pub years: Vec<YearSeries>,
}

/// Read and clean a case-count CSV
pub fn load_case_table(path: &Path) -> Result<CaseTable> {
    if !path.exists() {
        return Err(InventoryError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Every column is read as text so that cleaning decides what parses
    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let columns = raw.get_column_names_str();
    for required in [CASES_COLUMN_STATE, CASES_COLUMN_CASES, CASES_COLUMN_YEAR] {
        if !columns.contains(&required) {
            return Err(InventoryError::CaseData {
                path: path.to_path_buf(),
                reason: format!("missing column '{}'", required),
            });
        }
    }

    let table = CaseTable::from_frame(raw)?;
    info!(
        "Loaded case counts for {} states over {} years from {}",
        table.states.len(),
        table.years.len(),
        path.display()
    );
    Ok(table)
}

/// Trim and type the raw text columns, keeping rows with a state, a
/// numeric case count and a year
fn clean_cases(raw: DataFrame) -> Result<DataFrame> {
    let trimmed = |name: &str| col(name).str().strip_chars(lit(NULL));

    let cleaned = raw
        .lazy()
        .select([
            trimmed(CASES_COLUMN_STATE).alias(CASES_COLUMN_STATE),
            trimmed(CASES_COLUMN_CASES)
                .cast(DataType::Float64)
                .alias(CASES_COLUMN_CASES),
            trimmed(CASES_COLUMN_YEAR)
                .cast(DataType::Float64)
                .cast(DataType::Int32)
                .alias(CASES_COLUMN_YEAR),
        ])
        .filter(
            col(CASES_COLUMN_STATE)
                .is_not_null()
                .and(col(CASES_COLUMN_STATE).neq(lit("")))
                .and(col(CASES_COLUMN_CASES).is_not_null())
                .and(col(CASES_COLUMN_YEAR).is_not_null()),
        )
        .group_by([col(CASES_COLUMN_YEAR), col(CASES_COLUMN_STATE)])
        .agg([col(CASES_COLUMN_CASES).sum()])
        .collect()?;

    Ok(cleaned)
}

impl CaseTable {
    /// Build from a frame whose `State`, `Cases` and `Year` columns hold text
    pub fn from_frame(raw: DataFrame) -> Result<Self> {
        let raw_rows = raw.height();
        let cleaned = clean_cases(raw)?;

        let states = cleaned.column(CASES_COLUMN_STATE)?.str()?;
        let years = cleaned.column(CASES_COLUMN_YEAR)?.i32()?;
        let cases = cleaned.column(CASES_COLUMN_CASES)?.f64()?;

        let mut by_year: BTreeMap<i32, BTreeMap<&str, f64>> = BTreeMap::new();
        let mut all_states = BTreeSet::new();
        for ((state, year), count) in states.into_iter().zip(years).zip(cases) {
            let (Some(state), Some(year), Some(count)) = (state, year, count) else {
                continue;
            };
            if count.is_nan() {
                continue;
            }
            all_states.insert(state);
            by_year.entry(year).or_default().insert(state, count);
        }

        let series = by_year
            .into_iter()
            .map(|(year, counts)| YearSeries {
                year,
                cases: all_states.iter().map(|s| counts.get(s).copied()).collect(),
            })
            .collect();

        let table = Self {
            states: all_states.into_iter().map(str::to_string).collect(),
            years: series,
        };

        debug!(
            "Kept {} state-year counts from {} rows",
            table.years.iter().flat_map(|y| &y.cases).flatten().count(),
            raw_rows
        );

        Ok(table)
    }

    pub fn year(&self, year: i32) -> Option<&YearSeries> {
        self.years.iter().find(|series| series.year == year)
    }

    /// Wide DataFrame: a `State` column then one column per year
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns = vec![Column::new(CASES_COLUMN_STATE.into(), &self.states)];
        for series in &self.years {
            columns.push(Column::new(series.year.to_string().into(), &series.cases));
        }
        Ok(DataFrame::new(columns)?)
    }

    /// Text report with one block per year; states without data show blank
    pub fn render(&self) -> String {
        let state_width = self
            .states
            .iter()
            .map(|s| s.chars().count())
            .chain(std::iter::once(CASES_COLUMN_STATE.len()))
            .max()
            .unwrap_or_default();

        let mut blocks = Vec::with_capacity(self.years.len());
        for series in &self.years {
            let mut lines = vec![
                format!("Cases by State - {}", series.year),
                format!(
                    "{:<width$}{}{}",
                    CASES_COLUMN_STATE,
                    PREVIEW_COLUMN_GAP,
                    CASES_COLUMN_CASES,
                    width = state_width
                ),
            ];
            for (state, count) in self.states.iter().zip(&series.cases) {
                let count = count.map(|c| c.to_string()).unwrap_or_default();
                let line = format!("{:<width$}{}{}", state, PREVIEW_COLUMN_GAP, count, width = state_width);
                lines.push(line.trim_end().to_string());
            }
            blocks.push(lines.join("\n"));
        }
        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn raw_frame(
        states: Vec<Option<&str>>,
        cases: Vec<Option<&str>>,
        years: Vec<Option<&str>>,
    ) -> DataFrame {
        df!(
            CASES_COLUMN_STATE => states,
            CASES_COLUMN_CASES => cases,
            CASES_COLUMN_YEAR => years
        )
        .unwrap()
    }

    #[test]
    fn test_state_whitespace_is_trimmed() {
        let raw = raw_frame(
            vec![Some("  Arizona "), Some("Arizona")],
            vec![Some("10"), Some("5")],
            vec![Some("2014"), Some("2015")],
        );
        let table = CaseTable::from_frame(raw).unwrap();

        assert_eq!(table.states, vec!["Arizona".to_string()]);
        assert_eq!(table.year(2014).unwrap().cases, vec![Some(10.0)]);
        assert_eq!(table.year(2015).unwrap().cases, vec![Some(5.0)]);
    }

    #[test]
    fn test_non_numeric_cases_are_dropped() {
        let raw = raw_frame(
            vec![Some("Arizona"), Some("Nevada"), Some("Utah")],
            vec![Some("7,689"), Some("n/a"), Some(" 42 ")],
            vec![Some("2014"), Some("2014"), Some("2014")],
        );
        let table = CaseTable::from_frame(raw).unwrap();

        assert_eq!(table.states, vec!["Utah".to_string()]);
        assert_eq!(table.years.len(), 1);
        assert_eq!(table.years[0].cases, vec![Some(42.0)]);
    }

    #[test]
    fn test_missing_fields_are_dropped() {
        let raw = raw_frame(
            vec![Some("Arizona"), None, Some("   "), Some("Texas"), Some("Nevada")],
            vec![Some("1"), Some("2"), Some("3"), None, Some("4")],
            vec![None, Some("2016"), Some("2016"), Some("2016"), Some("2016")],
        );
        let table = CaseTable::from_frame(raw).unwrap();

        assert_eq!(table.states, vec!["Nevada".to_string()]);
        assert_eq!(table.years.len(), 1);
        assert_eq!(table.years[0].year, 2016);
    }

    #[test]
    fn test_state_order_is_shared_across_years() {
        let raw = raw_frame(
            vec![Some("Utah"), Some("Arizona"), Some("California"), Some("Arizona")],
            vec![Some("3"), Some("100"), Some("50"), Some("120")],
            vec![Some("2014"), Some("2014"), Some("2014"), Some("2015")],
        );
        let table = CaseTable::from_frame(raw).unwrap();

        assert_eq!(table.states, vec!["Arizona", "California", "Utah"]);
        let years: Vec<_> = table.years.iter().map(|y| y.year).collect();
        assert_eq!(years, vec![2014, 2015]);
        assert_eq!(table.year(2014).unwrap().cases, vec![Some(100.0), Some(50.0), Some(3.0)]);
        assert_eq!(table.year(2015).unwrap().cases, vec![Some(120.0), None, None]);
    }

    #[test]
    fn test_fractional_year_is_truncated() {
        let raw = raw_frame(vec![Some("Utah")], vec![Some("3")], vec![Some("2014.0")]);
        let table = CaseTable::from_frame(raw).unwrap();
        assert_eq!(table.years[0].year, 2014);
    }

    #[test]
    fn test_wide_dataframe() {
        let raw = raw_frame(
            vec![Some("Arizona"), Some("Utah"), Some("Arizona")],
            vec![Some("100"), Some("3"), Some("120")],
            vec![Some("2014"), Some("2014"), Some("2015")],
        );
        let df = CaseTable::from_frame(raw).unwrap().to_dataframe().unwrap();

        assert_eq!(df.shape(), (2, 3));
        assert_eq!(df.get_column_names_str(), vec!["State", "2014", "2015"]);
        let later = df.column("2015").unwrap().f64().unwrap();
        assert_eq!(later.get(0), Some(120.0));
        assert_eq!(later.get(1), None);
    }

    #[test]
    fn test_render() {
        let raw = raw_frame(
            vec![Some("Arizona"), Some("Utah"), Some("Arizona")],
            vec![Some("100"), Some("3"), Some("120")],
            vec![Some("2014"), Some("2014"), Some("2015")],
        );
        let report = CaseTable::from_frame(raw).unwrap().render();

        assert_eq!(
            report,
            "Cases by State - 2014\n\
             State    Cases\n\
             Arizona  100\n\
             Utah     3\n\
             \n\
             Cases by State - 2015\n\
             State    Cases\n\
             Arizona  120\n\
             Utah"
        );
    }

    #[test]
    fn test_load_case_table_from_csv() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "State,Cases,Year").unwrap();
        writeln!(temp_file, "Arizona ,7689,2014").unwrap();
        writeln!(temp_file, "California,,2014").unwrap();
        writeln!(temp_file, "California,5000,2015").unwrap();
        writeln!(temp_file, ",12,2015").unwrap();

        let table = load_case_table(temp_file.path()).unwrap();
        assert_eq!(table.states, vec!["Arizona", "California"]);
        assert_eq!(table.year(2014).unwrap().cases, vec![Some(7689.0), None]);
        assert_eq!(table.year(2015).unwrap().cases, vec![None, Some(5000.0)]);
    }

    #[test]
    fn test_load_case_table_errors() {
        let err = load_case_table(Path::new("/nonexistent/cases.csv")).unwrap_err();
        assert!(matches!(err, InventoryError::FileNotFound { .. }));

        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "State,Count").unwrap();
        writeln!(temp_file, "Arizona,1").unwrap();
        match load_case_table(temp_file.path()) {
            Err(InventoryError::CaseData { reason, .. }) => assert!(reason.contains("Cases")),
            other => panic!("expected CaseData, got {:?}", other),
        }
    }
}
