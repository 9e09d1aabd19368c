//! Application constants for the station inventory loader
//!
//! Column layout of the GHCN-Daily station inventory, default paths,
//! and the US state/territory name table.

// =============================================================================
// Fixed-Width Layout
// =============================================================================

/// Character range of the station identifier (`[start, end)`)
pub const ID_COLUMNS: (usize, usize) = (0, 11);

/// Character range of the two-letter state code (`[start, end)`)
pub const STATE_COLUMNS: (usize, usize) = (38, 40);

/// Length of the country prefix that leads every station identifier
pub const COUNTRY_PREFIX_LEN: usize = 2;

// =============================================================================
// Defaults
// =============================================================================

/// Conventional name of the GHCN-Daily station inventory
pub const DEFAULT_INVENTORY_FILE: &str = "ghcnd-stations.txt";

/// Number of rows shown by the preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

// =============================================================================
// Output Columns
// =============================================================================

pub const COLUMN_ID: &str = "ID";
pub const COLUMN_STATE: &str = "State";
pub const COLUMN_STATE_FULL: &str = "State_Full";

/// Separator between preview columns
pub const PREVIEW_COLUMN_GAP: &str = "  ";

// =============================================================================
// State Case Counts
// =============================================================================

/// Conventional name of the coccidioidomycosis case-count table
pub const DEFAULT_CASES_FILE: &str = "coccidioidomycosis_cases_by_state_2014_2022.csv";

pub const CASES_COLUMN_STATE: &str = "State";
pub const CASES_COLUMN_CASES: &str = "Cases";
pub const CASES_COLUMN_YEAR: &str = "Year";

// =============================================================================
// US States and Territories
// =============================================================================

/// Postal abbreviations and full names for the 50 states, the District of
/// Columbia, territories, and freely associated states
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
    ("DC", "District of Columbia"),
    ("AS", "American Samoa"),
    ("GU", "Guam"),
    ("MP", "Northern Mariana Islands"),
    ("PR", "Puerto Rico"),
    ("VI", "U.S. Virgin Islands"),
    ("UM", "U.S. Minor Outlying Islands"),
    ("FM", "Federated States of Micronesia"),
    ("MH", "Marshall Islands"),
    ("PW", "Palau"),
];
