//! Application-level configuration constants.

// Remote API
pub const API_DOMAIN: &str = "https://www.randyconnolly.com/funwebdev/3rd/api/f1";

// Seasons offered by the selector, oldest first
pub const SEASONS: [u16; 4] = [2020, 2021, 2022, 2023];

// Storage keys
pub const RACES_KEY_PREFIX: &str = "races";
pub const QUALIFYING_KEY_PREFIX: &str = "qualifying";
pub const RESULTS_KEY_PREFIX: &str = "results";
pub const FAVORITES_KEY: &str = "favorites";

// Table identifiers
pub const RACES_TABLE_ID: &str = "racesTable";
pub const QUALIFYING_TABLE_ID: &str = "qualifyingTable";
pub const RESULTS_TABLE_ID: &str = "resultsTable";

// UI constants
pub const MOUNT_POINT_ID: &str = "app";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/150x100";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again.";
pub const MISSING_VALUE: &str = "-";
pub const NOT_AVAILABLE: &str = "N/A";
