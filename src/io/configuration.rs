//! Packing constants and runtime configuration defaults

/// Character marking a filled cell in a shape literal
pub const FILLED_MARKER: char = '#';

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Log level used when none is given on the command line
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Progress display settings
/// Interval between spinner redraws in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;

/// Delimiter between per-shape counts on the command line
pub const COUNT_DELIMITER: char = ',';

/// Separator between height and width in a `--grid` value
pub const GRID_SIZE_SEPARATOR: char = 'x';

/// Separator between the grid size and its counts in a `--grid` value
pub const GRID_COUNTS_SEPARATOR: char = ':';
