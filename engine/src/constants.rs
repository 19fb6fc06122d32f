/// Default number of grid rows
pub const DEFAULT_ROWS: u16 = 25;

/// Default number of grid columns
pub const DEFAULT_COLS: u16 = 40;

/// Tick interval in milliseconds at the start of every round
pub const DEFAULT_SPEED_MS: u32 = 200;

/// The speed ramp never takes the tick interval below this many milliseconds
pub const MIN_SPEED_MS: u32 = 50;

/// Milliseconds removed from the tick interval on every second food eaten
pub const SPEED_STEP_MS: u32 = 15;

/// Uniform samples tried before food placement falls back to scanning free cells
pub const RANDOM_PLACEMENT_ATTEMPTS: u32 = 64;
