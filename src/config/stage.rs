/// Stage generation constants.
/// 
/// Corridor lengths are expressed as fractions of the interior area.

/// Length factor range of the main corridor carved from the player start.
pub const MAIN_STROKE_FACTOR_MIN: f64 = 0.14;
pub const MAIN_STROKE_FACTOR_SPREAD: f64 = 0.06;

/// Length factor range of the extra corridors.
pub const EXTRA_STROKE_FACTOR_MIN: f64 = 0.08;
pub const EXTRA_STROKE_FACTOR_SPREAD: f64 = 0.05;

/// Number of extra corridors (inclusive range).
pub const EXTRA_STROKES_MIN: usize = 1;
pub const EXTRA_STROKES_MAX: usize = 2;

/// Attempts at finding an isolated start cell for an extra corridor.
pub const EXTRA_STROKE_START_TRIES: u32 = 200;

/// Iteration cap of a single carve.
pub const CARVE_GUARD: u32 = 8000;

/// Hairballs placed per stage (inclusive range).
pub const HAIRBALLS_MIN: usize = 5;
pub const HAIRBALLS_MAX: usize = 10;

/// Crows per stage: `min(CROW_BASE + stage, CROW_MAX)`.
pub const CROW_BASE: u32 = 6;
pub const CROW_MAX: u32 = 12;

/// Dogs per stage: `min(DOG_BASE + stage / 2, DOG_MAX)`.
pub const DOG_BASE: u32 = 1;
pub const DOG_MAX: u32 = 3;

/// Enemies spawn strictly farther (Manhattan) than this from the player start.
pub const CROW_MIN_DISTANCE: usize = 6;
pub const DOG_MIN_DISTANCE: usize = 8;

/// Spawn attempts per enemy kind.
pub const SPAWN_ATTEMPTS: u32 = 500;
