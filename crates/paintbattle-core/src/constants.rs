//! Simulation constants and tuning parameters.

// --- Arena ---

/// Default arena width in pixels (matches the frontend canvas).
pub const ARENA_WIDTH: f64 = 800.0;

/// Default arena height in pixels.
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Units ---

pub const UNIT_MAX_HEALTH: i32 = 100;

/// Collision/draw radius in pixels.
pub const UNIT_RADIUS: f64 = 3.0;

/// Pixels moved per tick.
pub const UNIT_SPEED: f64 = 1.0;

pub const UNIT_ATTACK_RANGE: f64 = 15.0;

pub const UNIT_ATTACK_DAMAGE: i32 = 2;

/// Ticks between attacks.
pub const UNIT_ATTACK_SPEED: u32 = 10;

// --- Brush ---

/// Default brush diameter in pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 20.0;

/// Default unit density (1 = sparse, higher = denser).
pub const DEFAULT_UNIT_DENSITY: u32 = 5;

/// Stroke sample spacing at density 1; divided by density for the actual spacing.
pub const STROKE_SPACING: f64 = 10.0;

/// Total jitter span applied to brush-spawned units on each axis.
pub const SPAWN_JITTER: f64 = 3.0;

// --- Status text ---

pub const MSG_WELCOME: &str = "Draw your armies with different colors, then click Start Battle!";

pub const MSG_CLEARED: &str = "Canvas cleared. Draw your armies!";

pub const MSG_BATTLE_COMPLETE: &str = "Battle complete! Check the scoreboard below.";

// --- Defaults ---

/// Default RNG seed for brush jitter.
pub const DEFAULT_SEED: u64 = 42;
