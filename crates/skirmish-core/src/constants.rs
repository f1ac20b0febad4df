//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Grid ---

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE_PX: f64 = 64.0;

/// Map width in cells.
pub const MAP_WIDTH: i32 = 12;

/// Map height in cells.
pub const MAP_HEIGHT: i32 = 9;

// --- Movement & melee ---

/// Per-turn movement radius (Chebyshev).
pub const MOVEMENT_RADIUS: i32 = 1;

/// Basic attack radius (Chebyshev).
pub const ATTACK_RADIUS: i32 = 1;

/// Mana refunded for an orthogonal (non-diagonal) step.
pub const ORTHOGONAL_MOVE_REFUND: u32 = 1;

// --- Projectiles ---

/// Flight speed of skill projectiles (pixels per tick).
pub const SKILL_PROJECTILE_SPEED: f64 = 8.0;

/// Flight speed of basic-volley projectiles (pixels per tick).
pub const VOLLEY_PROJECTILE_SPEED: f64 = 4.0;

/// Minimum ticks between consecutive projectile spawns (0.1 s).
pub const SPAWN_INTERVAL_TICKS: u64 = 6;

/// Gold paid per point of a destroyed wall's total health.
pub const WALL_BOUNTY_MULTIPLIER: u32 = 4;

/// Maximum ray-cast range for beam attacks (pixels).
pub const BEAM_MAX_RANGE_PX: f64 = 1000.0;

// --- Turns ---

/// Delay before the automated side takes its turn (1.0 s).
pub const AUTOMATED_TURN_DELAY_TICKS: u64 = 60;

// --- Effects ---

/// Display duration for beam and cross-beam effects (0.5 s).
pub const BEAM_DURATION_TICKS: u64 = 30;

// --- Vision ---

/// Vision radius without any boost (Chebyshev).
pub const BASE_VISION_RADIUS: i32 = 1;

// --- Economy ---

/// Gold price of one skill unlock.
pub const SKILL_PRICE: u32 = 100;

/// Mana cost of a piercing bolt.
pub const PIERCING_BOLT_COST: u32 = 1;

/// Mana cost of a scout ping.
pub const SCOUT_COST: u32 = 1;

/// Mana cost of a cross beam.
pub const CROSS_BEAM_COST: u32 = 2;

/// Damage dealt by a cross beam to each wall and unit on its lines.
pub const CROSS_BEAM_DAMAGE: u32 = 1;

/// Upper clamp for the mana input selector.
pub const MANA_INPUT_CAP: u32 = 99;

// --- Announcements ---

/// Number of recent announcements retained.
pub const ANNOUNCEMENT_HISTORY_LIMIT: usize = 5;
