//! Gap Runner - A side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `platform`: Clock, input and randomness capabilities the simulation consumes
//! - `driver`: Outer loop that owns the game state and feeds frames to a renderer
//! - `settings`: Simulation configuration

pub mod driver;
pub mod platform;
pub mod settings;
pub mod sim;

pub use driver::{FrameSink, GameLoopDriver};
pub use settings::{ConfigError, SimConfig};

/// Default tuning values
pub mod consts {
    /// Target simulation rate
    pub const TICK_RATE_HZ: u32 = 60;
    /// Upper bound on accumulated frame time (spiral-of-death guard)
    pub const MAX_ACCUMULATED_MS: u64 = 2500;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 200.0;
    pub const PLAYER_Y: f32 = 300.0;
    pub const PLAYER_SIZE: f32 = 48.0;
    /// Velocity set on jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -8.0;
    /// Added to vertical velocity, twice per tick
    pub const GRAVITY_PER_TICK: f32 = 0.25;
    /// Declared for tuning, not enforced by the stepper
    pub const TERMINAL_VELOCITY: f32 = 12.0;

    /// Obstacle defaults
    pub const SCROLL_SPEED: f32 = 4.0;
    pub const SPAWN_INTERVAL_MS: u32 = 1500;
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    /// Obstacles are culled once their right edge is this far past the left edge
    pub const CULL_MARGIN: f32 = 100.0;
    /// Bottom obstacle height range, [low, high)
    pub const GAP_OFFSET_RANGE: (i32, i32) = (100, 400);
    /// Gap height range, [low, high)
    pub const GAP_HEIGHT_RANGE: (i32, i32) = (200, 300);
}
