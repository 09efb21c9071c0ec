//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness and input only through injected capabilities
//! - State threaded by value: `tick(state) -> state`
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod geometry;
pub mod obstacles;
pub mod score;
pub mod state;
pub mod tick;

pub use clock::{AdvanceReport, accumulate, advance};
pub use collision::collides_with_field;
pub use geometry::{Aabb, intersects};
pub use obstacles::{ObstacleUpdate, update_obstacles};
pub use state::{GameEvent, GameState, Obstacle, ObstacleKind, PlayerBody, RunState};
pub use tick::tick;
