//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives here. Owned exclusively by the loop
//! driver and threaded through `tick` by value.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::settings::SimConfig;

/// Loop lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Stopped,
}

/// Which half of a gap an obstacle forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Top,
    Bottom,
}

/// One obstacle segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub bounds: Aabb,
}

impl Obstacle {
    pub fn top(bounds: Aabb) -> Self {
        Self {
            kind: ObstacleKind::Top,
            bounds,
        }
    }

    pub fn bottom(bounds: Aabb) -> Self {
        Self {
            kind: ObstacleKind::Bottom,
            bounds,
        }
    }

    /// Fully past the left edge by at least `margin` pixels
    #[inline]
    pub fn is_offscreen(&self, margin: f32) -> bool {
        self.bounds.right() <= -margin
    }
}

/// The falling, jumping player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    pub bounds: Aabb,
    /// Pixels per tick, positive is down
    pub vertical_velocity: f32,
    /// Velocity set on jump (negative is up)
    pub jump_impulse: f32,
    pub gravity_per_tick: f32,
    /// Carried for tuning; the stepper does not clamp to it
    pub terminal_velocity: f32,
}

impl PlayerBody {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            bounds: config.player_start,
            vertical_velocity: 0.0,
            jump_impulse: config.jump_impulse,
            gravity_per_tick: config.gravity_per_tick,
            terminal_velocity: config.terminal_velocity,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.bounds.pos.y
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.bounds.pos.y = y;
    }
}

/// Things that happened during the most recent tick, for renderer/audio.
/// Not gameplay-affecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new top/bottom pair entered on the right edge
    PairSpawned,
    /// Pairs culled after being passed
    ObstaclesPassed { count: u32 },
    /// Player touched an obstacle or the ceiling; score reset
    Collided { lost_score: u64 },
    /// High score raised on collision
    NewHighScore { score: u64 },
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerBody,
    /// Oldest first; same length and pairing index as `bottom_obstacles`
    pub top_obstacles: VecDeque<Obstacle>,
    pub bottom_obstacles: VecDeque<Obstacle>,
    /// Pixels per tick
    pub scroll_speed: f32,
    /// Milliseconds since the last spawn
    pub spawn_timer_ms: u32,
    pub spawn_interval_ms: u32,
    /// Wall time not yet consumed by a whole tick
    pub accumulated_ms: u64,
    /// Clock reading at the previous `advance`
    pub last_frame_ms: u64,
    pub score: u64,
    pub high_score: u64,
    pub is_colliding: bool,
    pub run_state: RunState,
    /// Ticks simulated since start
    pub tick_count: u64,
    /// Events from the most recent tick, or from every tick of the most
    /// recent frame after `advance`
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state: empty field, zero score, running
    pub fn new(config: &SimConfig, now_ms: u64) -> Self {
        Self {
            player: PlayerBody::new(config),
            top_obstacles: VecDeque::new(),
            bottom_obstacles: VecDeque::new(),
            scroll_speed: config.scroll_speed,
            spawn_timer_ms: 0,
            spawn_interval_ms: config.spawn_interval_ms,
            accumulated_ms: 0,
            last_frame_ms: now_ms,
            score: 0,
            high_score: 0,
            is_colliding: false,
            run_state: RunState::Running,
            tick_count: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Enter the terminal `Stopped` state
    pub fn stop(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Stopped;
            log::info!(
                "Run stopped after {} ticks (score {}, high score {})",
                self.tick_count,
                self.score,
                self.high_score
            );
        }
    }

    /// Number of live obstacle pairs
    pub fn pair_count(&self) -> usize {
        self.bottom_obstacles.len()
    }

    /// Iterate live pairs, oldest first
    pub fn pairs(&self) -> impl Iterator<Item = (&Obstacle, &Obstacle)> {
        self.top_obstacles.iter().zip(self.bottom_obstacles.iter())
    }

    /// Every obstacle in both sequences
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.top_obstacles.iter().chain(self.bottom_obstacles.iter())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&SimConfig::default(), 0)
    }
}
