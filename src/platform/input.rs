//! Logical key state
//!
//! Backends are polled once per frame by the driver, then queried any number
//! of times by the ticks run during that frame.

use std::cell::Cell;

use crate::sim::GameState;

/// Logical keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Jump,
    Cancel,
}

/// Key state source
pub trait InputSource {
    /// Whether `key` is currently held
    fn is_pressed(&self, key: Key) -> bool;

    /// Refresh backend state; called by the driver once per frame, between ticks
    fn poll(&mut self, _state: &GameState) {}
}

/// Constant key state
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInput {
    pub jump: bool,
    pub cancel: bool,
}

impl FixedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn jumping() -> Self {
        Self {
            jump: true,
            cancel: false,
        }
    }
}

impl InputSource for FixedInput {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Jump => self.jump,
            Key::Cancel => self.cancel,
        }
    }
}

/// Jump presses replayed one entry per `Jump` query (the stepper asks once per
/// tick). Released once the script runs out. Cancel is never pressed.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    jumps: Vec<bool>,
    cursor: Cell<usize>,
}

impl ScriptedInput {
    pub fn new(jumps: Vec<bool>) -> Self {
        Self {
            jumps,
            cursor: Cell::new(0),
        }
    }

    /// Press jump on the listed tick indices out of `len` ticks
    pub fn with_presses(len: usize, presses: &[usize]) -> Self {
        let mut jumps = vec![false; len];
        for &i in presses {
            if i < len {
                jumps[i] = true;
            }
        }
        Self::new(jumps)
    }

    /// Queries consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor.get()
    }
}

impl InputSource for ScriptedInput {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Jump => {
                let i = self.cursor.get();
                self.cursor.set(i + 1);
                self.jumps.get(i).copied().unwrap_or(false)
            }
            Key::Cancel => false,
        }
    }
}

/// Gap-seeking demo player for headless runs
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    jump: bool,
    /// Pixels above the gap floor at which to jump
    pub clearance: f32,
}

impl Autopilot {
    pub fn new(clearance: f32) -> Self {
        Self {
            jump: false,
            clearance,
        }
    }
}

impl InputSource for Autopilot {
    fn is_pressed(&self, key: Key) -> bool {
        key == Key::Jump && self.jump
    }

    fn poll(&mut self, state: &GameState) {
        let player = &state.player;
        let player_left = player.bounds.x();

        // Nearest pair whose right edge is still ahead of the player
        let next_gap = state
            .pairs()
            .find(|(_, bottom)| bottom.bounds.right() >= player_left)
            .map(|(top, bottom)| (top.bounds.bottom(), bottom.bounds.y()));

        let floor = match next_gap {
            Some((_, gap_floor)) => gap_floor,
            None => player.bounds.y() + player.bounds.height() + self.clearance + 1.0,
        };
        let ceiling = next_gap.map(|(gap_ceiling, _)| gap_ceiling).unwrap_or(0.0);

        let falling = player.vertical_velocity >= 0.0;
        let too_low = player.bounds.bottom() + self.clearance >= floor;
        let room_above = player.bounds.y() - ceiling > self.clearance;
        self.jump = falling && too_low && room_above;
    }
}
