//! Score and high-score bookkeeping
//!
//! Collision resolves first in a tick and resets the run score; passed pairs
//! are credited last, on top of whatever the score is by then.

use super::state::{GameEvent, GameState};

/// Apply this tick's collision result. On a hit the high score absorbs the
/// run score, then the run score goes back to zero.
pub fn resolve_collision(state: &mut GameState) {
    if !state.is_colliding {
        return;
    }

    let lost = state.score;
    if state.score > state.high_score {
        state.high_score = state.score;
        state.events.push(GameEvent::NewHighScore { score: state.high_score });
        log::debug!("New high score: {}", state.high_score);
    }
    state.score = 0;
    state.events.push(GameEvent::Collided { lost_score: lost });
}

/// Credit pairs culled this tick
pub fn credit_passed(state: &mut GameState, passed: u32) {
    state.score += u64::from(passed);
}
