//! Fixed-step time accumulation
//!
//! Wall-clock frame deltas go into an accumulator that is drained one whole
//! tick at a time. The same elapsed wall time yields the same ticks no matter
//! how often `advance` is called.

use super::state::GameState;
use super::tick::tick;
use crate::platform::{InputSource, RandomSource};
use crate::settings::SimConfig;

/// What one `advance` call did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdvanceReport {
    /// Ticks simulated this frame
    pub ticks: u32,
    /// Elapsed time was cut back to `max_accumulated_ms`
    pub clamped: bool,
    /// Leftover time as a fraction of a tick, for render interpolation
    pub alpha: f32,
}

/// Fold the time since the last frame into the accumulator, clamped.
/// Returns true if the clamp engaged.
pub fn accumulate(state: &mut GameState, now_ms: u64, config: &SimConfig) -> bool {
    let elapsed = now_ms.saturating_sub(state.last_frame_ms);
    state.last_frame_ms = now_ms;

    let total = state.accumulated_ms.saturating_add(elapsed);
    let clamped = total > config.max_accumulated_ms;
    state.accumulated_ms = total.min(config.max_accumulated_ms);

    if clamped {
        log::warn!(
            "Frame stalled for {elapsed} ms; dropping {} ms of simulation time",
            total - config.max_accumulated_ms
        );
    }
    clamped
}

/// Accumulate time up to `now_ms` and run every whole tick it covers.
/// Leaves `accumulated_ms < tick_size_ms`.
pub fn advance(
    mut state: GameState,
    now_ms: u64,
    config: &SimConfig,
    input: &impl InputSource,
    rng: &mut impl RandomSource,
) -> (GameState, AdvanceReport) {
    let tick_size = config.tick_size_ms();
    let clamped = accumulate(&mut state, now_ms, config);

    let mut ticks = 0;
    let mut frame_events = Vec::new();
    while state.accumulated_ms >= tick_size {
        state = tick(state, config, input, rng);
        state.accumulated_ms -= tick_size;
        frame_events.append(&mut state.events);
        ticks += 1;
    }
    state.events = frame_events;

    let alpha = state.accumulated_ms as f32 / tick_size as f32;
    (
        state,
        AdvanceReport {
            ticks,
            clamped,
            alpha,
        },
    )
}
