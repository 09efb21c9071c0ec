//! Outer game loop
//!
//! Owns the only `GameState`, pulls it through `advance` once per frame and
//! hands the result to whatever is drawing it. Stop requests (quit signal or
//! the cancel key) only take effect between frames.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::platform::{Clock, InputSource, Key, RandomSource};
use crate::settings::{ConfigError, SimConfig};
use crate::sim::{AdvanceReport, GameState, advance};

/// Receives each simulated frame (the renderer)
pub trait FrameSink {
    fn present(&mut self, state: &GameState, report: &AdvanceReport);
}

impl<F: FnMut(&GameState, &AdvanceReport)> FrameSink for F {
    fn present(&mut self, state: &GameState, report: &AdvanceReport) {
        self(state, report)
    }
}

/// Fixed-step loop over injected clock, input and randomness
pub struct GameLoopDriver<C, I, R> {
    config: SimConfig,
    state: GameState,
    clock: C,
    input: I,
    rng: R,
    quit: Arc<AtomicBool>,
    frame_count: u64,
}

impl<C: Clock, I: InputSource, R: RandomSource> GameLoopDriver<C, I, R> {
    /// Create a driver with a fresh game state stamped at the current clock time.
    /// Rejects an invalid config before any tick can run.
    pub fn new(config: SimConfig, clock: C, input: I, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config, clock.now_ms());
        log::info!(
            "Driver ready: {}x{} screen, {} ms ticks",
            config.screen_width,
            config.screen_height,
            config.tick_size_ms()
        );
        Ok(Self {
            config,
            state,
            clock,
            input,
            rng,
            quit: Arc::new(AtomicBool::new(false)),
            frame_count: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Handle for raising the quit signal from elsewhere (signal handler, window close)
    pub fn quit_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    /// Raise the quit signal; honored at the start of the next frame
    pub fn request_quit(&self) {
        self.quit.store(true, Ordering::Relaxed);
    }

    /// Run one frame. Returns false once the loop has stopped.
    pub fn run_frame(&mut self, sink: &mut impl FrameSink) -> bool {
        if !self.state.is_running() {
            return false;
        }

        self.input.poll(&self.state);
        if self.quit.load(Ordering::Relaxed) {
            log::info!("Quit signal received");
            self.state.stop();
            return false;
        }
        if self.input.is_pressed(Key::Cancel) {
            log::info!("Cancel key pressed");
            self.state.stop();
            return false;
        }

        let now = self.clock.now_ms();
        let state = std::mem::take(&mut self.state);
        let (state, report) = advance(state, now, &self.config, &self.input, &mut self.rng);
        self.state = state;
        self.frame_count += 1;

        sink.present(&self.state, &report);
        true
    }

    /// Run frames until stopped, then hand back the final state
    pub fn run(mut self, sink: &mut impl FrameSink) -> GameState {
        while self.run_frame(sink) {}
        self.state
    }
}
