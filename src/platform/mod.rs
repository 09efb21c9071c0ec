//! Platform abstraction layer
//!
//! The simulation only ever asks three questions of the outside world:
//! - What time is it? (`Clock`)
//! - Is this key down? (`InputSource`)
//! - Give me a random integer (`RandomSource`)
//!
//! Real backends and deterministic fakes both live here.

pub mod input;
pub mod rng;
pub mod time;

pub use input::{Autopilot, FixedInput, InputSource, Key, ScriptedInput};
pub use rng::{Pcg32RandomSource, RandomSource, SequenceRandom};
pub use time::{Clock, ManualClock, SystemClock};
