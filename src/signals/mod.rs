//! Signal abstraction.
//!
//! This module provides the capability every waveform implements:
//! - `Signal` trait with `period()`, `evaluate()` and `render()`
//! - `sample_times` for building uniform time grids

mod core;

pub use self::core::{MAX_FRAMES, Signal, sample_times};
pub(crate) use self::core::{map_timestamps, period_of};
