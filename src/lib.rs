//! Sigwave - periodic waveforms evaluated at arbitrary times
//!
//! This library provides a `Signal` capability and the waveforms that
//! implement it. Signals are immutable values evaluated as pure functions
//! over caller-supplied timestamps.

pub mod error;
pub mod oscillators;
pub mod signals;

// Re-export commonly used types at the crate root
pub use error::DomainError;
pub use oscillators::{Oscillator, SawtoothSignal, SineSignal, SquareSignal};
pub use signals::{MAX_FRAMES, Signal, sample_times};
