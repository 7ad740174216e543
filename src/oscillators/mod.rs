//! Periodic waveforms evaluated at arbitrary times.
//!
//! Every waveform shares the same configuration triple (frequency,
//! amplitude, phase offset) exposed through `Oscillator`, and implements
//! `Signal` for evaluation.

mod sawtooth;
mod sine;
mod square;
mod traits;

pub use sawtooth::SawtoothSignal;
pub use sine::SineSignal;
pub use square::SquareSignal;
pub use traits::Oscillator;
