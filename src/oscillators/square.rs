//! Square waveform implementation.

use super::Oscillator;
use super::sawtooth::ramp;
use crate::signals::{map_timestamps, period_of};
use crate::{DomainError, Signal};

/// A square wave evaluated at arbitrary times.
///
/// Follows the sign of the matching sawtooth: `-amplitude` for the first
/// half of each cycle, `amplitude` for the second, and `0.0` exactly at the
/// midpoint where the sawtooth crosses zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareSignal {
    frequency: f64,
    amplitude: f64,
    phase_offset: f64,
}

impl SquareSignal {
    /// Creates a new square signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigwave::{Signal, SquareSignal};
    ///
    /// let square = SquareSignal::new(1.0, 1.0, 0.0);
    /// let ys = square.evaluate(&[0.25, 0.5, 0.75]).unwrap();
    /// assert_eq!(ys, vec![-1.0, 0.0, 1.0]);
    /// ```
    pub fn new(frequency: f64, amplitude: f64, phase_offset: f64) -> Self {
        log::debug!(
            "Constructing SquareSignal: frequency={frequency} amplitude={amplitude} phase_offset={phase_offset}"
        );
        Self {
            frequency,
            amplitude,
            phase_offset,
        }
    }

    /// Returns a copy with a different amplitude.
    pub fn with_amplitude(self, amplitude: f64) -> Self {
        Self { amplitude, ..self }
    }

    /// Returns a copy with a different phase offset.
    pub fn with_phase_offset(self, phase_offset: f64) -> Self {
        Self {
            phase_offset,
            ..self
        }
    }
}

impl Default for SquareSignal {
    fn default() -> Self {
        Self::new(440.0, 1.0, 0.0)
    }
}

impl Oscillator for SquareSignal {
    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn amplitude(&self) -> f64 {
        self.amplitude
    }

    fn phase_offset(&self) -> f64 {
        self.phase_offset
    }
}

impl Signal for SquareSignal {
    fn period(&self) -> Result<f64, DomainError> {
        period_of(self.frequency)
    }

    fn evaluate(&self, timestamps: &[f64]) -> Result<Vec<f64>, DomainError> {
        self.validate()?;
        map_timestamps(
            timestamps,
            |t| self.phase_at(t),
            |phase| {
                let level = ramp(phase);
                if level > 0.0 {
                    self.amplitude
                } else if level < 0.0 {
                    -self.amplitude
                } else {
                    0.0
                }
            },
        )
    }
}
