//! Sawtooth waveform implementation.

use super::Oscillator;
use crate::signals::{map_timestamps, period_of};
use crate::{DomainError, Signal};

/// Mean of the raw fractional ramp over one cycle.
const RAMP_MEAN: f64 = 0.5;
/// Peak magnitude of the ramp once its mean is removed.
const RAMP_PEAK: f64 = 0.5;

/// Zero-centred sawtooth ramp in `[-1.0, 1.0]` for a given phase.
///
/// The fractional part truncates toward zero, so negative phases produce a
/// fraction in `(-1.0, 0.0]` whose mean is `-RAMP_MEAN`. Integer phases sit
/// on the reset: `-1.0` at or above zero, `1.0` below it.
pub(crate) fn ramp(phase: f64) -> f64 {
    let bias = if phase < 0.0 { -RAMP_MEAN } else { RAMP_MEAN };
    (phase.fract() - bias) / RAMP_PEAK
}

/// A sawtooth wave evaluated at arbitrary times.
///
/// The waveform rises linearly from `-amplitude` to `amplitude` once per
/// period, then drops sharply back. It is an immutable value: evaluation
/// never changes it and it is safe to share across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SawtoothSignal {
    frequency: f64,
    amplitude: f64,
    phase_offset: f64,
}

impl SawtoothSignal {
    /// Creates a new sawtooth signal.
    ///
    /// The frequency is checked when the signal is used, not here, so any
    /// configuration can be constructed and inspected.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz, must be positive and finite to evaluate
    /// * `amplitude` - Peak magnitude, 1.0 is nominal
    /// * `phase_offset` - Offset in radians
    ///
    /// # Examples
    ///
    /// ```
    /// use sigwave::{SawtoothSignal, Signal};
    ///
    /// let saw = SawtoothSignal::new(1.0, 1.0, 0.0);
    /// let ys = saw.evaluate(&[0.0, 0.25, 0.5, 0.75]).unwrap();
    /// assert_eq!(ys, vec![-1.0, -0.5, 0.0, 0.5]);
    /// ```
    pub fn new(frequency: f64, amplitude: f64, phase_offset: f64) -> Self {
        log::debug!(
            "Constructing SawtoothSignal: frequency={frequency} amplitude={amplitude} phase_offset={phase_offset}"
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

impl Default for SawtoothSignal {
    fn default() -> Self {
        Self::new(440.0, 1.0, 0.0)
    }
}

impl Oscillator for SawtoothSignal {
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

impl Signal for SawtoothSignal {
    fn period(&self) -> Result<f64, DomainError> {
        period_of(self.frequency)
    }

    fn evaluate(&self, timestamps: &[f64]) -> Result<Vec<f64>, DomainError> {
        self.validate()?;
        map_timestamps(
            timestamps,
            |t| self.phase_at(t),
            |phase| self.amplitude * ramp(phase),
        )
    }
}
