//! Sine waveform implementation.

use super::Oscillator;
use crate::signals::{map_timestamps, period_of};
use crate::{DomainError, Signal};
use std::f64::consts::TAU;

/// A sine wave evaluated at arbitrary times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineSignal {
    frequency: f64,
    amplitude: f64,
    phase_offset: f64,
}

impl SineSignal {
    /// Creates a new sine signal.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigwave::{Signal, SineSignal};
    ///
    /// let sine = SineSignal::new(1.0, 2.0, 0.0);
    /// let ys = sine.evaluate(&[0.25]).unwrap();
    /// assert!((ys[0] - 2.0).abs() < 1e-12);
    /// ```
    pub fn new(frequency: f64, amplitude: f64, phase_offset: f64) -> Self {
        log::debug!(
            "Constructing SineSignal: frequency={frequency} amplitude={amplitude} phase_offset={phase_offset}"
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

impl Default for SineSignal {
    fn default() -> Self {
        Self::new(440.0, 1.0, 0.0)
    }
}

impl Oscillator for SineSignal {
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

impl Signal for SineSignal {
    fn period(&self) -> Result<f64, DomainError> {
        period_of(self.frequency)
    }

    fn evaluate(&self, timestamps: &[f64]) -> Result<Vec<f64>, DomainError> {
        self.validate()?;
        map_timestamps(
            timestamps,
            |t| self.phase_at(t),
            |phase| self.amplitude * (TAU * phase).sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_signal_creation() {
        let sine = SineSignal::new(220.0, 0.5, 0.1);
        assert_eq!(sine.frequency(), 220.0);
        assert_eq!(sine.amplitude(), 0.5);
        assert_eq!(sine.phase_offset(), 0.1);
        assert_eq!(sine.period(), Ok(1.0 / 220.0));
    }

    #[test]
    fn test_quarter_points() {
        let sine = SineSignal::new(1.0, 1.0, 0.0);
        let ys = sine.evaluate(&[0.0, 0.25, 0.5, 0.75]).unwrap();
        let expected = [0.0, 1.0, 0.0, -1.0];
        for (y, e) in ys.iter().zip(expected) {
            assert!((y - e).abs() < EPSILON);
        }
    }

    #[test]
    fn test_phase_offset_is_in_radians() {
        // sin(x + pi/2) == cos(x)
        let sine = SineSignal::new(1.0, 1.0, PI / 2.0);
        let ys = sine.evaluate(&[0.0, 0.5]).unwrap();
        assert!((ys[0] - 1.0).abs() < EPSILON);
        assert!((ys[1] + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_sample_range() {
        let sine = SineSignal::new(13.0, 0.7, 0.0);
        let ts: Vec<f64> = (0..5000).map(|i| i as f64 * 1e-4).collect();
        for y in sine.evaluate(&ts).unwrap() {
            assert!(y.abs() <= 0.7 + EPSILON);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(SineSignal::new(0.0, 1.0, 0.0).period().is_err());
        assert!(matches!(
            SineSignal::default().evaluate(&[f64::INFINITY]),
            Err(DomainError::NonFiniteTimestamp { index: 0, .. })
        ));
        assert!(matches!(
            SineSignal::new(1e300, 1.0, 0.0).evaluate(&[1e300]),
            Err(DomainError::NonFinitePhase { index: 0, .. })
        ));
        assert!(matches!(
            SineSignal::new(1.0, f64::NAN, 0.0).evaluate(&[0.1]),
            Err(DomainError::NonFiniteAmplitude(_))
        ));
        assert!(matches!(
            SineSignal::new(1.0, 1.0, f64::NEG_INFINITY).evaluate(&[0.1]),
            Err(DomainError::NonFinitePhaseOffset(_))
        ));
    }
}
