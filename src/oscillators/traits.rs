//! Core trait definitions for oscillators.

use crate::DomainError;
use crate::signals::period_of;
use std::f64::consts::TAU;

/// Read access to the configuration shared by all periodic waveforms.
///
/// Oscillators here are immutable value objects, so this trait has no
/// setters; derive a new value with the `with_*` builders instead.
pub trait Oscillator {
    /// Frequency in Hz.
    fn frequency(&self) -> f64;

    /// Nominal peak magnitude.
    fn amplitude(&self) -> f64;

    /// Phase offset in radians.
    fn phase_offset(&self) -> f64;

    /// Number of elapsed cycles at time `t`, offset included.
    ///
    /// One full cycle of the waveform passes as this value advances by 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigwave::{Oscillator, SawtoothSignal};
    ///
    /// let saw = SawtoothSignal::new(2.0, 1.0, std::f64::consts::PI);
    /// assert_eq!(saw.phase_at(1.0), 2.5);
    /// ```
    fn phase_at(&self, t: f64) -> f64 {
        self.frequency() * t + self.phase_offset() / TAU
    }

    /// Checks the configuration can be evaluated and returns the period.
    ///
    /// # Errors
    ///
    /// `DomainError` if the frequency is not positive and finite, or the
    /// amplitude or phase offset is not finite.
    fn validate(&self) -> Result<f64, DomainError> {
        let period = period_of(self.frequency())?;
        if !self.amplitude().is_finite() {
            return Err(DomainError::NonFiniteAmplitude(self.amplitude()));
        }
        if !self.phase_offset().is_finite() {
            return Err(DomainError::NonFinitePhaseOffset(self.phase_offset()));
        }
        Ok(period)
    }
}
