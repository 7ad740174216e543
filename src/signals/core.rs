//! Core signal trait and the validation helpers shared by its implementors.
//!
//! A `Signal` here is a pure function of time: it is evaluated at whatever
//! timestamps the caller supplies, in whatever order, and keeps no state
//! between calls.

use crate::DomainError;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest grid `sample_times` will build.
pub const MAX_FRAMES: usize = 1 << 28;

/// Common interface for all periodic waveforms.
///
/// Generic code (rendering, analysis) treats every waveform kind through
/// this trait without special-casing. Implementors only provide `period()`
/// and `evaluate()`; `render()` is built on top of them.
///
/// The trait is object safe, so heterogeneous collections work:
///
/// ```
/// use sigwave::{SawtoothSignal, Signal, SineSignal};
///
/// let signals: Vec<Box<dyn Signal>> = vec![
///     Box::new(SawtoothSignal::new(2.0, 1.0, 0.0)),
///     Box::new(SineSignal::new(4.0, 0.5, 0.0)),
/// ];
/// let periods: Vec<f64> = signals.iter().map(|s| s.period().unwrap()).collect();
/// assert_eq!(periods, vec![0.5, 0.25]);
/// ```
pub trait Signal {
    /// Duration of one cycle in seconds.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidFrequency` if the frequency is not positive and finite.
    fn period(&self) -> Result<f64, DomainError>;

    /// Evaluates the signal at the given times.
    ///
    /// # Arguments
    ///
    /// * `timestamps` - Times in seconds, any order and spacing
    ///
    /// # Returns
    ///
    /// One sample per timestamp, in the same order
    ///
    /// # Errors
    ///
    /// `DomainError` if the configuration is not finite (or the frequency not
    /// positive), or if any timestamp or the phase it produces is not finite.
    fn evaluate(&self, timestamps: &[f64]) -> Result<Vec<f64>, DomainError>;

    /// Evaluates the signal over a uniform time grid.
    ///
    /// See [`sample_times`] for how the grid is laid out.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigwave::{SawtoothSignal, Signal};
    ///
    /// let saw = SawtoothSignal::new(1.0, 1.0, 0.0);
    /// let ys = saw.render(1.0, 0.0, 4.0).unwrap();
    /// assert_eq!(ys, vec![-1.0, -0.5, 0.0, 0.5]);
    /// ```
    fn render(&self, duration: f64, start: f64, framerate: f64) -> Result<Vec<f64>, DomainError> {
        let timestamps = sample_times(duration, start, framerate)?;
        self.evaluate(&timestamps)
    }
}

/// Builds `round(duration * framerate)` timestamps spaced `1 / framerate`
/// apart, beginning at `start`.
///
/// Grids longer than [`MAX_FRAMES`], or ones that cannot be allocated, are
/// rejected with `DomainError::InvalidDuration`.
///
/// # Examples
///
/// ```
/// use sigwave::sample_times;
///
/// let ts = sample_times(0.5, 1.0, 4.0).unwrap();
/// assert_eq!(ts, vec![1.0, 1.25]);
/// ```
pub fn sample_times(duration: f64, start: f64, framerate: f64) -> Result<Vec<f64>, DomainError> {
    if !(framerate.is_finite() && framerate > 0.0) {
        return Err(DomainError::InvalidFramerate(framerate));
    }
    if !(duration.is_finite() && duration >= 0.0) {
        return Err(DomainError::InvalidDuration(duration));
    }
    if !start.is_finite() {
        return Err(DomainError::NonFiniteStart(start));
    }

    let frames = (duration * framerate).round();
    if frames > MAX_FRAMES as f64 {
        return Err(DomainError::InvalidDuration(duration));
    }

    let count = frames as usize;
    let mut timestamps = Vec::new();
    timestamps
        .try_reserve_exact(count)
        .map_err(|_| DomainError::InvalidDuration(duration))?;
    timestamps.extend((0..count).map(|i| start + i as f64 / framerate));
    Ok(timestamps)
}

/// Returns the period for `frequency`, rejecting zero, negative and
/// non-finite values.
pub(crate) fn period_of(frequency: f64) -> Result<f64, DomainError> {
    if frequency.is_finite() && frequency > 0.0 {
        Ok(1.0 / frequency)
    } else {
        Err(DomainError::InvalidFrequency(frequency))
    }
}

/// Maps each timestamp to a phase, then shapes each phase into a sample.
///
/// Timestamps and their phases are checked sequentially so the reported
/// index is the first offending one, even when shaping runs in parallel.
pub(crate) fn map_timestamps<P, S>(
    timestamps: &[f64],
    phase: P,
    shape: S,
) -> Result<Vec<f64>, DomainError>
where
    P: Fn(f64) -> f64,
    S: Fn(f64) -> f64 + Send + Sync,
{
    let phases = timestamps
        .iter()
        .enumerate()
        .map(|(index, &t)| {
            if !t.is_finite() {
                return Err(DomainError::NonFiniteTimestamp { index, value: t });
            }
            let value = phase(t);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(DomainError::NonFinitePhase { index, value })
            }
        })
        .collect::<Result<Vec<f64>, DomainError>>()?;

    log::trace!("Evaluating {} timestamps", phases.len());

    #[cfg(feature = "parallel")]
    let samples = phases.par_iter().map(|&p| shape(p)).collect();

    #[cfg(not(feature = "parallel"))]
    let samples = phases.iter().map(|&p| shape(p)).collect();

    Ok(samples)
}
