//! Error type shared by every signal.

use thiserror::Error;

/// Raised when a configuration value or an input violates the mathematical
/// preconditions of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("Frequency must be positive and finite, got {0}")]
    InvalidFrequency(f64),

    #[error("Amplitude must be finite, got {0}")]
    NonFiniteAmplitude(f64),

    #[error("Phase offset must be finite, got {0}")]
    NonFinitePhaseOffset(f64),

    #[error("Timestamp at index {index} is not finite: {value}")]
    NonFiniteTimestamp { index: usize, value: f64 },

    #[error("Phase at index {index} is not finite: {value}")]
    NonFinitePhase { index: usize, value: f64 },

    #[error("Framerate must be positive and finite, got {0}")]
    InvalidFramerate(f64),

    #[error("Duration must be non-negative and finite, got {0}")]
    InvalidDuration(f64),

    #[error("Start time must be finite, got {0}")]
    NonFiniteStart(f64),
}
