//! Patrol command — the payload published to the patrol bot.
//!
//! DESIGN
//! ======
//! `PatrolCommand` is the one wire message this service emits:
//! `{"shape": "<kind>", "sensitivity": <number>}`. Sensitivity is a validated
//! newtype so an out-of-range or off-grid value can never reach the broker.
//! The command is built at submit time, published once, and not retained.

use serde::Serialize;

use crate::geometry::ShapeKind;

// =============================================================================
// ERROR
// =============================================================================

/// Errors raised while building or serializing a patrol command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The submitted shape name is not one of line/triangle/square.
    #[error("invalid shape selection: {0:?}")]
    InvalidSelection(String),

    /// Sensitivity is outside the accepted range.
    #[error("sensitivity {0} outside [{min}, {max}]", min = Sensitivity::MIN, max = Sensitivity::MAX)]
    SensitivityOutOfRange(f64),

    /// Sensitivity is not a multiple of the input step.
    #[error("sensitivity {0} is not a multiple of {step}", step = Sensitivity::STEP)]
    SensitivityOffStep(f64),

    /// The command could not be serialized to JSON.
    #[error("command serialization failed: {0}")]
    Serialization(String),
}

// =============================================================================
// SENSITIVITY
// =============================================================================

/// Patrol sensitivity: a decimal in [0.1, 0.9] on a 0.1 grid. Uninterpreted
/// by this service; forwarded verbatim to the patrol bot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sensitivity(f64);

impl Sensitivity {
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 0.9;
    pub const STEP: f64 = 0.1;
    pub const DEFAULT: f64 = 0.5;

    /// Validate a raw input value. Tolerates float noise around grid points
    /// and stores the snapped value so serialization prints `0.7`, not
    /// `0.7000000000000001`.
    pub fn new(raw: f64) -> Result<Self, CommandError> {
        if !raw.is_finite() {
            return Err(CommandError::SensitivityOutOfRange(raw));
        }
        let steps = raw / Self::STEP;
        if (steps - steps.round()).abs() > 1e-6 {
            return Err(CommandError::SensitivityOffStep(raw));
        }
        let snapped = steps.round() * Self::STEP;
        // Snap once more onto the decimal grid before range checking.
        let snapped = (snapped * 10.0).round() / 10.0;
        if snapped < Self::MIN - 1e-9 || snapped > Self::MAX + 1e-9 {
            return Err(CommandError::SensitivityOutOfRange(raw));
        }
        Ok(Self(snapped))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

// =============================================================================
// PATROL COMMAND
// =============================================================================

/// The wire payload. Field order matches the published JSON.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatrolCommand {
    pub shape: ShapeKind,
    pub sensitivity: Sensitivity,
}

impl PatrolCommand {
    #[must_use]
    pub fn new(shape: ShapeKind, sensitivity: Sensitivity) -> Self {
        Self { shape, sensitivity }
    }

    /// Serialize to the JSON text that goes out on the topic.
    pub fn to_json(self) -> Result<String, CommandError> {
        serde_json::to_string(&self).map_err(|e| CommandError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
#[path = "command_test.rs"]
mod tests;
