//! Controller configuration.
//!
//! Thresholds and timing are compile-time constants. [`ControllerConfig`]
//! gathers them into one value that is handed to the controllers at
//! construction; there is no path that changes it while the loop runs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// --- Fan hysteresis ---
/// Fan switches on at or above this temperature (°C).
pub const FAN_ON_THRESHOLD_C: f32 = 26.0;
/// Fan switches off at or below this temperature (°C).
pub const FAN_OFF_THRESHOLD_C: f32 = 24.5;

// --- Pump safety ---
/// Longest continuous pump run before the safety lockout latches.
pub const MAX_PUMP_RUNTIME_MS: u32 = 5_000;

// --- Timing ---
/// Fixed delay between control cycles.
pub const CONTROL_PERIOD_MS: u32 = 1_000;

/// Core controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Fan ---
    /// Temperature (°C) at which the fan turns on
    pub fan_on_threshold_c: f32,
    /// Temperature (°C) at which the fan turns off
    pub fan_off_threshold_c: f32,

    // --- Pump ---
    /// Maximum continuous pump runtime (milliseconds)
    pub max_pump_runtime_ms: u32,

    // --- Timing ---
    /// Control loop delay (milliseconds)
    pub control_period_ms: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            fan_on_threshold_c: FAN_ON_THRESHOLD_C,
            fan_off_threshold_c: FAN_OFF_THRESHOLD_C,
            max_pump_runtime_ms: MAX_PUMP_RUNTIME_MS,
            control_period_ms: CONTROL_PERIOD_MS, // 1 Hz
        }
    }
}

impl ControllerConfig {
    /// Reject configurations the controllers cannot run safely with.
    pub fn validate(&self) -> Result<()> {
        if !self.fan_on_threshold_c.is_finite() || !self.fan_off_threshold_c.is_finite() {
            return Err(Error::Config("fan thresholds must be finite"));
        }
        if self.fan_off_threshold_c >= self.fan_on_threshold_c {
            return Err(Error::Config("fan off threshold must be below on threshold"));
        }
        if self.max_pump_runtime_ms == 0 {
            return Err(Error::Config("max pump runtime must be non-zero"));
        }
        if self.control_period_ms == 0 {
            return Err(Error::Config("control period must be non-zero"));
        }
        Ok(())
    }

    /// Width of the hysteresis band in °C.
    pub fn hysteresis_band_c(&self) -> f32 {
        self.fan_on_threshold_c - self.fan_off_threshold_c
    }
}
