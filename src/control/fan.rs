//! Fan hysteresis controller.
//!
//! Two thresholds bound a dead band: the fan comes on at or above the upper
//! one and goes off at or below the lower one. Readings inside the band never
//! change the state, so a temperature hovering at a single setpoint cannot
//! make the relay chatter.

use crate::config::ControllerConfig;

/// Commanded fan level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanState {
    #[default]
    Off,
    On,
}

impl FanState {
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }
}

/// Pure hysteresis state machine; holds thresholds only.
#[derive(Debug, Clone, Copy)]
pub struct FanController {
    on_threshold_c: f32,
    off_threshold_c: f32,
}

impl FanController {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            on_threshold_c: config.fan_on_threshold_c,
            off_threshold_c: config.fan_off_threshold_c,
        }
    }

    /// Next fan state for a valid reading.
    ///
    /// A NaN reading compares false against both thresholds and leaves the
    /// state unchanged.
    pub fn update(&self, current: FanState, temperature_c: f32) -> FanState {
        match current {
            FanState::Off if temperature_c >= self.on_threshold_c => FanState::On,
            FanState::On if temperature_c <= self.off_threshold_c => FanState::Off,
            unchanged => unchanged,
        }
    }
}
