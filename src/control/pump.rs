//! Float-gated pump controller with runtime lockout.
//!
//! ## Safety contract
//!
//! The pump only runs while **both** float switches report the fill-needed
//! condition. A pump that keeps running past the configured maximum is
//! assumed to be running dry or held on by a stuck float, so it is shut off
//! and latched in [`PumpState::LockedOut`]. Nothing in software leaves that
//! state; the enclosure must be inspected and power-cycled.
//!
//! Time is a wrapping `u32` millisecond counter. Elapsed runtime is always
//! the wrapping difference `now - started_at`, so a counter rollover while
//! the pump runs does not shorten or extend the cutout.

use crate::config::ControllerConfig;

/// Pump run/lockout state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PumpState {
    #[default]
    Idle,
    Running {
        started_at_ms: u32,
    },
    /// Terminal.
    LockedOut,
}

impl PumpState {
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running { .. })
    }

    pub fn is_locked_out(self) -> bool {
        matches!(self, Self::LockedOut)
    }

    /// Level to drive on the pump output for this state.
    pub fn output_level(self) -> bool {
        self.is_running()
    }

    /// Milliseconds the pump has been running at `now_ms`, if it is running.
    pub fn runtime_ms(self, now_ms: u32) -> Option<u32> {
        match self {
            Self::Running { started_at_ms } => Some(now_ms.wrapping_sub(started_at_ms)),
            Self::Idle | Self::LockedOut => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "OFF",
            Self::Running { .. } => "ON",
            Self::LockedOut => "LOCKED",
        }
    }
}

/// Pure pump state machine; holds the runtime limit only.
#[derive(Debug, Clone, Copy)]
pub struct PumpController {
    max_runtime_ms: u32,
}

impl PumpController {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            max_runtime_ms: config.max_pump_runtime_ms,
        }
    }

    /// Next pump state.
    ///
    /// Precedence: lockout, then the float gate, then the runtime limit.
    pub fn update(&self, current: PumpState, floats_triggered: bool, now_ms: u32) -> PumpState {
        match current {
            PumpState::LockedOut => PumpState::LockedOut,
            PumpState::Idle if floats_triggered => PumpState::Running {
                started_at_ms: now_ms,
            },
            PumpState::Idle => PumpState::Idle,
            PumpState::Running { started_at_ms } if floats_triggered => {
                if now_ms.wrapping_sub(started_at_ms) > self.max_runtime_ms {
                    PumpState::LockedOut
                } else {
                    current
                }
            }
            PumpState::Running { .. } => PumpState::Idle,
        }
    }
}
