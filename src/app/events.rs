//! Outbound application events and the per-cycle status view.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide where they go (serial log, test recorder).

use crate::control::{FanState, PumpState};
use crate::error::{DisplayError, Fault, SensorError};

/// Structured events emitted by the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Outputs driven low, monitoring about to begin.
    Started,

    /// A valid temperature was read this cycle.
    TemperatureSampled(f32),

    /// The temperature read failed; fan state was held.
    SensorFailed(SensorError),

    /// The fan switched.
    FanChanged(FanState),

    /// Both floats asserted and the pump started.
    PumpStarted,

    /// Floats cleared and the pump stopped normally.
    PumpStopped { runtime_ms: u32 },

    /// A safety fault latched.
    FaultDetected(Fault),

    /// Repeated every cycle while the pump is locked out.
    LockoutActive,

    /// The status display could not be brought up; running without it.
    PresenterUnavailable(DisplayError),
}

/// What the presenters see at the end of each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleStatus {
    pub cycle: u64,
    /// `None` when this cycle's read failed.
    pub temperature_c: Option<f32>,
    pub fan: FanState,
    pub pump: PumpState,
}

impl CycleStatus {
    pub fn pump_on(&self) -> bool {
        self.pump.output_level()
    }

    pub fn locked_out(&self) -> bool {
        self.pump.is_locked_out()
    }
}
