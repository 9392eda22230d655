//! Control state owned by the loop, and the per-cycle input samples.
//!
//! `ControlState` is the single struct the loop threads through the
//! controllers. It holds everything that survives from one cycle to the
//! next. Float samples are taken fresh each cycle and never stored here.

use super::fan::FanState;
use super::pump::PumpState;

// ---------------------------------------------------------------------------
// Float switch sample
// ---------------------------------------------------------------------------

/// One sample of the two reservoir float switches.
///
/// Each field is `true` when that switch reports the fill-needed condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FloatSwitchPair {
    pub first: bool,
    pub second: bool,
}

impl FloatSwitchPair {
    pub fn new(first: bool, second: bool) -> Self {
        Self { first, second }
    }

    /// Both switches agree that the reservoir needs filling. A single
    /// asserted switch never counts.
    pub fn triggered(&self) -> bool {
        self.first && self.second
    }

    /// Exactly one switch is asserted.
    pub fn disagree(&self) -> bool {
        self.first != self.second
    }
}

// ---------------------------------------------------------------------------
// ControlState
// ---------------------------------------------------------------------------

/// State carried across control cycles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlState {
    pub fan: FanState,
    pub pump: PumpState,
    /// This cycle's temperature; `None` when the read failed.
    pub temperature_c: Option<f32>,
    /// Completed cycles since startup.
    pub cycles: u64,
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked_out(&self) -> bool {
        self.pump.is_locked_out()
    }
}
