//! Port traits — the hexagonal boundary between control logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (sensors, outputs, clock, display, event sinks) implement
//! these traits. The [`ControlLoop`](super::service::ControlLoop) consumes
//! them via generics, so the control logic never touches hardware directly.
//! Every call is synchronous; a slow adapter stalls the whole cycle.

use crate::control::FloatSwitchPair;
use crate::error::{DisplayError, SensorError};

use super::events::{AppEvent, CycleStatus};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the loop calls this to obtain fresh samples.
pub trait SensorPort {
    /// Trigger a conversion and return the temperature in °C.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Sample both float switches.
    fn read_floats(&mut self) -> FloatSwitchPair;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port. Outputs are plain levels; writing the same level twice
/// is harmless.
pub trait ActuatorPort {
    fn set_fan(&mut self, on: bool);

    fn set_pump(&mut self, on: bool);

    /// Drive every output low (safe state).
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond counter. Wraps at `u32::MAX`; callers must only
/// ever compare wrapping differences.
pub trait ClockPort {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostic transcript)
// ───────────────────────────────────────────────────────────────

/// The loop emits [`AppEvent`]s through this port. Nothing is read back.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Presentation ports
// ───────────────────────────────────────────────────────────────

/// Renders the per-cycle status somewhere a human can see it.
///
/// Purely observational: implementations swallow their own failures.
pub trait StatusPresenter {
    fn render(&mut self, status: &CycleStatus);
}

impl<A: StatusPresenter, B: StatusPresenter> StatusPresenter for (A, B) {
    fn render(&mut self, status: &CycleStatus) {
        self.0.render(status);
        self.1.render(status);
    }
}

/// A presenter that failed to come up renders nothing.
impl<P: StatusPresenter> StatusPresenter for Option<P> {
    fn render(&mut self, status: &CycleStatus) {
        if let Some(presenter) = self {
            presenter.render(status);
        }
    }
}

/// A small monochrome character panel.
pub trait TextPanel {
    /// Bring the panel up. An error means the panel is absent.
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Replace the panel contents. Rows from `highlight_from` onwards are
    /// drawn inverted.
    fn draw(&mut self, rows: &[&str], highlight_from: Option<usize>) -> Result<(), DisplayError>;
}
