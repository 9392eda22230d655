//! Control logic — the fan hysteresis and the pump lockout state machines.
//!
//! Both controllers are pure: they take the previous state plus this cycle's
//! sample and return the next state. Output pins, logging and timing belong
//! to the [`ControlLoop`](crate::app::service::ControlLoop).

pub mod context;
pub mod fan;
pub mod pump;

pub use context::{ControlState, FloatSwitchPair};
pub use fan::{FanController, FanState};
pub use pump::{PumpController, PumpState};
