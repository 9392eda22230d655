//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each application event as one
//! human-readable line to the logger (UART / USB-CDC in production).

use core::fmt;

use log::{Level, log};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::FanState;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let line = EventLine(event);
        log!(line.level(), "{line}");
    }
}

/// The serial transcript line for one event.
pub struct EventLine<'a>(pub &'a AppEvent);

impl EventLine<'_> {
    pub fn level(&self) -> Level {
        match self.0 {
            AppEvent::FaultDetected(_) => Level::Error,
            AppEvent::SensorFailed(_)
            | AppEvent::LockoutActive
            | AppEvent::PresenterUnavailable(_) => Level::Warn,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for EventLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            AppEvent::Started => write!(f, "System initialized. Monitoring started."),
            AppEvent::TemperatureSampled(t) => write!(f, "Temperature: {:.2} \u{00b0}C", t),
            AppEvent::SensorFailed(e) => write!(f, "Temperature: unavailable ({})", e),
            AppEvent::FanChanged(FanState::On) => write!(f, "Fan ON"),
            AppEvent::FanChanged(FanState::Off) => write!(f, "Fan OFF"),
            AppEvent::PumpStarted => write!(f, "Pump ON"),
            AppEvent::PumpStopped { runtime_ms } => write!(f, "Pump OFF (ran {} ms)", runtime_ms),
            AppEvent::FaultDetected(fault) => {
                write!(f, "Pump OFF - Safety Lockout Triggered: {}", fault)
            }
            AppEvent::LockoutActive => write!(f, "Pump locked out. Awaiting manual reset."),
            AppEvent::PresenterUnavailable(e) => {
                write!(f, "Status display unavailable ({}), continuing without it.", e)
            }
        }
    }
}
