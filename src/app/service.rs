//! Control loop service — the hexagonal core.
//!
//! [`ControlLoop`] owns the controllers and the [`ControlState`]. All I/O
//! flows through port traits injected at call sites, making the whole cycle
//! testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!   ClockPort ──▶ │      ControlLoop       │ ──▶ StatusPresenter
//! ActuatorPort ◀──│   Fan · Pump · State   │
//!                 └────────────────────────┘
//! ```
//!
//! One cycle: read temperature → fan update → sample floats → pump update →
//! write outputs → render → fixed delay. The delay does not account for the
//! time the cycle body took, so the period drifts slightly; this is not a
//! hard real-time scheduler.

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::config::ControllerConfig;
use crate::control::{ControlState, FanController, FanState, PumpController, PumpState};
use crate::error::{Fault, SensorError};

use super::events::{AppEvent, CycleStatus};
use super::ports::{ActuatorPort, ClockPort, EventSink, SensorPort, StatusPresenter};

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

/// Fixed-period control loop.
pub struct ControlLoop<P> {
    fan: FanController,
    pump: PumpController,
    state: ControlState,
    /// `None` when no presenter could be brought up.
    presenter: Option<P>,
    period_ms: u32,
}

impl<P: StatusPresenter> ControlLoop<P> {
    /// Construct the loop. Does **not** touch hardware; call [`start`]
    /// before the first cycle.
    ///
    /// [`start`]: Self::start
    pub fn new(config: ControllerConfig, presenter: Option<P>) -> Self {
        Self {
            fan: FanController::new(&config),
            pump: PumpController::new(&config),
            state: ControlState::new(),
            presenter,
            period_ms: config.control_period_ms,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive both outputs low and announce that monitoring has begun.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        hw.all_off();
        sink.emit(&AppEvent::Started);
        if self.presenter.is_none() {
            info!("ControlLoop started without a status presenter");
        }
    }

    /// Cycle forever. Only power loss or reset ends the loop.
    pub fn run(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl ClockPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> ! {
        loop {
            self.cycle(hw, clock, delay, sink);
        }
    }

    /// One full cycle including the end-of-cycle delay.
    pub fn cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl ClockPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> CycleStatus {
        let status = self.tick(hw, clock, sink);
        delay.delay_ms(self.period_ms);
        status
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run the body of one cycle without sleeping.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &impl ClockPort,
        sink: &mut impl EventSink,
    ) -> CycleStatus {
        self.state.cycles = self.state.cycles.wrapping_add(1);

        // 1. Temperature → fan
        self.update_fan(hw, sink);

        // 2. Floats → pump
        let floats = hw.read_floats();
        let now_ms = clock.now_ms();
        self.update_pump(floats.triggered(), now_ms, sink);

        // 3. Outputs (re-asserted every cycle)
        hw.set_fan(self.state.fan.is_on());
        hw.set_pump(self.state.pump.output_level());

        // 4. Presentation
        let status = self.status();
        if let Some(presenter) = self.presenter.as_mut() {
            presenter.render(&status);
        }
        status
    }

    // ── Queries ───────────────────────────────────────────────

    /// Status view of the most recent cycle.
    pub fn status(&self) -> CycleStatus {
        CycleStatus {
            cycle: self.state.cycles,
            temperature_c: self.state.temperature_c,
            fan: self.state.fan,
            pump: self.state.pump,
        }
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn fan_state(&self) -> FanState {
        self.state.fan
    }

    pub fn pump_state(&self) -> PumpState {
        self.state.pump
    }

    pub fn has_presenter(&self) -> bool {
        self.presenter.is_some()
    }

    pub fn presenter(&self) -> Option<&P> {
        self.presenter.as_ref()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    // ── Internal ──────────────────────────────────────────────

    fn update_fan(&mut self, hw: &mut impl SensorPort, sink: &mut impl EventSink) {
        let reading = hw
            .read_temperature()
            .and_then(|t| if t.is_finite() { Ok(t) } else { Err(SensorError::OutOfRange) });

        match reading {
            Ok(temperature_c) => {
                self.state.temperature_c = Some(temperature_c);
                sink.emit(&AppEvent::TemperatureSampled(temperature_c));

                let next = self.fan.update(self.state.fan, temperature_c);
                if next != self.state.fan {
                    self.state.fan = next;
                    sink.emit(&AppEvent::FanChanged(next));
                }
            }
            Err(e) => {
                // Hold the fan: a dead sensor says nothing about how hot
                // the enclosure is.
                warn!("Temperature read failed ({e}), holding fan {}", self.state.fan.label());
                self.state.temperature_c = None;
                sink.emit(&AppEvent::SensorFailed(e));
            }
        }
    }

    fn update_pump(&mut self, floats_triggered: bool, now_ms: u32, sink: &mut impl EventSink) {
        let prev = self.state.pump;
        let next = self.pump.update(prev, floats_triggered, now_ms);
        self.state.pump = next;

        match (prev, next) {
            (PumpState::LockedOut, _) => sink.emit(&AppEvent::LockoutActive),
            (PumpState::Idle, PumpState::Running { .. }) => sink.emit(&AppEvent::PumpStarted),
            (PumpState::Running { .. }, PumpState::Idle) => {
                let runtime_ms = prev.runtime_ms(now_ms).unwrap_or(0);
                sink.emit(&AppEvent::PumpStopped { runtime_ms });
            }
            (PumpState::Running { .. }, PumpState::LockedOut) => {
                let runtime_ms = prev.runtime_ms(now_ms).unwrap_or(0);
                sink.emit(&AppEvent::FaultDetected(Fault::PumpOverrun { runtime_ms }));
            }
            _ => {}
        }
    }
}
