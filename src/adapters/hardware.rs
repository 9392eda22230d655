//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorHub`] and both output drivers, exposing them through
//! [`SensorPort`] and [`ActuatorPort`]. On non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::control::FloatSwitchPair;
use crate::drivers::output::SwitchedOutput;
use crate::error::SensorError;
use crate::sensors::SensorHub;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor_hub: SensorHub,
    fan: SwitchedOutput,
    pump: SwitchedOutput,
}

impl HardwareAdapter {
    pub fn new(sensor_hub: SensorHub, fan: SwitchedOutput, pump: SwitchedOutput) -> Self {
        Self {
            sensor_hub,
            fan,
            pump,
        }
    }

    pub fn fan_on(&self) -> bool {
        self.fan.is_on()
    }

    pub fn pump_on(&self) -> bool {
        self.pump.is_on()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.sensor_hub.read_temperature()
    }

    fn read_floats(&mut self) -> FloatSwitchPair {
        self.sensor_hub.read_floats()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_fan(&mut self, on: bool) {
        self.fan.set(on);
    }

    fn set_pump(&mut self, on: bool) {
        self.pump.set(on);
    }

    fn all_off(&mut self) {
        self.fan.off();
        self.pump.off();
    }
}
