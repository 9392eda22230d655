//! Sensor subsystem — individual drivers and the aggregating [`SensorHub`].

pub mod float_switch;
pub mod temperature;

use float_switch::FloatSwitches;
use temperature::TemperatureSensor;

use crate::control::FloatSwitchPair;
use crate::error::SensorError;

/// Owns every sensor driver.
pub struct SensorHub {
    pub temperature: TemperatureSensor,
    pub floats: FloatSwitches,
}

impl SensorHub {
    /// Construct a new hub. Pass in pre-built drivers (built in main
    /// where peripheral ownership is established).
    pub fn new(temperature: TemperatureSensor, floats: FloatSwitches) -> Self {
        Self { temperature, floats }
    }

    /// Trigger a conversion and return °C.
    pub fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.temperature.read()
    }

    pub fn read_floats(&mut self) -> FloatSwitchPair {
        self.floats.read()
    }
}
