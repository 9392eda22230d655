//! NTC thermistor temperature sensor (10 kOhm @ 25 C, B = 3950).
//!
//! Wired in a voltage-divider with a fixed 10 kOhm resistor, read via
//! the ESP32-S3 ADC. The simplified Beta (Steinhart-Hart) equation
//! converts resistance to temperature.
//!
//! A reading pinned to either rail means an open or shorted thermistor and
//! is reported as an error, never as a temperature.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use log::debug;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;
use crate::error::SensorError;

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_ADC: AtomicU16 = AtomicU16::new(2048);
#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_FAULT: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_adc(raw: u16) {
    SIM_TEMP_ADC.store(raw, Ordering::Relaxed);
}

/// Make the next simulated ADC reads fail until cleared.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_temp_fault(failing: bool) {
    SIM_TEMP_FAULT.store(failing, Ordering::Relaxed);
}

const R25: f32 = 10_000.0;
const BETA: f32 = 3950.0;
const T25_K: f32 = 298.15;
const R_DIVIDER: f32 = 10_000.0;
const ADC_MAX: f32 = 4095.0;
const V_REF: f32 = 3.3;
/// Readings within this distance of a rail are treated as open/short.
const RAIL_MARGIN_V: f32 = 0.01;

/// Plausible enclosure range; anything outside is a wiring fault.
const MIN_PLAUSIBLE_C: f32 = -40.0;
const MAX_PLAUSIBLE_C: f32 = 125.0;

pub struct TemperatureSensor {
    adc_channel: u32,
}

impl TemperatureSensor {
    pub fn new(adc_channel: u32) -> Self {
        Self { adc_channel }
    }

    /// Sample the divider and convert to °C.
    pub fn read(&self) -> Result<f32, SensorError> {
        let raw = self.read_adc()?;
        adc_to_celsius(raw).inspect_err(|e| {
            debug!("ADC1 CH{} raw={} rejected: {}", self.adc_channel, raw, e);
        })
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(self.adc_channel)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> Result<u16, SensorError> {
        if SIM_TEMP_FAULT.load(Ordering::Relaxed) {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(SIM_TEMP_ADC.load(Ordering::Relaxed))
    }
}

/// Convert a raw 12-bit divider reading to °C.
pub fn adc_to_celsius(raw: u16) -> Result<f32, SensorError> {
    let voltage = (raw as f32 / ADC_MAX) * V_REF;
    if voltage <= RAIL_MARGIN_V || voltage >= (V_REF - RAIL_MARGIN_V) {
        return Err(SensorError::Disconnected);
    }
    let r_ntc = R_DIVIDER * voltage / (V_REF - voltage);
    let inv_t = (1.0 / T25_K) + (1.0 / BETA) * (r_ntc / R25).ln();
    if inv_t <= 0.0 {
        return Err(SensorError::OutOfRange);
    }
    let celsius = (1.0 / inv_t) - 273.15;
    if !(MIN_PLAUSIBLE_C..=MAX_PLAUSIBLE_C).contains(&celsius) {
        return Err(SensorError::OutOfRange);
    }
    Ok(celsius)
}
