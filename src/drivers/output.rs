//! Switched (on/off) actuator output — fan and pump gates.
//!
//! ## Safety contract
//!
//! This driver is a dumb actuator. Whether the pump may run is decided by
//! the pump controller; the driver only mirrors the level it is given.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use log::debug;

use crate::drivers::hw_init;

pub struct SwitchedOutput {
    gpio: i32,
    name: &'static str,
    on: bool,
    writes: u32,
}

impl SwitchedOutput {
    pub fn new(gpio: i32, name: &'static str) -> Self {
        Self {
            gpio,
            name,
            on: false,
            writes: 0,
        }
    }

    /// Drive the output. Repeating the current level rewrites the pin but is
    /// otherwise a no-op.
    pub fn set(&mut self, on: bool) {
        if on != self.on {
            debug!("{} output -> {}", self.name, if on { "HIGH" } else { "LOW" });
        }
        hw_init::gpio_write(self.gpio, on);
        self.on = on;
        self.writes = self.writes.wrapping_add(1);
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Pin writes since construction (wraps).
    pub fn writes(&self) -> u32 {
        self.writes
    }
}
