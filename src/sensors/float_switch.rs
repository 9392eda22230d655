//! Reservoir float switches.
//!
//! Two independent switches sit at the same level in the coolant
//! reservoir. Each is wired to a GPIO configured as a pull-up input and
//! pulls the line LOW when it reports the fill-needed condition.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads real GPIO levels via hw_init helpers.
//! On host/test: reads static levels, defaulting to HIGH (not triggered).

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

use log::warn;

use crate::control::FloatSwitchPair;
#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_LEVEL_1: AtomicBool = AtomicBool::new(true);
#[cfg(not(target_os = "espidf"))]
static SIM_LEVEL_2: AtomicBool = AtomicBool::new(true);

/// Set the simulated electrical level of float switch 1 (`false` = LOW).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_float_1_level(high: bool) {
    SIM_LEVEL_1.store(high, Ordering::Relaxed);
}

/// Set the simulated electrical level of float switch 2 (`false` = LOW).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_float_2_level(high: bool) {
    SIM_LEVEL_2.store(high, Ordering::Relaxed);
}

pub struct FloatSwitches {
    _gpio_1: i32,
    _gpio_2: i32,
    last: FloatSwitchPair,
}

impl FloatSwitches {
    pub fn new(gpio_1: i32, gpio_2: i32) -> Self {
        Self {
            _gpio_1: gpio_1,
            _gpio_2: gpio_2,
            last: FloatSwitchPair::default(),
        }
    }

    /// Sample both switches. Active LOW.
    pub fn read(&mut self) -> FloatSwitchPair {
        let pair = FloatSwitchPair::new(!self.read_level_1(), !self.read_level_2());

        if pair.disagree() && pair != self.last {
            warn!(
                "Float switches disagree (1={}, 2={}); pump stays gated",
                pair.first, pair.second
            );
        }
        self.last = pair;
        pair
    }

    #[cfg(target_os = "espidf")]
    fn read_level_1(&self) -> bool {
        hw_init::gpio_read(self._gpio_1)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_level_1(&self) -> bool {
        SIM_LEVEL_1.load(Ordering::Relaxed)
    }

    #[cfg(target_os = "espidf")]
    fn read_level_2(&self) -> bool {
        hw_init::gpio_read(self._gpio_2)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_level_2(&self) -> bool {
        SIM_LEVEL_2.load(Ordering::Relaxed)
    }
}
