//! Actuator drivers and hardware initialisation.

pub mod hw_init;
pub mod output;
