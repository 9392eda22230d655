//! GPIO / peripheral pin assignments for the enclosure controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Actuators (relay / MOSFET gates, active HIGH)
// ---------------------------------------------------------------------------

/// Digital output: enclosure fan.
pub const FAN_GPIO: i32 = 15;
/// Digital output: coolant top-up pump.
pub const PUMP_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Float switches (pull-up inputs, LOW = fill needed)
// ---------------------------------------------------------------------------

/// First reservoir float switch.
pub const FLOAT_1_GPIO: i32 = 7;
/// Second (redundant) reservoir float switch.
pub const FLOAT_2_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Temperature sensor
// ---------------------------------------------------------------------------

/// NTC thermistor — 10 kΩ @ 25 °C, voltage-divider to ADC1 channel 7
/// (GPIO 8 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 8;
/// ADC1 channel wired to [`TEMP_ADC_GPIO`].
pub const TEMP_ADC_CHANNEL: u32 = 7;

// ---------------------------------------------------------------------------
// Status display (SSD1306 128x64 OLED on I2C0: SDA GPIO 4, SCL GPIO 5)
// ---------------------------------------------------------------------------

/// 7-bit I2C address of the OLED.
pub const DISPLAY_I2C_ADDR: u8 = 0x3C;
/// Panel text columns (21 x 6 px; the 5x8 font leaves a right margin).
pub const DISPLAY_COLUMNS: usize = 21;
/// Panel text rows (64 px / 8 px glyphs).
pub const DISPLAY_ROWS: usize = 8;
