//! Enclosure Cooler Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                   │
//! │                                                            │
//! │  HardwareAdapter     LogEventSink   SystemClock  FreeRtos  │
//! │  (Sensor+Actuator)   (EventSink)    (ClockPort)  (DelayNs) │
//! │  Ssd1306Panel + PanelPresenter, LogPresenter               │
//! │  (TextPanel)    (StatusPresenter)                          │
//! │                                                            │
//! │  ───────────────── Port Trait Boundary ─────────────────   │
//! │                                                            │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │           ControlLoop (pure logic)                   │  │
//! │  │   FanController · PumpController · ControlState      │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;
use log::info;

use enclosure_cooler::adapters::hardware::HardwareAdapter;
use enclosure_cooler::adapters::log_sink::LogEventSink;
use enclosure_cooler::adapters::oled::Ssd1306Panel;
use enclosure_cooler::adapters::presenter::{LogPresenter, PanelPresenter};
use enclosure_cooler::adapters::time::SystemClock;
use enclosure_cooler::app::service::ControlLoop;
use enclosure_cooler::config::ControllerConfig;
use enclosure_cooler::drivers::{hw_init, output::SwitchedOutput};
use enclosure_cooler::pins;
use enclosure_cooler::sensors::float_switch::FloatSwitches;
use enclosure_cooler::sensors::temperature::TemperatureSensor;
use enclosure_cooler::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Enclosure cooler v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration (compile-time constants) ─────────────
    let config = ControllerConfig::default();
    config.validate()?;
    info!(
        "Fan on/off at {:.1}/{:.1} \u{00b0}C, pump cutout after {} ms, period {} ms",
        config.fan_on_threshold_c,
        config.fan_off_threshold_c,
        config.max_pump_runtime_ms,
        config.control_period_ms,
    );

    // ── 3. Peripherals (outputs come up LOW) ──────────────────
    hw_init::init_peripherals()?;

    // ── 4. Construct adapters ─────────────────────────────────
    let sensor_hub = SensorHub::new(
        TemperatureSensor::new(pins::TEMP_ADC_CHANNEL),
        FloatSwitches::new(pins::FLOAT_1_GPIO, pins::FLOAT_2_GPIO),
    );
    let mut hw = HardwareAdapter::new(
        sensor_hub,
        SwitchedOutput::new(pins::FAN_GPIO, "fan"),
        SwitchedOutput::new(pins::PUMP_GPIO, "pump"),
    );
    let clock = SystemClock::new();
    let mut delay = FreeRtos;
    let mut log_sink = LogEventSink::new();

    // ── 5. Status display (optional) ──────────────────────────
    let peripherals = Peripherals::take()?;
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio4, // SDA
        peripherals.pins.gpio5, // SCL
        &I2cConfig::new().baudrate(400.kHz().into()),
    )?;
    let panel = PanelPresenter::connect(Ssd1306Panel::new(i2c), &mut log_sink);
    let mut control = ControlLoop::new(config, Some((LogPresenter::new(), panel)));

    // ── 6. Control loop ───────────────────────────────────────
    control.start(&mut hw, &mut log_sink);
    control.run(&mut hw, &clock, &mut delay, &mut log_sink)
}
