//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements                 | Connects to            |
//! |-------------|----------------------------|------------------------|
//! | `hardware`  | SensorPort, ActuatorPort   | ESP32 ADC, GPIO        |
//! | `log_sink`  | EventSink                  | Serial log output      |
//! | `oled`      | TextPanel                  | SSD1306 over I2C       |
//! | `presenter` | StatusPresenter            | Log line / text panel  |
//! | `time`      | ClockPort                  | ESP32 system timer     |

pub mod hardware;
pub mod log_sink;
pub mod oled;
pub mod presenter;
pub mod time;
