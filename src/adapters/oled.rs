//! SSD1306 128x64 OLED behind the [`TextPanel`] port.
//!
//! Generic over any `embedded-hal` 1.0 I2C bus: `I2cDriver` on the board,
//! a scripted bus in tests. Text uses the 5x8 mono font, one row per 8 px,
//! so the panel holds [`DISPLAY_ROWS`] rows. Highlighted rows are drawn as
//! dark text on a lit bar.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::app::ports::TextPanel;
use crate::error::DisplayError;
use crate::pins::{DISPLAY_I2C_ADDR, DISPLAY_ROWS};

const ROW_HEIGHT_PX: u32 = 8;

type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Status panel on the SSD1306 at [`DISPLAY_I2C_ADDR`].
pub struct Ssd1306Panel<I2C> {
    display: Display<I2C>,
}

impl<I2C: I2c> Ssd1306Panel<I2C> {
    /// Wrap the bus. Nothing is sent until [`TextPanel::init`].
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
        let display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { display }
    }
}

impl<I2C: I2c> TextPanel for Ssd1306Panel<I2C> {
    fn init(&mut self) -> Result<(), DisplayError> {
        // No ACK at the panel address is the only failure seen here.
        self.display.init().map_err(|_| DisplayError::NotFound)
    }

    fn draw(&mut self, rows: &[&str], highlight_from: Option<usize>) -> Result<(), DisplayError> {
        DrawTarget::clear(&mut self.display, BinaryColor::Off).map_err(|_| DisplayError::Bus)?;

        let normal = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let inverted = MonoTextStyle::new(&FONT_5X8, BinaryColor::Off);
        let bar = PrimitiveStyle::with_fill(BinaryColor::On);
        let width = self.display.bounding_box().size.width;

        for (i, row) in rows.iter().take(DISPLAY_ROWS).enumerate() {
            let top = Point::new(0, (i as u32 * ROW_HEIGHT_PX) as i32);
            let style = if highlight_from.is_some_and(|from| i >= from) {
                Rectangle::new(top, Size::new(width, ROW_HEIGHT_PX))
                    .into_styled(bar)
                    .draw(&mut self.display)
                    .map_err(|_| DisplayError::Bus)?;
                inverted
            } else {
                normal
            };
            Text::with_baseline(row, top, style, Baseline::Top)
                .draw(&mut self.display)
                .map_err(|_| DisplayError::Bus)?;
        }

        self.display.flush().map_err(|_| DisplayError::Bus)
    }
}
