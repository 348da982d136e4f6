//! Graphics driver for the HCMS-2902
//!
//! This module is behind a feature flag. Enable it in your Cargo.toml with feature flag
//! "graphics".
//!
//! It implements the `embedded_graphics_core` `DrawTarget` on [`Hcms2902`], so the four digits
//! can be used as one 20x8 pixel screen. There are gaps between the digits on the real part, and
//! the bottom row (y = 7) is not wired to any LED.
//!
//! Drawing only changes the framebuffer in memory, `flush()` sends it to the display. The
//! workflow is:
//!  - clear the framebuffer with `DrawTarget::clear()`
//!  - draw into it
//!  - `flush()`
//!
//! `update_text()` bypasses the framebuffer, whatever it shows is overwritten by the next
//! `flush()`.

use core::convert::{Infallible, TryFrom};

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};
use hal::delay::DelayNs;
use hal::digital::OutputPin;

use crate::{display::Hcms2902, DOT_REGISTER_SIZE, HEIGHT, WIDTH};

impl<CE, DIN, CLK, RS, DELAY, ERR> Hcms2902<CE, DIN, CLK, RS, DELAY>
where
    CE: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    CLK: OutputPin<Error = ERR>,
    RS: OutputPin<Error = ERR>,
    DELAY: DelayNs,
{
    /// Transfers the framebuffer to the dot register of the display.
    pub fn flush(&mut self) -> Result<(), ERR> {
        let columns = self.framebuffer;
        self.write_columns(&columns)
    }
}

impl<CE, DIN, CLK, RS, DELAY> Hcms2902<CE, DIN, CLK, RS, DELAY> {
    /// Sets the pixel at x, y in the framebuffer. Pixels outside the 20x8 area are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        if (0..u32::from(WIDTH)).contains(&x) && (0..u32::from(HEIGHT)).contains(&y) {
            let column = &mut self.framebuffer[x as usize];
            let mask: u8 = 1 << y;
            match color {
                BinaryColor::On => *column |= mask,
                BinaryColor::Off => *column &= !mask,
            };
        }
    }
}

impl<CE, DIN, CLK, RS, DELAY> DrawTarget for Hcms2902<CE, DIN, CLK, RS, DELAY> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Ok((x, y)) = <(u32, u32)>::try_from(coord) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        let byte: u8 = match color {
            BinaryColor::On => 0xff,
            BinaryColor::Off => 0x00,
        };
        self.framebuffer = [byte; DOT_REGISTER_SIZE];
        Ok(())
    }
}

impl<CE, DIN, CLK, RS, DELAY> OriginDimensions for Hcms2902<CE, DIN, CLK, RS, DELAY> {
    fn size(&self) -> Size {
        Size::new(WIDTH.into(), HEIGHT.into())
    }
}
