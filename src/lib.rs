//! # Driver for the HCMS-2902 dot-matrix LED display
//!
//! The HCMS-2902 holds four 5x7 dot-matrix digits behind a write-only serial interface made of
//! four lines: Chip Enable (CE), Data In (DIN), Clock (CLK) and Register Select (RS).
//! This crate bit-bangs that interface with any `embedded_hal` 1.0 `OutputPin`s and a
//! `DelayNs` provider.
//!
//! The driver is split in layers:
//!  - [`bitbang::BitBangBus`] owns the four lines and the delay, and knows the signal
//!    sequences: clock pulse, byte shift, glyph, control register and dot register framing.
//!  - [`font`] is the fixed character to glyph table.
//!  - [`instructions`] encodes the control register byte.
//!  - [`display::Hcms2902`] is the display session most users want: `init()`,
//!    `update_brightness()` and `update_text()`.
//!
//! With the "graphics" feature the session also becomes an `embedded_graphics_core`
//! `DrawTarget` backed by a 20x8 framebuffer.
//!
//! ```ignore
//! let bus = BitBangBus::new_with_delay(ce, din, clk, rs, delay, 1);
//! let mut display = Hcms2902::new(0, 15, bus);
//! display.init()?;
//! display.update_text(b"TEST")?;
//! ```
#![no_std]

extern crate embedded_hal as hal;

pub mod bitbang;
pub mod display;
pub mod font;
pub mod instructions;

#[cfg(feature = "graphics")]
pub mod graphics;

pub use crate::{
    bitbang::{BitBangBus, NoDelay},
    display::Hcms2902,
    font::Glyph,
    instructions::{ControlWord0, PeakCurrent},
};

/// Number of digits on the display
pub const NUM_DIGITS: usize = 4;
/// Number of dot columns in one digit
pub const NUM_COLUMNS: usize = 5;
/// Number of dots in one column, i.e. bits per transmitted byte
pub const NUM_DOTS_IN_COLUMN: usize = 8;
/// Mask of the bit that is shifted out first
pub const MSB_MASK: u8 = 0x80;
/// Control word 0 with the sleep bit released, brightness goes in the low nibble
pub const BRIGHTNESS_MASK: u8 = 0x40;
/// Lowest PWM brightness level
pub const LIGHT_MIN: u8 = 0;
/// Highest PWM brightness level
pub const LIGHT_MAX: u8 = 15;

/// Width of the dot register in pixels
pub const WIDTH: u8 = (NUM_DIGITS * NUM_COLUMNS) as u8;
/// Height of the dot register in pixels
pub const HEIGHT: u8 = NUM_DOTS_IN_COLUMN as u8;
/// Size of the dot register in bytes (one byte per column)
pub const DOT_REGISTER_SIZE: usize = NUM_DIGITS * NUM_COLUMNS;

/// PWM brightness level, always in `LIGHT_MIN..=LIGHT_MAX`.
///
/// Out of range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// The dimmest level the display can show (not off, see `Hcms2902::sleep()`)
    pub const MIN: Brightness = Brightness(LIGHT_MIN);
    /// The brightest level
    pub const MAX: Brightness = Brightness(LIGHT_MAX);

    /// Creates a brightness level, clamping `level` into `LIGHT_MIN..=LIGHT_MAX`
    pub const fn new(level: u8) -> Brightness {
        // LIGHT_MIN is 0, an u8 can't undershoot it
        if level > LIGHT_MAX {
            Brightness(LIGHT_MAX)
        } else {
            Brightness(level)
        }
    }

    /// The clamped level
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl From<u8> for Brightness {
    fn from(level: u8) -> Brightness {
        Brightness::new(level)
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> u8 {
        brightness.0
    }
}
