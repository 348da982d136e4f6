//! # Control register of the HCMS-2902
//!
//! The HCMS-2902 has two registers behind its serial port. With RS low, shifted data goes to the
//! 160 bit dot register (the pixels). With RS high, the byte goes to the control register, which
//! is a pair of control words told apart by bit 7.
//!
//! This driver only uses control word 0 (bit 7 clear). The layout, as in the data sheet:
//!
//! | bit   | 7 | 6                      | 5 4          | 3 2 1 0        |
//! |-------|---|------------------------|--------------|----------------|
//! | field | 0 | 0 = sleep, 1 = normal  | peak current | PWM brightness |
//!
//! ## PWM brightness
//! The low nibble sets the on-time of the LED drivers, from 0 (dimmest, but not off) to 15.
//! Changing it at runtime is cheap: a single byte on the wire.
//!
//! ## Peak current
//! Bits 5 and 4 scale the current through every lit dot, which multiplies with the PWM
//! brightness. At power up the part sits at 73 %, and that's what the brightness writes of this
//! driver keep unless told otherwise.
//!
//! ## Sleep
//! Clearing bit 6 stops the internal oscillator and blanks the display. The dot register keeps
//! its contents, setting bit 6 again shows the previous image.

use crate::{Brightness, BRIGHTNESS_MASK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
/// Peak pixel current, relative to the maximum of 12.8 mA.
pub enum PeakCurrent {
    /// 4.0 mA, 31 % relative brightness
    Relative31 = 0b10,

    /// 6.4 mA, 50 % relative brightness
    Relative50 = 0b01,

    /// 9.3 mA, 73 % relative brightness. Power up default.
    #[default]
    Relative73 = 0b00,

    /// 12.8 mA, 100 % relative brightness
    Relative100 = 0b11,
}

/// Control word 0: sleep, peak current and PWM brightness in one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlWord0 {
    /// if true the oscillator stops and the display goes blank
    pub sleep: bool,

    /// current through a lit dot
    pub peak_current: PeakCurrent,

    /// PWM on-time
    pub brightness: Brightness,
}

impl ControlWord0 {
    /// Awake, default peak current and the given brightness
    pub const fn with_brightness(brightness: Brightness) -> ControlWord0 {
        ControlWord0 {
            sleep: false,
            peak_current: PeakCurrent::Relative73,
            brightness,
        }
    }

    /// Returns the control word as the byte which is shifted out with RS high
    pub const fn byte(self) -> u8 {
        let normal = if self.sleep { 0 } else { BRIGHTNESS_MASK };
        normal | ((self.peak_current as u8) << 4) | self.brightness.level()
    }
}

impl Default for ControlWord0 {
    fn default() -> ControlWord0 {
        ControlWord0::with_brightness(Brightness::MAX)
    }
}

impl From<ControlWord0> for u8 {
    fn from(word: ControlWord0) -> u8 {
        word.byte()
    }
}
