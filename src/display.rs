//! # Display session for the HCMS-2902
//!
//! [`Hcms2902`] is what an application holds on to: it owns the [`BitBangBus`] and keeps a
//! shadow copy of the control register, because the display has no way to read anything back.
//!
//! Typically you want to look into the following functions:
//!  - `Hcms2902::new()` to create a session, nothing is sent yet
//!  - `Hcms2902::init()` to idle the bus, blank the digits and set the brightness
//!  - `Hcms2902::update_text()` / `update_str()` to show four characters
//!  - `Hcms2902::update_brightness()` to change the brightness at runtime
//!  - `Hcms2902::clear_text()` to blank the digits
//!
//! `sleep()`/`wake()` and `set_peak_current()` are for battery powered projects and very bright
//! or very dark surroundings.
//!
//! The session is not shared between threads or interrupt handlers by itself. All writes take
//! `&mut self`, put it behind a mutex if more than one context needs to talk to the display.

use hal::delay::DelayNs;
use hal::digital::OutputPin;

use crate::{
    bitbang::BitBangBus,
    instructions::{ControlWord0, PeakCurrent},
    Brightness, DOT_REGISTER_SIZE, NUM_DIGITS,
};

const BLANK: [u8; NUM_DIGITS] = [b' '; NUM_DIGITS];

/// State keeping of one HCMS-2902 and owner of its bus
#[derive(Debug)]
pub struct Hcms2902<CE, DIN, CLK, RS, DELAY> {
    bus: BitBangBus<CE, DIN, CLK, RS, DELAY>,
    id: u8,
    brightness: Brightness,
    peak_current: PeakCurrent,
    sleep: bool,
    #[cfg(feature = "graphics")]
    /// dot register contents drawn with embedded_graphics, one byte per column
    pub framebuffer: [u8; DOT_REGISTER_SIZE],
}

impl<CE, DIN, CLK, RS, DELAY, ERR> Hcms2902<CE, DIN, CLK, RS, DELAY>
where
    CE: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    CLK: OutputPin<Error = ERR>,
    RS: OutputPin<Error = ERR>,
    DELAY: DelayNs,
{
    /// Creates a new session. Nothing is sent to the display until `init()`.
    ///
    /// Arguments:
    ///
    /// - id: free to use identifier, handy when a project drives more than one display
    /// - brightness: PWM brightness used by `init()`, clamped to 0..=15
    /// - bus: the bit banged lines to the display
    pub fn new(
        id: u8,
        brightness: u8,
        bus: BitBangBus<CE, DIN, CLK, RS, DELAY>,
    ) -> Hcms2902<CE, DIN, CLK, RS, DELAY> {
        Hcms2902 {
            bus,
            id,
            brightness: Brightness::new(brightness),
            peak_current: PeakCurrent::default(),
            sleep: false,
            #[cfg(feature = "graphics")]
            framebuffer: [0u8; DOT_REGISTER_SIZE],
        }
    }

    /// Puts the bus in its idle state, blanks all digits and writes the configured brightness.
    ///
    /// The HCMS-2902 comes up with random dots lit, so call this before showing anything.
    pub fn init(&mut self) -> Result<(), ERR> {
        #[cfg(feature = "defmt")]
        defmt::debug!("hcms2902 #{=u8}: init, brightness {=u8}", self.id, self.brightness.level());
        self.bus.generate_init()?;
        self.bus.write_text(&BLANK)?;
        self.write_current_control_word()
    }

    /// Changes the PWM brightness. Values above 15 are clamped to 15.
    ///
    /// The clamped value is kept, see `brightness()`.
    pub fn update_brightness(&mut self, value: u8) -> Result<(), ERR> {
        self.brightness = Brightness::new(value);
        #[cfg(feature = "defmt")]
        defmt::debug!("hcms2902 #{=u8}: brightness {=u8}", self.id, self.brightness.level());
        self.write_current_control_word()
    }

    /// Shows four ascii characters, leftmost first. Characters without a glyph show as 'X'.
    pub fn update_text(&mut self, text: &[u8; NUM_DIGITS]) -> Result<(), ERR> {
        #[cfg(feature = "defmt")]
        defmt::debug!("hcms2902 #{=u8}: text {=[u8]:a}", self.id, text.as_slice());
        self.bus.write_text(text)
    }

    /// Shows the first four characters of `text`.
    ///
    /// Shorter strings are padded with spaces on the right, the rest of longer strings is
    /// dropped. Non-ascii characters show as 'X'.
    pub fn update_str(&mut self, text: &str) -> Result<(), ERR> {
        let mut digits = BLANK;
        for (digit, c) in digits.iter_mut().zip(text.chars()) {
            *digit = if c.is_ascii() { c as u8 } else { b'X' };
        }
        self.update_text(&digits)
    }

    /// Blanks all four digits.
    ///
    /// With the "graphics" feature, `DrawTarget::clear()` only touches the framebuffer.
    pub fn clear_text(&mut self) -> Result<(), ERR> {
        self.update_text(&BLANK)
    }

    /// Puts the display to sleep. The digits go dark but keep their contents.
    pub fn sleep(&mut self) -> Result<(), ERR> {
        self.set_sleep(true)
    }

    /// Wakes the display up, showing what it showed before `sleep()`.
    pub fn wake(&mut self) -> Result<(), ERR> {
        self.set_sleep(false)
    }

    fn set_sleep(&mut self, sleep: bool) -> Result<(), ERR> {
        self.sleep = sleep;
        #[cfg(feature = "defmt")]
        defmt::debug!("hcms2902 #{=u8}: sleep {=bool}", self.id, sleep);
        self.write_current_control_word()
    }

    /// Changes the peak current through every lit dot.
    ///
    /// This scales on top of the PWM brightness. Brightness writes keep the chosen value.
    pub fn set_peak_current(&mut self, peak_current: PeakCurrent) -> Result<(), ERR> {
        self.peak_current = peak_current;
        #[cfg(feature = "defmt")]
        defmt::debug!("hcms2902 #{=u8}: peak current {}", self.id, peak_current);
        self.write_current_control_word()
    }

    // The control register can't be read back, so every write repeats the whole word from the
    // shadow state. With the defaults (awake, 73 % peak current) this is BRIGHTNESS_MASK + level.
    fn write_current_control_word(&mut self) -> Result<(), ERR> {
        self.bus.write_control_word(self.control_word())
    }

    /// The control word this session last wrote (or will write on `init()`)
    pub fn control_word(&self) -> ControlWord0 {
        ControlWord0 {
            sleep: self.sleep,
            peak_current: self.peak_current,
            brightness: self.brightness,
        }
    }

    /// Identifier given to `new()`
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Current (clamped) brightness
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Current peak current setting
    pub fn peak_current(&self) -> PeakCurrent {
        self.peak_current
    }

    /// true after `sleep()`, until `wake()`
    pub fn is_sleeping(&self) -> bool {
        self.sleep
    }

    /// Writes raw columns to the dot register, leftmost column first. Bit 0 is the top dot.
    pub fn write_columns(&mut self, columns: &[u8; DOT_REGISTER_SIZE]) -> Result<(), ERR> {
        self.bus.write_columns(columns)
    }

    /// Ends the session and gives back the bus
    pub fn release(self) -> BitBangBus<CE, DIN, CLK, RS, DELAY> {
        self.bus
    }
}
