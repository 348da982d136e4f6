//! "Bit bang" implementation of the HCMS-2902 serial interface
//!
//! The HCMS-2902 listens on four lines. Chip Enable frames a transfer, Register Select picks the
//! dot register (low) or the control register (high), and Data In is sampled on every rising edge
//! of Clock, most significant bit first.
//!
//! Use `BitBangBus::new()` for slow cores that can't toggle a pin faster than the part allows,
//! and `BitBangBus::new_with_delay()` for everything else. The delay is given in units of 100 ns
//! and inserted at every framing transition and in both halves of every clock pulse.
//!
//! Every sequence in here leaves RS low, so the bus is back to dot register addressing when the
//! call returns.

use hal::delay::DelayNs;
use hal::digital::OutputPin;

use crate::{
    font::{glyph, Glyph},
    instructions::ControlWord0,
    Brightness, DOT_REGISTER_SIZE, MSB_MASK, NUM_DIGITS, NUM_DOTS_IN_COLUMN,
};

/// Used to run without delay on a slow enough core
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    #[inline]
    fn delay_ns(&mut self, _ns: u32) {}
}

/// The four lines to the display plus the delay between transitions.
#[derive(Debug)]
pub struct BitBangBus<CE, DIN, CLK, RS, DELAY> {
    ce: CE,
    din: DIN,
    clk: CLK,
    rs: RS,
    delay: DELAY,
    delay_100ns: u32,
}

impl<CE, DIN, CLK, RS, ERR> BitBangBus<CE, DIN, CLK, RS, NoDelay>
where
    CE: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    CLK: OutputPin<Error = ERR>,
    RS: OutputPin<Error = ERR>,
{
    /// Constructs the bus from the "chip enable", "data in", "clock" and "register select" pins,
    /// without any delay between transitions.
    /// If your core toggles pins faster than the display's timing allows, use `new_with_delay`.
    pub fn new(ce: CE, din: DIN, clk: CLK, rs: RS) -> BitBangBus<CE, DIN, CLK, RS, NoDelay> {
        BitBangBus::new_with_delay(ce, din, clk, rs, NoDelay, 0)
    }
}

impl<CE, DIN, CLK, RS, DELAY, ERR> BitBangBus<CE, DIN, CLK, RS, DELAY>
where
    CE: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    CLK: OutputPin<Error = ERR>,
    RS: OutputPin<Error = ERR>,
    DELAY: DelayNs,
{
    /// Constructs the bus with a delay of `delay_100ns` times 100 ns at every transition.
    ///
    /// No pin is touched until the first write; `Hcms2902::init()` puts the lines in their idle
    /// state.
    ///
    /// ```ignore
    /// let delay = cortex_m::delay::Delay::new(cp.SYST, clocks.system_clock.freq().to_Hz());
    /// // 100 ns between transitions
    /// let bus = BitBangBus::new_with_delay(ce, din, clk, rs, delay, 1);
    /// ```
    pub fn new_with_delay(
        ce: CE,
        din: DIN,
        clk: CLK,
        rs: RS,
        delay: DELAY,
        delay_100ns: u32,
    ) -> BitBangBus<CE, DIN, CLK, RS, DELAY> {
        BitBangBus {
            ce,
            din,
            clk,
            rs,
            delay,
            delay_100ns,
        }
    }

    /// The configured delay, in units of 100 ns
    pub fn delay_100ns(&self) -> u32 {
        self.delay_100ns
    }

    /// Gives back the pins and the delay, in the order `new_with_delay` takes them
    pub fn release(self) -> (CE, DIN, CLK, RS, DELAY) {
        (self.ce, self.din, self.clk, self.rs, self.delay)
    }

    #[inline]
    fn wait(&mut self) {
        self.delay.delay_ns(self.delay_100ns.saturating_mul(100));
    }

    /// One low-high-low pulse on CLK, the display samples DIN on the rising edge.
    pub fn generate_clock(&mut self) -> Result<(), ERR> {
        self.clk.set_low()?;
        self.wait();
        self.clk.set_high()?;
        self.wait();
        self.clk.set_low()
    }

    /// Puts the bus in its idle state: CE high, CLK and DIN low.
    pub fn generate_init(&mut self) -> Result<(), ERR> {
        self.ce.set_high()?;
        self.clk.set_low()?;
        self.din.set_low()
    }

    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        if high {
            self.din.set_high()?;
        } else {
            self.din.set_low()?;
        }
        self.generate_clock()
    }

    /// Shifts one byte out, MSB first, and clears DIN afterwards.
    ///
    /// This doesn't frame the transfer, see `write_text()` and `write_reg0()` for that.
    pub fn write(&mut self, mut value: u8) -> Result<(), ERR> {
        for _ in 0..NUM_DOTS_IN_COLUMN {
            self.write_bit((value & MSB_MASK) == MSB_MASK)?;
            value <<= 1;
        }
        self.din.set_low()
    }

    /// Shifts the five columns of one digit out, leftmost column first.
    pub fn write_array(&mut self, columns: &Glyph) -> Result<(), ERR> {
        for column in columns {
            self.write(*column)?;
        }
        Ok(())
    }

    /// Shifts the glyph of an ascii character out. Unknown characters show as 'X'.
    pub fn write_char(&mut self, c: u8) -> Result<(), ERR> {
        self.write_array(glyph(c))
    }

    /// Writes one byte to the control register.
    ///
    /// RS goes high for the transfer and is pulled low again as the very last step.
    pub fn write_reg0(&mut self, value: u8) -> Result<(), ERR> {
        self.rs.set_high()?;
        self.wait();
        self.ce.set_low()?;
        self.wait();
        self.write(value)?;
        // latch
        self.ce.set_high()?;
        self.wait();
        self.clk.set_low()?;
        self.wait();
        self.rs.set_low()
    }

    /// Writes the PWM brightness to control word 0, with the display awake and at the default
    /// peak current.
    pub fn write_brightness(&mut self, brightness: Brightness) -> Result<(), ERR> {
        self.write_control_word(ControlWord0::with_brightness(brightness))
    }

    /// Writes a full control word 0
    pub fn write_control_word(&mut self, word: ControlWord0) -> Result<(), ERR> {
        let byte = word.byte();
        #[cfg(feature = "defmt")]
        defmt::trace!("control word 0 = {=u8:#x}", byte);
        self.write_reg0(byte)
    }

    /// Writes four characters to the dot register, leftmost digit first.
    pub fn write_text(&mut self, text: &[u8; NUM_DIGITS]) -> Result<(), ERR> {
        self.write_dot_register(|bus| {
            for c in text {
                bus.write_char(*c)?;
            }
            Ok(())
        })
    }

    /// Writes raw columns to the dot register, leftmost column of the leftmost digit first.
    pub fn write_columns(&mut self, columns: &[u8; DOT_REGISTER_SIZE]) -> Result<(), ERR> {
        self.write_dot_register(|bus| {
            for column in columns {
                bus.write(*column)?;
            }
            Ok(())
        })
    }

    // RS low selects the dot register, CE low opens the transfer and CE high latches it
    fn write_dot_register<F>(&mut self, payload: F) -> Result<(), ERR>
    where
        F: FnOnce(&mut Self) -> Result<(), ERR>,
    {
        self.rs.set_low()?;
        self.wait();
        self.ce.set_low()?;
        self.wait();
        payload(self)?;
        self.ce.set_high()?;
        self.wait();
        self.clk.set_low()?;
        self.wait();
        self.din.set_low()
    }
}
