//! Recording pins for protocol tests.
//!
//! All four lines and the delay write into one shared log, so the order of transitions across
//! lines can be checked and the transmitted bytes decoded the way the display sees them.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use hcms2902::{BitBangBus, Hcms2902};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Ce,
    Din,
    Clk,
    Rs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    Dot,
    Control,
}

/// Bytes latched by one CE low-high cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub register: Register,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn pin(&self, line: Line) -> RecordingPin {
        RecordingPin {
            line,
            log: self.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay { log: self.clone() }
    }

    /// Levels of (ce, din, clk, rs) after replaying the log, `None` if never driven
    pub fn levels(&self) -> [Option<bool>; 4] {
        let mut levels = [None; 4];
        for event in self.events() {
            if let Event::Set(line, high) = event {
                levels[line as usize] = Some(high);
            }
        }
        levels
    }

    pub fn level(&self, line: Line) -> Option<bool> {
        self.levels()[line as usize]
    }

    /// DIN as sampled on every rising CLK edge
    pub fn sampled_bits(&self) -> Vec<bool> {
        let mut din = false;
        let mut clk = false;
        let mut bits = Vec::new();
        for event in self.events() {
            match event {
                Event::Set(Line::Din, high) => din = high,
                Event::Set(Line::Clk, high) => {
                    if high && !clk {
                        bits.push(din);
                    }
                    clk = high;
                }
                _ => {}
            }
        }
        bits
    }

    /// Replays the log like the display would: bits shift in on rising CLK while CE is low and
    /// RS is sampled when CE goes high again.
    pub fn transfers(&self) -> Vec<Transfer> {
        let mut ce = true;
        let mut din = false;
        let mut clk = false;
        let mut rs = false;
        let mut bits: Vec<bool> = Vec::new();
        let mut transfers = Vec::new();
        for event in self.events() {
            match event {
                Event::Set(Line::Din, high) => din = high,
                Event::Set(Line::Rs, high) => rs = high,
                Event::Set(Line::Clk, high) => {
                    if high && !clk && !ce {
                        bits.push(din);
                    }
                    clk = high;
                }
                Event::Set(Line::Ce, high) => {
                    if high && !ce {
                        assert_eq!(bits.len() % 8, 0, "partial byte latched");
                        let bytes = bits
                            .chunks(8)
                            .map(|byte| byte.iter().fold(0u8, |acc, bit| (acc << 1) | *bit as u8))
                            .collect();
                        transfers.push(Transfer {
                            register: if rs { Register::Control } else { Register::Dot },
                            bytes,
                        });
                        bits.clear();
                    }
                    ce = high;
                }
                Event::Delay(_) => {}
            }
        }
        transfers
    }

    pub fn delays(&self) -> Vec<u32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Delay(ns) => Some(ns),
                _ => None,
            })
            .collect()
    }
}

pub struct RecordingPin {
    line: Line,
    log: Log,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Set(self.line, true));
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::Delay(ns));
    }
}

pub type RecordingBus =
    BitBangBus<RecordingPin, RecordingPin, RecordingPin, RecordingPin, RecordingDelay>;

pub type RecordingDisplay =
    Hcms2902<RecordingPin, RecordingPin, RecordingPin, RecordingPin, RecordingDelay>;

pub fn bus(log: &Log, delay_100ns: u32) -> RecordingBus {
    BitBangBus::new_with_delay(
        log.pin(Line::Ce),
        log.pin(Line::Din),
        log.pin(Line::Clk),
        log.pin(Line::Rs),
        log.delay(),
        delay_100ns,
    )
}

pub fn display(log: &Log, brightness: u8) -> RecordingDisplay {
    Hcms2902::new(0, brightness, bus(log, 1))
}

pub fn glyphs(text: &[u8]) -> Vec<u8> {
    text.iter()
        .flat_map(|c| hcms2902::font::glyph(*c).iter().copied())
        .collect()
}
