use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use hcms2902::{BitBangBus, Hcms2902};
use std::convert::Infallible;
use std::time::{Duration, Instant};

pub struct DummyOutputPin;

impl ErrorType for DummyOutputPin {
    type Error = Infallible;
}

impl OutputPin for DummyOutputPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// busy waits like a microcontroller would
pub struct SpinDelay;

impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        let start = Instant::now();
        while start.elapsed() < Duration::from_nanos(ns.into()) {}
    }
}

fn main() {
    let bus = BitBangBus::new_with_delay(
        DummyOutputPin,
        DummyOutputPin,
        DummyOutputPin,
        DummyOutputPin,
        SpinDelay,
        1,
    );
    let mut display = Hcms2902::new(0, 20, bus);

    display.init().expect("Infallible cannot fail");
    display.update_text(b"HI:)").expect("Infallible cannot fail");
    display.update_brightness(8).expect("Infallible cannot fail");
    display.update_str("12.5 C").expect("Infallible cannot fail");

    println!(
        "display {} at brightness {}",
        display.id(),
        display.brightness().level()
    );
}
