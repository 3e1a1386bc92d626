use atmega_hal::pac::TC1;
use atmega_hal::port::mode::Output;
use atmega_hal::port::{Pin, PB2};
use bcd_clock::config::COLON_DUTY;
use bcd_clock::ColonOutput;

/// Colon segment dimmed by Timer1 fast 8-bit PWM on OC1B.
///
/// <https://ww1.microchip.com/downloads/en/DeviceDoc/Atmel-7810-Automotive-Microcontrollers-ATmega328P_Datasheet.pdf>
/// section 15.11
pub struct Colon {
    tc1: TC1,
    pin: Pin<Output, PB2>,
}

impl Colon {
    pub fn new(tc1: TC1, pin: Pin<Output, PB2>) -> Self {
        let mut colon = Self { tc1, pin };
        colon.disable();
        colon
    }
}

impl ColonOutput for Colon {
    fn enable(&mut self) {
        self.tc1.ocr1b().write(|w| w.bits(u16::from(COLON_DUTY)));
        // Set at bottom, clear on compare match.
        self.tc1
            .tccr1a()
            .write(|w| w.com1b().bits(0b10).wgm1().bits(0b01));
        self.tc1
            .tccr1b()
            .write(|w| w.wgm1().bits(0b01).cs1().prescale_256());
    }

    fn disable(&mut self) {
        self.tc1.tccr1b().write(|w| w.wgm1().bits(0b01).cs1().no_clock());
        // Hand PB2 back to the port so it can be held low.
        self.tc1
            .tccr1a()
            .write(|w| w.com1b().bits(0b00).wgm1().bits(0b01));
        self.pin.set_low();
    }
}
