//! Timer2 as the 1 Hz tick source.
//!
//! Timer2 runs asynchronously from a 32.768 kHz clock on TOSC1. With a
//! prescaler of 128 its 8-bit counter overflows once per second, and the
//! overflow interrupt raises [`super::TICKS`].

use atmega_hal::pac;
use bcd_clock::config::TICK_PRESCALER;

pub fn init(tc2: &pac::TC2) {
    // No overflow interrupts while the clock source changes.
    tc2.timsk2().write(|w| w.toie2().clear_bit());

    // External clock signal, not a crystal; EXCLK has to be set before AS2.
    tc2.assr().write(|w| w.exclk().set_bit());
    tc2.assr().modify(|_, w| w.as2().set_bit());

    tc2.tcnt2().write(|w| w.bits(0));
    tc2.tccr2b().write(|w| match TICK_PRESCALER {
        32 => w.cs2().prescale_32(),
        64 => w.cs2().prescale_64(),
        128 => w.cs2().prescale_128(),
        256 => w.cs2().prescale_256(),
        1024 => w.cs2().prescale_1024(),
        #[expect(
            clippy::panic,
            reason = "Without a valid prescaler the clock cannot keep time"
        )]
        _ => panic!(),
    });

    // Asynchronous writes land a few 32 kHz cycles later.
    while {
        let assr = tc2.assr().read();
        assr.tcr2bub().bit_is_set() || assr.tcn2ub().bit_is_set()
    } {}

    tc2.timsk2().write(|w| w.toie2().set_bit());
}

#[avr_device::interrupt(atmega328p)]
#[expect(
    clippy::single_call_fn,
    reason = "Interrupts are only triggered by internal interrupts"
)]
fn TIMER2_OVF() {
    super::TICKS.signal();
}
