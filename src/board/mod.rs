//! Atmega328p wiring.
//!
//! | Signal              | Pin      |
//! |---------------------|----------|
//! | digit selects       | PB1 PB3 PB4 PB5 (ten hour .. one minute) |
//! | BCD bus             | PC0..PC3 |
//! | colon PWM (OC1B)    | PB2      |
//! | shared switch input | PD7, external pull-down |
//! | 32 kHz clock        | TOSC1    |
//! | debug UART          | PD0 PD1 (only with `log`) |

use atmega_hal::pac;
use bcd_clock::config::{SEED_TIME, STARTUP_SETTLE_MS, TICK_POLICY};
use bcd_clock::{ClockApp, PinBus, TickSignal};
use embedded_hal::delay::DelayNs as _;
use panic_halt as _;
#[cfg(feature = "log_info")]
use atmega_hal::prelude::*;
#[cfg(feature = "log")]
use atmega_hal::usart::{Baudrate, Usart0};
#[cfg(feature = "log_info")]
use ufmt::uwriteln;

mod colon;
mod tick_timer;

type CoreClock = atmega_hal::clock::MHz8;
type Delay = atmega_hal::delay::Delay<CoreClock>;

/// Raised by the Timer2 overflow interrupt, drained by the main loop.
static TICKS: TickSignal = TickSignal::new();

#[cfg(feature = "log")]
const LOG_BAUDRATE: u32 = 57_600;

fn power_down_unused(cpu: &pac::CPU) {
    // Timer1 drives the colon and Timer2 counts seconds; everything else
    // stays off unless the debug UART is wanted.
    cpu.prr().write(|w| {
        w.prtwi()
            .set_bit()
            .prtim0()
            .set_bit()
            .prspi()
            .set_bit()
            .pradc()
            .set_bit()
            .prusart0()
            .bit(!cfg!(feature = "log"))
    });
}

#[avr_device::entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let pins = atmega_hal::pins!(dp);
    power_down_unused(&dp.CPU);

    #[cfg(feature = "log")]
    #[cfg_attr(not(feature = "log_info"), allow(unused_variables, unused_mut))]
    let mut serial = Usart0::<CoreClock>::new(
        dp.USART0,
        pins.pd0,
        pins.pd1.into_output(),
        Baudrate::<CoreClock>::new(LOG_BAUDRATE),
    );

    let digits = [
        pins.pb1.into_output().downgrade(),
        pins.pb3.into_output().downgrade(),
        pins.pb4.into_output().downgrade(),
        pins.pb5.into_output().downgrade(),
    ];
    let bcd = [
        pins.pc0.into_output().downgrade(),
        pins.pc1.into_output().downgrade(),
        pins.pc2.into_output().downgrade(),
        pins.pc3.into_output().downgrade(),
    ];
    let switch = pins.pd7.into_floating_input();
    let colon = colon::Colon::new(dp.TC1, pins.pb2.into_output());
    let mut bus = PinBus::new(digits, bcd, switch, colon);

    let mut delay = Delay::new();
    delay.delay_ms(STARTUP_SETTLE_MS);

    tick_timer::init(&dp.TC2);

    let mut app = ClockApp::new(SEED_TIME, TICK_POLICY);
    app.start(&mut bus);

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    #[cfg(feature = "log_info")]
    uwriteln!(&mut serial, "Starting at {}\r", app.modes().clock()).unwrap_infallible();

    loop {
        #[cfg_attr(not(feature = "log_info"), allow(unused_variables))]
        let iteration = app.run_iteration(&TICKS, &mut bus, &mut delay);

        #[cfg(feature = "log_debug")]
        if iteration.ticks > 0 {
            uwriteln!(
                &mut serial,
                "{} tick(s), {} {}\r",
                iteration.ticks,
                app.modes().mode(),
                app.modes().clock()
            )
            .unwrap_infallible();
        }

        #[cfg(feature = "log_info")]
        for event in &iteration.events {
            uwriteln!(&mut serial, "{}, clock {}\r", event, app.modes().clock())
                .unwrap_infallible();
        }
    }
}
