#![cfg_attr(target_arch = "avr", no_std, no_main, feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod board;

/// The firmware only runs on the Atmega328p; host builds just check the library.
#[cfg(not(target_arch = "avr"))]
fn main() {}
