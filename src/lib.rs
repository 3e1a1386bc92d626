//! Time keeping, mode control and display scanning for a four digit BCD
//! clock with a stopwatch mode.
//!
//! Nothing here touches registers. The firmware binary wires these pieces to
//! the Atmega328p pins and timers; on the host they run under `cargo test`.
#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod bus;
pub mod config;
pub mod debounce;
pub mod mode;
pub mod scanner;
pub mod tick;
pub mod time_keeper;

pub use app::{ClockApp, Iteration};
pub use bus::{ColonOutput, DisplayBus, PinBus};
pub use debounce::{Debouncer, SwitchBank, SwitchId};
pub use mode::{DisplayMode, ModeController, Transition};
pub use scanner::{DisplayScanner, Event, Events};
pub use tick::TickSignal;
pub use time_keeper::{CounterKind, DigitPosition, TimeCounter};
