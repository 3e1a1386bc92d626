//! Digit multiplexing and switch sampling.
//!
//! Each digit is lit for [`ON_INTERVAL_US`] and then everything goes dark for
//! [`OFF_INTERVAL_US`] before the next select line rises. Three of the four
//! on-windows double as the sampling slot for the switch wired through that
//! digit's select line.

use crate::bus::DisplayBus;
use crate::config::{
    BLANK_DIGIT, OFF_INTERVAL_US, OFF_POLL_MS, ON_INTERVAL_US, SWITCH_PRESSED_LEVEL,
};
use crate::debounce::{SwitchBank, SwitchId};
use crate::mode::{DisplayMode, ModeController, Transition};
use crate::time_keeper::DigitPosition;
use embedded_hal::delay::DelayNs;
use heapless::Vec;
use strum::{EnumCount, IntoEnumIterator};
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

/// Digit whose select line the mode switch hangs off; the only one lit while
/// the display is off.
const MODE_DIGIT: DigitPosition = DigitPosition::TenMinute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    HourAdjusted,
    MinuteAdjusted,
    ModeChanged(Transition),
}

impl uDisplay for Event {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Self::HourAdjusted => f.write_str("hour set"),
            Self::MinuteAdjusted => f.write_str("minute set"),
            Self::ModeChanged(transition) => {
                uwrite!(f, "mode {} -> {}", transition.from, transition.to)
            }
        }
    }
}

/// At most one press per switch fits in a pass.
pub type Events = Vec<Event, { SwitchId::COUNT }>;

/// Switch sampled during the on-window of `position`.
pub const fn switch_window(position: DigitPosition) -> Option<SwitchId> {
    match position {
        DigitPosition::TenHour => Some(SwitchId::Hour),
        DigitPosition::OneHour => Some(SwitchId::Minute),
        DigitPosition::TenMinute => Some(SwitchId::Mode),
        DigitPosition::OneMinute => None,
    }
}

pub struct DisplayScanner {
    switches: SwitchBank,
}

impl DisplayScanner {
    pub const fn new() -> Self {
        Self {
            switches: SwitchBank::new(),
        }
    }

    /// Runs one full pass for the current mode and reports what the switches
    /// did during it.
    pub fn scan<B, D>(&mut self, modes: &mut ModeController, bus: &mut B, delay: &mut D) -> Events
    where
        B: DisplayBus,
        D: DelayNs,
    {
        let mut events = Events::new();
        if modes.mode() == DisplayMode::Off {
            self.idle_pass(modes, bus, delay, &mut events);
        } else {
            self.digit_pass(modes, bus, delay, &mut events);
        }
        events
    }

    /// Display off: one blank digit so the mode switch can still be read.
    fn idle_pass<B, D>(
        &mut self,
        modes: &mut ModeController,
        bus: &mut B,
        delay: &mut D,
        events: &mut Events,
    ) where
        B: DisplayBus,
        D: DelayNs,
    {
        bus.write_bcd(BLANK_DIGIT);
        bus.select_digit(MODE_DIGIT);
        self.poll(SwitchId::Mode, modes, bus, events);
        bus.deselect_digit(MODE_DIGIT);
        delay.delay_ms(OFF_POLL_MS);
    }

    fn digit_pass<B, D>(
        &mut self,
        modes: &mut ModeController,
        bus: &mut B,
        delay: &mut D,
        events: &mut Events,
    ) where
        B: DisplayBus,
        D: DelayNs,
    {
        for position in DigitPosition::iter() {
            // A mode press can switch the display off halfway through a pass.
            let value = modes
                .active()
                .map_or(BLANK_DIGIT, |counter| counter.digit(position));
            bus.write_bcd(value);
            bus.select_digit(position);
            delay.delay_us(ON_INTERVAL_US);
            if let Some(switch) = switch_window(position) {
                self.poll(switch, modes, bus, events);
            }
            bus.deselect_digit(position);
            delay.delay_us(OFF_INTERVAL_US);
        }
    }

    fn poll<B>(
        &mut self,
        switch: SwitchId,
        modes: &mut ModeController,
        bus: &mut B,
        events: &mut Events,
    ) where
        B: DisplayBus,
    {
        let pressed = bus.read_switch_raw(switch) == SWITCH_PRESSED_LEVEL;
        if !self.switches.sample(switch, pressed) {
            return;
        }
        let event = match switch {
            SwitchId::Hour => {
                modes.adjust_hour();
                Event::HourAdjusted
            }
            SwitchId::Minute => {
                modes.adjust_minute();
                Event::MinuteAdjusted
            }
            SwitchId::Mode => {
                let transition = modes.toggle();
                if let Some(enabled) = transition.colon() {
                    bus.set_colon_enabled(enabled);
                }
                Event::ModeChanged(transition)
            }
        };
        let _ = events.push(event);
    }
}

impl Default for DisplayScanner {
    fn default() -> Self {
        Self::new()
    }
}
