//! Compile-time configuration of the display, switches and tick source.

use crate::time_keeper::{CounterKind, TimeCounter};

/// How long a digit stays lit during one scan window.
pub const ON_INTERVAL_US: u32 = 600;
/// Guard time with every digit dark before the next select line asserts.
pub const OFF_INTERVAL_US: u32 = 300;
/// Poll cadence for the mode switch while the display is off.
pub const OFF_POLL_MS: u32 = 10;
/// Wait for supplies and the 32 kHz crystal to settle after reset.
pub const STARTUP_SETTLE_MS: u32 = 250;

/// Timer1 compare value for the colon PWM. Found by trial as the dimmest
/// setting that does not flicker.
pub const COLON_DUTY: u8 = 30;

/// Any code above 9 blanks the BCD decoder outputs.
pub const BLANK_DIGIT: u8 = 10;

/// Raw switch level that means "pressed". The switches pull the shared input
/// high against an external pull-down.
pub const SWITCH_PRESSED_LEVEL: bool = true;

/// Time the clock shows after every power-up.
pub const SEED_TIME: TimeCounter = match TimeCounter::from_hms(CounterKind::Clock, 13, 37, 0) {
    Some(counter) => counter,
    None => panic!("seed time out of range"),
};

/// Frequency of the watch crystal clocking Timer2.
pub const CRYSTAL_HZ: u32 = 32_768;
/// Timer2 prescaler applied to the crystal.
pub const TICK_PRESCALER: u32 = 128;
/// Timer2 is an 8-bit counter and overflows every 256 steps.
pub const TICK_TIMER_STEPS: u32 = 256;

const _: () = assert!(
    CRYSTAL_HZ / TICK_PRESCALER / TICK_TIMER_STEPS == 1
        && CRYSTAL_HZ % (TICK_PRESCALER * TICK_TIMER_STEPS) == 0,
    "Timer2 overflow must fire exactly once per second"
);

/// How the stopwatch advances while it is on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerResolution {
    /// One second per tick; the four digits read HH:MM.
    HoursMinutes,
    /// One minute digit per tick; the four digits read MM:SS.
    MinutesSeconds,
}

/// Which counters a tick advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickPolicy {
    /// Advance `clock` on every tick, even while the timer is shown or the
    /// display is off.
    pub clock_always_runs: bool,
    pub timer_resolution: TimerResolution,
}

impl TickPolicy {
    /// Only the counter on the display moves.
    pub const SELECTED_ONLY: Self = Self {
        clock_always_runs: false,
        timer_resolution: TimerResolution::HoursMinutes,
    };
}

impl Default for TickPolicy {
    fn default() -> Self {
        Self::SELECTED_ONLY
    }
}

/// Policy selected by the `clock-always-runs` and `timer-minutes-seconds`
/// features.
pub const TICK_POLICY: TickPolicy = TickPolicy {
    clock_always_runs: cfg!(feature = "clock-always-runs"),
    timer_resolution: if cfg!(feature = "timer-minutes-seconds") {
        TimerResolution::MinutesSeconds
    } else {
        TimerResolution::HoursMinutes
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_time_reads_13_37_00() {
        assert_eq!(SEED_TIME.hours(), 13);
        assert_eq!(SEED_TIME.minutes(), 37);
        assert_eq!(SEED_TIME.seconds(), 0);
        assert_eq!(SEED_TIME.kind(), CounterKind::Clock);
    }
}
