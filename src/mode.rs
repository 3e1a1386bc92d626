use crate::config::{TickPolicy, TimerResolution};
use crate::time_keeper::{CounterKind, TimeCounter};
use strum::IntoStaticStr;
use ufmt::{uDisplay, uWrite, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum DisplayMode {
    Clock,
    Timer,
    Off,
}

impl DisplayMode {
    /// The mode switch cycles Clock -> Timer -> Off -> Clock.
    pub const fn next(self) -> Self {
        match self {
            Self::Clock => Self::Timer,
            Self::Timer => Self::Off,
            Self::Off => Self::Clock,
        }
    }
}

impl uDisplay for DisplayMode {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str((*self).into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: DisplayMode,
    pub to: DisplayMode,
}

impl Transition {
    /// New state of the colon channel, if this transition changes it.
    pub const fn colon(&self) -> Option<bool> {
        match (self.from, self.to) {
            (DisplayMode::Timer, DisplayMode::Off) => Some(false),
            (DisplayMode::Off, DisplayMode::Clock) => Some(true),
            _ => None,
        }
    }
}

/// Owns both counters and decides which one is on the display.
pub struct ModeController {
    mode: DisplayMode,
    clock: TimeCounter,
    timer: TimeCounter,
    policy: TickPolicy,
}

impl ModeController {
    /// Starts in clock mode with `clock` as the wall time.
    pub const fn new(clock: TimeCounter, policy: TickPolicy) -> Self {
        Self {
            mode: DisplayMode::Clock,
            clock,
            timer: TimeCounter::new(CounterKind::Timer),
            policy,
        }
    }

    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub const fn clock(&self) -> &TimeCounter {
        &self.clock
    }

    pub const fn timer(&self) -> &TimeCounter {
        &self.timer
    }

    /// The counter on the display, or `None` while the display is off.
    pub const fn active(&self) -> Option<&TimeCounter> {
        match self.mode {
            DisplayMode::Clock => Some(&self.clock),
            DisplayMode::Timer => Some(&self.timer),
            DisplayMode::Off => None,
        }
    }

    pub const fn colon_enabled(&self) -> bool {
        !matches!(self.mode, DisplayMode::Off)
    }

    pub fn toggle(&mut self) -> Transition {
        let from = self.mode;
        let to = from.next();
        if to == DisplayMode::Timer {
            self.timer.reset();
        }
        self.mode = to;
        Transition { from, to }
    }

    /// Applies one second of real time.
    ///
    /// With the default policy only the counter on the display moves, so the
    /// clock stands still while the display is off and while the timer runs.
    /// That matches the hardware this was written against; build with
    /// `clock-always-runs` to keep wall time instead.
    pub fn on_tick(&mut self) {
        if self.policy.clock_always_runs || self.mode == DisplayMode::Clock {
            self.clock.increment_second();
        }
        if self.mode == DisplayMode::Timer {
            match self.policy.timer_resolution {
                TimerResolution::HoursMinutes => self.timer.increment_second(),
                TimerResolution::MinutesSeconds => self.timer.increment_minute(true),
            }
        }
    }

    /// Hour button: zero the seconds and advance the clock hour.
    pub fn adjust_hour(&mut self) {
        self.clock.clear_seconds();
        self.clock.increment_hour();
    }

    /// Minute button: zero the seconds and advance the clock minute without
    /// carrying into the hour.
    pub fn adjust_minute(&mut self) {
        self.clock.clear_seconds();
        self.clock.increment_minute(false);
    }
}
