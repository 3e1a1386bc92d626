use crate::bus::DisplayBus;
use crate::config::TickPolicy;
use crate::mode::ModeController;
use crate::scanner::{DisplayScanner, Events};
use crate::tick::TickSignal;
use crate::time_keeper::TimeCounter;
use embedded_hal::delay::DelayNs;

/// Outcome of one main-loop iteration.
pub struct Iteration {
    /// Ticks applied before the scan pass.
    pub ticks: u8,
    pub events: Events,
}

pub struct ClockApp {
    modes: ModeController,
    scanner: DisplayScanner,
}

impl ClockApp {
    pub const fn new(seed: TimeCounter, policy: TickPolicy) -> Self {
        Self {
            modes: ModeController::new(seed, policy),
            scanner: DisplayScanner::new(),
        }
    }

    pub const fn modes(&self) -> &ModeController {
        &self.modes
    }

    /// Puts the colon in the state the current mode expects.
    pub fn start<B: DisplayBus>(&self, bus: &mut B) {
        bus.set_colon_enabled(self.modes.colon_enabled());
    }

    pub fn apply_ticks(&mut self, ticks: u8) {
        for _ in 0..ticks {
            self.modes.on_tick();
        }
    }

    /// Drains the pending ticks, then runs one scan pass. Ticks that arrive
    /// during the pass show up on the next one.
    pub fn run_iteration<B, D>(&mut self, ticks: &TickSignal, bus: &mut B, delay: &mut D) -> Iteration
    where
        B: DisplayBus,
        D: DelayNs,
    {
        let pending = ticks.take();
        self.apply_ticks(pending);
        let events = self.scanner.scan(&mut self.modes, bus, delay);
        Iteration {
            ticks: pending,
            events,
        }
    }
}
