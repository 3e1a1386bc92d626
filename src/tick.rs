//! Hand-off between the 1 Hz timer interrupt and the main loop.
//!
//! The interrupt only counts ticks. The main loop drains the count once per
//! iteration and applies the ticks between two scan passes, so a carry from
//! seconds up to hours is never visible half done.

use core::cell::Cell;
use critical_section::Mutex;

pub struct TickSignal {
    pending: Mutex<Cell<u8>>,
}

impl TickSignal {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(0)),
        }
    }

    /// Called from the interrupt handler.
    pub fn signal(&self) {
        critical_section::with(|cs| {
            let pending = self.pending.borrow(cs);
            pending.set(pending.get().saturating_add(1));
        });
    }

    /// Returns the ticks raised since the last call and clears the count.
    pub fn take(&self) -> u8 {
        critical_section::with(|cs| self.pending.borrow(cs).replace(0))
    }
}

impl Default for TickSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_drains_pending_ticks() {
        let ticks = TickSignal::new();
        assert_eq!(ticks.take(), 0);
        ticks.signal();
        ticks.signal();
        assert_eq!(ticks.take(), 2);
        assert_eq!(ticks.take(), 0);
    }

    #[test]
    fn count_saturates_instead_of_wrapping() {
        let ticks = TickSignal::new();
        for _ in 0..300 {
            ticks.signal();
        }
        assert_eq!(ticks.take(), u8::MAX);
    }

    #[test]
    fn works_from_a_static() {
        static TICKS: TickSignal = TickSignal::new();
        TICKS.signal();
        assert_eq!(TICKS.take(), 1);
    }
}
