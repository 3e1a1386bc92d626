//! Shift-register debouncing for the push-buttons.
//!
//! Every sample shifts one bit into a 16-bit history, where a set bit means the
//! switch read released. The top three bits are forced high, so the history
//! can only equal [`EDGE`] when the last twelve samples read pressed and the
//! one before them read released. That happens once per press, no matter how
//! long the switch is held.

use strum::{EnumCount, EnumIter};

const HELD_MASK: u16 = 0xE000;
const EDGE: u16 = 0xF000;

/// Consecutive pressed samples needed before a press registers.
pub const PRESS_RUN_LENGTH: usize = EDGE.trailing_zeros() as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum SwitchId {
    /// Advances the clock hour.
    Hour,
    /// Advances the clock minute without carrying into the hour.
    Minute,
    /// Cycles the display mode.
    Mode,
}

impl SwitchId {
    pub const fn as_index(self) -> usize {
        match self {
            Self::Hour => 0,
            Self::Minute => 1,
            Self::Mode => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Debouncer {
    history: u16,
}

impl Debouncer {
    pub const fn new() -> Self {
        Self { history: 0 }
    }

    /// Feeds one sample and returns `true` on the sample that completes a press.
    pub fn sample(&mut self, pressed: bool) -> bool {
        self.history = (self.history << 1) | u16::from(!pressed) | HELD_MASK;
        self.history == EDGE
    }
}

/// One debouncer per switch.
pub struct SwitchBank {
    debouncers: [Debouncer; SwitchId::COUNT],
}

impl SwitchBank {
    pub const fn new() -> Self {
        Self {
            debouncers: [Debouncer::new(); SwitchId::COUNT],
        }
    }

    pub fn sample(&mut self, switch: SwitchId, pressed: bool) -> bool {
        self.debouncers
            .get_mut(switch.as_index())
            .is_some_and(|debouncer| debouncer.sample(pressed))
    }
}

impl Default for SwitchBank {
    fn default() -> Self {
        Self::new()
    }
}
