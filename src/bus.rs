//! Output bus of the display and the switch input.
//!
//! All four digits share one BCD decoder. A digit lights while its select line
//! is high. The three switches share a single input pin; each switch is wired
//! through the select line of one digit, so it can only be read while that
//! digit is selected.

use crate::debounce::SwitchId;
use crate::time_keeper::DigitPosition;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use strum::EnumCount;

pub trait DisplayBus {
    fn select_digit(&mut self, position: DigitPosition);
    /// Drives the low four bits of `value` onto the BCD bus.
    fn write_bcd(&mut self, value: u8);
    fn deselect_digit(&mut self, position: DigitPosition);
    /// Raw level of the switch input, `true` for high.
    fn read_switch_raw(&mut self, switch: SwitchId) -> bool;
    fn set_colon_enabled(&mut self, enabled: bool);
}

/// Dimmable colon between hours and minutes.
pub trait ColonOutput {
    fn enable(&mut self);
    fn disable(&mut self);
}

/// [`DisplayBus`] over plain GPIO pins.
pub struct PinBus<SEL, BCD, SW, COLON> {
    digits: [SEL; DigitPosition::COUNT],
    bcd: [BCD; 4],
    switch: SW,
    colon: COLON,
}

impl<SEL, BCD, SW, COLON> PinBus<SEL, BCD, SW, COLON>
where
    SEL: OutputPin,
    BCD: OutputPin,
    SW: InputPin,
    COLON: ColonOutput,
{
    /// `digits` in scan order, `bcd` with bit 0 first.
    pub const fn new(
        digits: [SEL; DigitPosition::COUNT],
        bcd: [BCD; 4],
        switch: SW,
        colon: COLON,
    ) -> Self {
        Self {
            digits,
            bcd,
            switch,
            colon,
        }
    }

    #[allow(clippy::type_complexity, reason = "Hands every pin back as passed in")]
    pub fn release(self) -> ([SEL; DigitPosition::COUNT], [BCD; 4], SW, COLON) {
        (self.digits, self.bcd, self.switch, self.colon)
    }
}

impl<SEL, BCD, SW, COLON> DisplayBus for PinBus<SEL, BCD, SW, COLON>
where
    SEL: OutputPin,
    BCD: OutputPin,
    SW: InputPin,
    COLON: ColonOutput,
{
    fn select_digit(&mut self, position: DigitPosition) {
        if let Some(pin) = self.digits.get_mut(position.as_index()) {
            let _ = pin.set_high();
        }
    }

    fn write_bcd(&mut self, value: u8) {
        for (bit, pin) in self.bcd.iter_mut().enumerate() {
            let _ = pin.set_state(PinState::from((value >> bit) & 1 == 1));
        }
    }

    fn deselect_digit(&mut self, position: DigitPosition) {
        if let Some(pin) = self.digits.get_mut(position.as_index()) {
            let _ = pin.set_low();
        }
    }

    fn read_switch_raw(&mut self, _switch: SwitchId) -> bool {
        self.switch.is_high().unwrap_or(false)
    }

    fn set_colon_enabled(&mut self, enabled: bool) {
        if enabled {
            self.colon.enable();
        } else {
            self.colon.disable();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};

    #[derive(Default)]
    struct FakeColon {
        enabled: Option<bool>,
    }

    impl ColonOutput for FakeColon {
        fn enable(&mut self) {
            self.enabled = Some(true);
        }

        fn disable(&mut self) {
            self.enabled = Some(false);
        }
    }

    fn idle_pins() -> [PinMock; 4] {
        core::array::from_fn(|_| PinMock::new(&[]))
    }

    fn finish(bus: PinBus<PinMock, PinMock, PinMock, FakeColon>) -> FakeColon {
        let (digits, bcd, mut switch, colon) = bus.release();
        for mut pin in digits.into_iter().chain(bcd) {
            pin.done();
        }
        switch.done();
        colon
    }

    #[test]
    fn writes_bcd_bit_zero_first() {
        let bcd = [
            PinMock::new(&[Transaction::set(State::High)]),
            PinMock::new(&[Transaction::set(State::Low)]),
            PinMock::new(&[Transaction::set(State::High)]),
            PinMock::new(&[Transaction::set(State::Low)]),
        ];
        let mut bus = PinBus::new(idle_pins(), bcd, PinMock::new(&[]), FakeColon::default());
        bus.write_bcd(5);
        finish(bus);
    }

    #[test]
    fn selects_and_deselects_one_digit() {
        let digits = [
            PinMock::new(&[]),
            PinMock::new(&[]),
            PinMock::new(&[
                Transaction::set(State::High),
                Transaction::set(State::Low),
            ]),
            PinMock::new(&[]),
        ];
        let mut bus = PinBus::new(digits, idle_pins(), PinMock::new(&[]), FakeColon::default());
        bus.select_digit(DigitPosition::TenMinute);
        bus.deselect_digit(DigitPosition::TenMinute);
        finish(bus);
    }

    #[test]
    fn reads_the_shared_switch_input() {
        let switch = PinMock::new(&[
            Transaction::get(State::High),
            Transaction::get(State::Low),
        ]);
        let mut bus = PinBus::new(idle_pins(), idle_pins(), switch, FakeColon::default());
        assert!(bus.read_switch_raw(SwitchId::Hour));
        assert!(!bus.read_switch_raw(SwitchId::Mode));
        finish(bus);
    }

    #[test]
    fn forwards_colon_changes() {
        let mut bus = PinBus::new(idle_pins(), idle_pins(), PinMock::new(&[]), FakeColon::default());
        bus.set_colon_enabled(false);
        assert_eq!(finish(bus).enabled, Some(false));

        let mut bus = PinBus::new(idle_pins(), idle_pins(), PinMock::new(&[]), FakeColon::default());
        bus.set_colon_enabled(true);
        assert_eq!(finish(bus).enabled, Some(true));
    }
}
