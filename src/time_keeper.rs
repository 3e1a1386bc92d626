//! Seconds plus four BCD digits, with the carry rules the display expects.

use strum::{EnumCount, EnumIter};
use ufmt::{uDisplay, uWrite, Formatter};

/// The two counters only differ in whether the hours wrap at 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Clock,
    Timer,
}

/// Digit positions on the display, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum DigitPosition {
    TenHour,
    OneHour,
    TenMinute,
    OneMinute,
}

impl DigitPosition {
    pub const fn as_index(self) -> usize {
        match self {
            Self::TenHour => 0,
            Self::OneHour => 1,
            Self::TenMinute => 2,
            Self::OneMinute => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeCounter {
    kind: CounterKind,
    seconds: u8,
    one_minute: u8,
    ten_minute: u8,
    one_hour: u8,
    ten_hour: u8,
}

impl TimeCounter {
    /// A counter at 00:00:00.
    pub const fn new(kind: CounterKind) -> Self {
        Self {
            kind,
            seconds: 0,
            one_minute: 0,
            ten_minute: 0,
            one_hour: 0,
            ten_hour: 0,
        }
    }

    /// Builds a counter from binary hours, minutes and seconds. Returns `None`
    /// if any of them is out of range for `kind`.
    pub const fn from_hms(kind: CounterKind, hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        let max_hours = match kind {
            CounterKind::Clock => 24,
            CounterKind::Timer => 100,
        };
        if hours >= max_hours || minutes >= 60 || seconds >= 60 {
            return None;
        }
        Some(Self {
            kind,
            seconds,
            one_minute: minutes % 10,
            ten_minute: minutes / 10,
            one_hour: hours % 10,
            ten_hour: hours / 10,
        })
    }

    pub const fn kind(&self) -> CounterKind {
        self.kind
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    pub const fn minutes(&self) -> u8 {
        self.ten_minute * 10 + self.one_minute
    }

    pub const fn hours(&self) -> u8 {
        self.ten_hour * 10 + self.one_hour
    }

    /// BCD value shown at `position`.
    pub const fn digit(&self, position: DigitPosition) -> u8 {
        match position {
            DigitPosition::TenHour => self.ten_hour,
            DigitPosition::OneHour => self.one_hour,
            DigitPosition::TenMinute => self.ten_minute,
            DigitPosition::OneMinute => self.one_minute,
        }
    }

    /// All four digits in scan order.
    pub const fn digits(&self) -> [u8; DigitPosition::COUNT] {
        [
            self.ten_hour,
            self.one_hour,
            self.ten_minute,
            self.one_minute,
        ]
    }

    /// Back to 00:00:00, keeping the kind.
    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }

    pub fn clear_seconds(&mut self) {
        self.seconds = 0;
    }

    pub fn increment_second(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.increment_minute(true);
        }
    }

    /// Advances the minute digits. With `ripple` off, 59 rolls to 00 without
    /// touching the hours, which is what the minute-set button wants.
    pub fn increment_minute(&mut self, ripple: bool) {
        self.one_minute += 1;
        if self.one_minute < 10 {
            return;
        }
        self.one_minute = 0;
        self.ten_minute += 1;
        if self.ten_minute < 6 {
            return;
        }
        self.ten_minute = 0;
        if ripple {
            self.increment_hour();
        }
    }

    pub fn increment_hour(&mut self) {
        self.one_hour += 1;
        if self.one_hour == 10 {
            self.one_hour = 0;
            self.ten_hour = (self.ten_hour + 1) % 10;
        } else if self.kind == CounterKind::Clock && self.ten_hour == 2 && self.one_hour == 4 {
            self.one_hour = 0;
            self.ten_hour = 0;
        }
    }
}

/// Writes the counter as `HH:MM:SS`.
impl uDisplay for TimeCounter {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let [ten_hour, one_hour, ten_minute, one_minute] = self.digits();
        for digit in [ten_hour, one_hour] {
            f.write_char(digit_char(digit))?;
        }
        f.write_char(':')?;
        for digit in [ten_minute, one_minute] {
            f.write_char(digit_char(digit))?;
        }
        f.write_char(':')?;
        f.write_char(digit_char(self.seconds / 10))?;
        f.write_char(digit_char(self.seconds % 10))
    }
}

const fn digit_char(digit: u8) -> char {
    (b'0' + digit % 10) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;
    use ufmt::uwrite;

    fn clock(hours: u8, minutes: u8, seconds: u8) -> TimeCounter {
        TimeCounter::from_hms(CounterKind::Clock, hours, minutes, seconds).unwrap()
    }

    fn timer(hours: u8, minutes: u8, seconds: u8) -> TimeCounter {
        TimeCounter::from_hms(CounterKind::Timer, hours, minutes, seconds).unwrap()
    }

    #[test]
    fn seconds_carry_exactly_one_minute() {
        for start in 0..60 {
            let mut counter = clock(10, 20, start);
            for _ in 0..(60 - start) {
                counter.increment_second();
            }
            assert_eq!(counter.seconds(), 0);
            assert_eq!(counter.minutes(), 21);
            assert_eq!(counter.hours(), 10);
        }
    }

    #[test]
    fn sixty_rippling_minutes_make_one_hour() {
        let mut counter = clock(5, 0, 0);
        for _ in 0..60 {
            counter.increment_minute(true);
        }
        assert_eq!(counter.minutes(), 0);
        assert_eq!(counter.hours(), 6);
    }

    #[test]
    fn one_hour_digit_carries_into_ten_hour() {
        let mut counter = clock(9, 0, 0);
        counter.increment_hour();
        assert_eq!(counter.digits(), [1, 0, 0, 0]);
        let mut counter = clock(19, 0, 0);
        counter.increment_hour();
        assert_eq!(counter.digits(), [2, 0, 0, 0]);
    }

    #[test]
    fn clock_wraps_at_24_but_timer_does_not() {
        let mut wall = clock(23, 0, 0);
        wall.increment_hour();
        assert_eq!(wall.digit(DigitPosition::TenHour), 0);
        assert_eq!(wall.digit(DigitPosition::OneHour), 0);

        let mut stopwatch = timer(23, 0, 0);
        stopwatch.increment_hour();
        assert_eq!(stopwatch.digit(DigitPosition::TenHour), 2);
        assert_eq!(stopwatch.digit(DigitPosition::OneHour), 4);
    }

    #[test]
    fn clock_rolls_from_23_59_59_to_midnight() {
        let mut counter = clock(23, 59, 59);
        counter.increment_second();
        assert_eq!(counter, clock(0, 0, 0));
    }

    #[test]
    fn timer_ten_hour_wraps_modulo_ten() {
        let mut counter = timer(99, 0, 0);
        counter.increment_hour();
        assert_eq!(counter.hours(), 0);
    }

    #[test]
    fn minute_without_ripple_leaves_hours_alone() {
        let mut counter = clock(7, 59, 0);
        counter.increment_minute(false);
        assert_eq!(counter.minutes(), 0);
        assert_eq!(counter.hours(), 7);
    }

    #[test]
    fn digits_stay_in_bcd_range_for_a_full_day() {
        let mut counter = clock(0, 0, 0);
        for _ in 0..(24 * 60 * 60) {
            counter.increment_second();
            let [ten_hour, one_hour, ten_minute, one_minute] = counter.digits();
            assert!(ten_hour <= 2);
            assert!(one_hour <= 9);
            assert!(ten_minute <= 5);
            assert!(one_minute <= 9);
            assert!(counter.hours() < 24);
            assert!(counter.seconds() < 60);
        }
        assert_eq!(counter, clock(0, 0, 0));
    }

    #[test]
    fn end_to_end_from_13_37_59() {
        let mut counter = clock(13, 37, 59);
        counter.increment_second();
        assert_eq!(counter, clock(13, 38, 0));
        for _ in 0..(22 * 60) {
            counter.increment_second();
        }
        assert_eq!(counter, clock(14, 0, 0));
    }

    #[test]
    fn from_hms_rejects_out_of_range() {
        assert!(TimeCounter::from_hms(CounterKind::Clock, 24, 0, 0).is_none());
        assert!(TimeCounter::from_hms(CounterKind::Clock, 0, 60, 0).is_none());
        assert!(TimeCounter::from_hms(CounterKind::Clock, 0, 0, 60).is_none());
        assert!(TimeCounter::from_hms(CounterKind::Timer, 42, 0, 0).is_some());
        assert!(TimeCounter::from_hms(CounterKind::Timer, 100, 0, 0).is_none());
    }

    #[test]
    fn reset_keeps_kind() {
        let mut counter = timer(12, 34, 56);
        counter.reset();
        assert_eq!(counter, TimeCounter::new(CounterKind::Timer));
    }

    #[test]
    fn formats_as_hh_mm_ss() {
        let mut text: String<16> = String::new();
        uwrite!(text, "{}", clock(9, 5, 7)).unwrap();
        assert_eq!(text.as_str(), "09:05:07");
    }
}
