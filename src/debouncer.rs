//! Firmware debouncing of inputs using a 16 sample history register.
//! The value `1` is considered "on", regardless of how the pin is wired.

/// Only the 4 oldest and the 6 newest samples take part in edge detection,
/// the middle 6 samples are allowed to bounce.
const MASK: u16 = 0b1111_0000_0011_1111;
/// Stable "off" followed by 6 samples of stable "on".
const PRESS: u16 = 0b0000_0000_0011_1111;
/// Stable "on" followed by 6 samples of stable "off".
const RELEASE: u16 = 0b1111_0000_0000_0000;
const ON: u16 = 0b1111_1111_1111_1111;
const OFF: u16 = 0;

/// A debounced input that remembers the last 16 samples.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebouncedInput {
    memory: u16,
    previous_down: bool,
    previous_state: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Returned by the [DebouncedInput::debounce] function, describing what the
/// most recent sample did to the input.
pub struct DebounceResult {
    /// A press edge was detected (and consumed) on this sample
    pub pressed: bool,
    /// A release edge was detected (and consumed) on this sample
    pub released: bool,
    /// The last 16 samples were all "on"
    pub is_down: bool,
    /// The last 16 samples were all "off"
    pub is_up: bool,
    /// `is_down` differs from its value on the previous sample
    pub is_changed: bool,
    /// Is the value currently "on"? Only changes once the history is entirely
    /// "on" or entirely "off", otherwise the previous value is kept.
    pub is_on: bool,
}

impl DebounceResult {
    /// Nothing happened, the input is at rest.
    pub const NONE: Self = Self {
        pressed: false,
        released: false,
        is_down: false,
        is_up: true,
        is_changed: false,
        is_on: false,
    };
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl DebouncedInput {
    /// Creates an input at rest, i.e. with a history of 16 "off" samples.
    pub const fn new() -> Self {
        Self {
            memory: OFF,
            previous_down: false,
            previous_state: false,
        }
    }

    /// The raw history register, newest sample in bit 0.
    pub fn history(&self) -> u16 {
        self.memory
    }

    /// Shifts the newest sample into the history, dropping the oldest one.
    pub fn shift_in(&mut self, is_on: bool) {
        self.memory = (self.memory << 1) | u16::from(is_on);
    }

    /// Returns `true` if the history shows a press. The history is then forced
    /// to all "on" so the same press cannot be reported twice.
    pub fn check_pressed(&mut self) -> bool {
        if self.memory & MASK == PRESS {
            self.memory = ON;
            true
        } else {
            false
        }
    }

    /// Returns `true` if the history shows a release. The history is then
    /// forced to all "off" so the same release cannot be reported twice.
    pub fn check_released(&mut self) -> bool {
        if self.memory & MASK == RELEASE {
            self.memory = OFF;
            true
        } else {
            false
        }
    }

    pub fn is_down(&self) -> bool {
        self.memory == ON
    }

    pub fn is_up(&self) -> bool {
        self.memory == OFF
    }

    /// Debounces the given input, taking the current value and returning the
    /// edges and levels it produced. Note that "on" may be high or low in
    /// hardware, but a boolean should be passed here which is `true` if the
    /// input is currently on.
    pub fn debounce(&mut self, is_on: bool) -> DebounceResult {
        self.shift_in(is_on);

        let pressed = self.check_pressed();
        let released = self.check_released();
        let is_down = self.is_down();
        let is_up = self.is_up();

        let new_state = if is_down {
            true
        } else if is_up {
            false
        } else {
            self.previous_state
        };

        let is_changed = is_down != self.previous_down;
        self.previous_down = is_down;
        self.previous_state = new_state;

        DebounceResult {
            pressed,
            released,
            is_down,
            is_up,
            is_changed,
            is_on: new_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(input: &mut DebouncedInput, is_on: bool, count: usize) -> DebounceResult {
        let mut result = DebounceResult::default();
        for _ in 0..count {
            result = input.debounce(is_on);
        }
        result
    }

    #[test]
    fn starts_up() {
        let input = DebouncedInput::new();
        assert!(input.is_up());
        assert!(!input.is_down());
        assert_eq!(input.history(), 0);
    }

    #[test]
    fn shift_in_puts_newest_sample_in_bit_zero() {
        let mut input = DebouncedInput::new();
        input.shift_in(true);
        input.shift_in(false);
        input.shift_in(true);
        assert_eq!(input.history(), 0b101);
    }

    #[test]
    fn press_fires_once_on_sixth_stable_sample() {
        let mut input = DebouncedInput::new();
        let mut presses = 0;
        for i in 1..=16 {
            let result = input.debounce(true);
            if result.pressed {
                assert_eq!(i, 6);
                presses += 1;
            }
        }
        assert_eq!(presses, 1);
        assert!(input.is_down());

        let result = feed(&mut input, true, 100);
        assert!(!result.pressed);
        assert!(result.is_down);
    }

    #[test]
    fn release_fires_once_on_sixth_stable_sample() {
        let mut input = DebouncedInput::new();
        feed(&mut input, true, 16);

        let mut releases = 0;
        for i in 1..=16 {
            let result = input.debounce(false);
            if result.released {
                assert_eq!(i, 6);
                releases += 1;
            }
        }
        assert_eq!(releases, 1);
        assert!(input.is_up());
    }

    #[test]
    fn check_pressed_consumes_the_edge() {
        let mut input = DebouncedInput::new();
        for _ in 0..6 {
            input.shift_in(true);
        }
        assert!(input.check_pressed());
        assert_eq!(input.history(), ON);
        assert!(!input.check_pressed());
    }

    #[test]
    fn check_released_consumes_the_edge() {
        let mut input = DebouncedInput::new();
        for _ in 0..16 {
            input.shift_in(true);
        }
        for _ in 0..12 {
            input.shift_in(false);
        }
        assert!(input.check_released());
        assert_eq!(input.history(), OFF);
        assert!(!input.check_released());
    }

    #[test]
    fn bounce_in_the_middle_bits_is_tolerated() {
        let mut input = DebouncedInput::new();
        feed(&mut input, false, 16);

        // 6 bouncing samples, then 6 stable ones
        let mut pressed = false;
        for &s in &[true, false, true, true, false, true] {
            pressed |= input.debounce(s).pressed;
        }
        for _ in 0..6 {
            pressed |= input.debounce(true).pressed;
        }
        assert!(pressed);
        assert!(input.is_down());
    }

    #[test]
    fn a_single_glitch_does_not_press() {
        let mut input = DebouncedInput::new();
        let mut pressed = false;
        for _ in 0..50 {
            pressed |= input.debounce(true).pressed;
            pressed |= input.debounce(false).pressed;
        }
        assert!(!pressed);
    }

    #[test]
    fn down_and_up_match_the_raw_history() {
        let mut input = DebouncedInput::new();
        let samples = [true, true, false, true, true, true, true, true, true, true];
        for &s in &samples {
            let result = input.debounce(s);
            assert_eq!(result.is_down, input.history() == ON);
            assert_eq!(result.is_up, input.history() == OFF);
        }
    }

    #[test]
    fn is_changed_follows_is_down() {
        let mut input = DebouncedInput::new();
        let mut previous = input.is_down();
        let samples = [true; 8].iter().chain([false; 3].iter()).chain([true; 20].iter());
        for &s in samples {
            let result = input.debounce(s);
            assert_eq!(result.is_changed, result.is_down != previous);
            previous = result.is_down;
        }
    }

    #[test]
    fn is_on_keeps_its_state_while_bouncing() {
        let mut input = DebouncedInput::new();
        assert!(feed(&mut input, true, 16).is_on);

        let result = input.debounce(false);
        assert!(!result.is_down);
        assert!(result.is_on);

        let result = feed(&mut input, false, 5);
        assert!(result.released);
        assert!(result.is_up);
        assert!(!result.is_on);
    }
}
