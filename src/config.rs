/// Timing parameters for the gestures recognised on top of the debouncer.
///
/// All durations are in milliseconds of the clock passed to
/// [Button::sample](crate::Button::sample).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Double press detection only runs when this is set.
    pub double_press_enabled: bool,

    /// The second press must start less than this long after the first one.
    pub double_press_window_ms: u32,

    /// After a double press is released, the detector waits until this long
    /// after the first press before it listens again.
    pub double_press_cooldown_ms: u32,

    /// How long the button must be held before a long press starts.
    pub long_press_ms: u32,
}

impl ButtonConfig {
    pub const DEFAULT_DOUBLE_PRESS_WINDOW_MS: u32 = 300;
    pub const DEFAULT_DOUBLE_PRESS_COOLDOWN_MS: u32 = 50;
    pub const DEFAULT_LONG_PRESS_MS: u32 = 1000;

    pub const fn new() -> Self {
        Self {
            double_press_enabled: false,
            double_press_window_ms: Self::DEFAULT_DOUBLE_PRESS_WINDOW_MS,
            double_press_cooldown_ms: Self::DEFAULT_DOUBLE_PRESS_COOLDOWN_MS,
            long_press_ms: Self::DEFAULT_LONG_PRESS_MS,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}
