use embedded_hal::digital::InputPin;

use crate::config::ButtonConfig;
use crate::debouncer::{DebounceResult, DebouncedInput};
use crate::double_press::{DoublePressDetector, DoublePressState};
use crate::event::{ButtonEvent, Events};
use crate::level::ActiveLevel;
use crate::long_press::{LongPressDetector, LongPressEdge};

/// A handler invoked from [Button::sample] when an event fires.
pub type Handler = fn();

#[derive(Clone, Copy, Debug)]
struct Callbacks {
    press: Option<Handler>,
    release: Option<Handler>,
    double_press: Option<Handler>,
    long_press_start: Option<Handler>,
    long_press_end: Option<Handler>,
}

impl Callbacks {
    const NONE: Self = Self {
        press: None,
        release: None,
        double_press: None,
        long_press_start: None,
        long_press_end: None,
    };

    fn get(&self, event: ButtonEvent) -> Option<Handler> {
        match event {
            ButtonEvent::Press => self.press,
            ButtonEvent::Release => self.release,
            ButtonEvent::DoublePress => self.double_press,
            ButtonEvent::LongPressStart => self.long_press_start,
            ButtonEvent::LongPressEnd => self.long_press_end,
        }
    }
}

/// One debounced physical button with double press and long press detection.
///
/// Call [Button::sample] (or [Button::poll]) once per debounce tick, ideally
/// every millisecond. Everything else only reads what the last sample found.
#[derive(Clone, Debug)]
pub struct Button {
    id: u8,
    active_level: ActiveLevel,
    input: DebouncedInput,
    last: DebounceResult,
    double_press_enabled: bool,
    double_press: DoublePressDetector,
    long_press: LongPressDetector,
    callbacks: Callbacks,
}

impl Button {
    /// Creates a button with the default [ButtonConfig]. `id` identifies the
    /// button in logs and is otherwise not interpreted.
    pub const fn new(id: u8, active_level: ActiveLevel) -> Self {
        Self::with_config(id, active_level, ButtonConfig::new())
    }

    pub const fn with_config(id: u8, active_level: ActiveLevel, config: ButtonConfig) -> Self {
        Self {
            id,
            active_level,
            input: DebouncedInput::new(),
            last: DebounceResult::NONE,
            double_press_enabled: config.double_press_enabled,
            double_press: DoublePressDetector::new(
                config.double_press_window_ms,
                config.double_press_cooldown_ms,
            ),
            long_press: LongPressDetector::new(config.long_press_ms),
            callbacks: Callbacks::NONE,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    pub fn config(&self) -> ButtonConfig {
        ButtonConfig {
            double_press_enabled: self.double_press_enabled,
            double_press_window_ms: self.double_press.window_ms,
            double_press_cooldown_ms: self.double_press.cooldown_ms,
            long_press_ms: self.long_press.threshold_ms,
        }
    }

    /// Feeds one raw pin level (`true` = high) taken at `now_ms`.
    ///
    /// Returns the events this sample produced. Registered handlers for those
    /// events have already run, in the order [Events::iter] yields them.
    pub fn sample(&mut self, is_high: bool, now_ms: u32) -> Events {
        let result = self.input.debounce(self.active_level.is_active(is_high));
        self.last = result;

        let mut events = Events::empty();
        if result.pressed {
            trace!("button {}: press", self.id);
            events.insert(ButtonEvent::Press);
        }
        if result.released {
            trace!("button {}: release", self.id);
            events.insert(ButtonEvent::Release);
        }
        if self.double_press_enabled && self.double_press.update(&result, now_ms) {
            events.insert(ButtonEvent::DoublePress);
        }
        match self.long_press.update(&result, now_ms) {
            Some(LongPressEdge::Start) => events.insert(ButtonEvent::LongPressStart),
            Some(LongPressEdge::End) => events.insert(ButtonEvent::LongPressEnd),
            None => {}
        }

        for event in events {
            if let Some(handler) = self.callbacks.get(event) {
                handler();
            }
        }

        events
    }

    /// Reads `pin` and samples it. Nothing changes if the read fails.
    pub fn poll<P: InputPin>(&mut self, pin: &mut P, now_ms: u32) -> Result<Events, P::Error> {
        let is_high = pin.is_high()?;
        Ok(self.sample(is_high, now_ms))
    }
}

/// Queries about the last sample
impl Button {
    /// `true` once if the last sample detected a press.
    pub fn is_pressed(&mut self) -> bool {
        core::mem::take(&mut self.last.pressed)
    }

    /// `true` once if the last sample detected a release.
    pub fn is_released(&mut self) -> bool {
        core::mem::take(&mut self.last.released)
    }

    /// The history reads all active. A press edge forces this, so it can be
    /// `true` after only 6 active samples.
    pub fn is_down(&self) -> bool {
        self.input.is_down()
    }

    /// The history reads all inactive. A release edge forces this, so it can
    /// be `true` after only 6 inactive samples.
    pub fn is_up(&self) -> bool {
        self.input.is_up()
    }

    /// [Button::is_down] changed on the last sample.
    pub fn state_changed(&self) -> bool {
        self.last.is_changed
    }

    /// The debounced level. Unlike [Button::is_down] this stays `true` through
    /// bounces until the button has settled up again.
    pub fn is_held(&self) -> bool {
        self.last.is_on
    }

    /// `true` once per detected double press.
    pub fn is_double_pressed(&mut self) -> bool {
        self.double_press.take_detected()
    }

    pub fn is_long_pressed(&self) -> bool {
        self.long_press.is_active()
    }

    pub fn double_press_state(&self) -> DoublePressState {
        self.double_press.state()
    }
}

/// Configuration
impl Button {
    /// Turns double press detection on or off. Either way any sequence in
    /// progress is dropped.
    pub fn enable_double_press_detection(&mut self, enable: bool) {
        self.double_press_enabled = enable;
        self.double_press.reset();
    }

    pub fn set_double_press_window(&mut self, ms: u32) {
        self.double_press.window_ms = ms;
    }

    pub fn set_double_press_cooldown(&mut self, ms: u32) {
        self.double_press.cooldown_ms = ms;
    }

    pub fn set_long_press_time(&mut self, ms: u32) {
        self.long_press.threshold_ms = ms;
    }
}

/// Callback registration, each replaces any earlier handler
impl Button {
    pub fn on_press(&mut self, handler: Handler) {
        self.callbacks.press = Some(handler);
    }

    pub fn on_release(&mut self, handler: Handler) {
        self.callbacks.release = Some(handler);
    }

    pub fn on_double_press(&mut self, handler: Handler) {
        self.callbacks.double_press = Some(handler);
    }

    pub fn on_long_press_start(&mut self, handler: Handler) {
        self.callbacks.long_press_start = Some(handler);
    }

    pub fn on_long_press_end(&mut self, handler: Handler) {
        self.callbacks.long_press_end = Some(handler);
    }
}
