use crate::debouncer::DebounceResult;

/// Where the double press detector is in a press, release, press sequence.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DoublePressState {
    #[default]
    Idle,
    /// The first press is down
    FirstDetected,
    /// The first press was released, waiting for the second one
    AwaitingSecond,
    /// The second press is down
    Detected,
    /// The second press was released, waiting out the cooldown
    Cooldown,
}

/// Recognises two presses in quick succession.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DoublePressDetector {
    /// The second press must start less than this long after the first
    pub window_ms: u32,
    /// Time after the first press before `Cooldown` returns to `Idle`. A press
    /// during the cooldown ends it early and starts a new sequence.
    pub cooldown_ms: u32,

    state: DoublePressState,
    /// When the press that started the current sequence happened
    first_press_ms: u32,
    /// Set when a double press is detected, cleared when read or on cooldown
    detected: bool,
}

impl DoublePressDetector {
    pub const fn new(window_ms: u32, cooldown_ms: u32) -> Self {
        Self {
            window_ms,
            cooldown_ms,
            state: DoublePressState::Idle,
            first_press_ms: 0,
            detected: false,
        }
    }
}

/// Private methods
impl DoublePressDetector {
    fn elapsed(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.first_press_ms)
    }

    fn start_sequence(&mut self, now_ms: u32) {
        self.first_press_ms = now_ms;
        self.state = DoublePressState::FirstDetected;
    }
}

/// Public interface
impl DoublePressDetector {
    pub fn state(&self) -> DoublePressState {
        self.state
    }

    /// Drops any sequence in progress.
    pub fn reset(&mut self) {
        self.state = DoublePressState::Idle;
        self.detected = false;
    }

    /// Returns `true` once per detected double press.
    pub fn take_detected(&mut self) -> bool {
        core::mem::take(&mut self.detected)
    }

    /// Advances the state machine with the edges of one sample. Returns `true`
    /// on the sample where the second press is recognised.
    pub fn update(&mut self, input: &DebounceResult, now_ms: u32) -> bool {
        match self.state {
            DoublePressState::Idle => {
                if input.pressed {
                    self.start_sequence(now_ms);
                }
            }
            DoublePressState::FirstDetected => {
                if input.released {
                    self.state = DoublePressState::AwaitingSecond;
                }
            }
            DoublePressState::AwaitingSecond => {
                let elapsed = self.elapsed(now_ms);

                if input.pressed {
                    if elapsed < self.window_ms {
                        info!("double press after {}ms", elapsed);
                        self.state = DoublePressState::Detected;
                        self.detected = true;
                        return true;
                    }

                    // too late for a double press, but it can be the first of a new pair
                    debug!("second press {}ms after first, restarting", elapsed);
                    self.start_sequence(now_ms);
                } else if elapsed >= self.window_ms {
                    trace!("double press window expired");
                    self.state = DoublePressState::Idle;
                }
            }
            DoublePressState::Detected => {
                if input.released {
                    self.state = DoublePressState::Cooldown;
                }
            }
            DoublePressState::Cooldown => {
                if input.pressed {
                    // a press during the cooldown starts the next pair
                    debug!("press during cooldown, restarting");
                    self.detected = false;
                    self.start_sequence(now_ms);
                } else if self.elapsed(now_ms) >= self.cooldown_ms {
                    self.state = DoublePressState::Idle;
                    self.detected = false;
                }
            }
        }

        false
    }
}
