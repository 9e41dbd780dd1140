//! Debouncing and gesture recognition for momentary switches.
//!
//! Each [Button] keeps a 16 sample history of its input. Sampled every
//! millisecond it reports clean press and release edges, the steady down and
//! up levels, double presses and long presses.
//!
//! ```
//! use kodeboard_button::{ActiveLevel, Button, ButtonEvent};
//!
//! let mut button = Button::new(0, ActiveLevel::Low);
//! button.enable_double_press_detection(true);
//!
//! // the pin is pulled low for 20ms
//! let mut pressed = false;
//! for now in 0..20 {
//!     pressed |= button.sample(false, now).contains(ButtonEvent::Press);
//! }
//! assert!(pressed);
//! assert!(button.is_down());
//! ```
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod button;
pub mod config;
pub mod debouncer;
pub mod double_press;
pub mod event;
pub mod level;
pub mod long_press;
pub mod sampler;

pub use button::{Button, Handler};
pub use config::ButtonConfig;
pub use debouncer::{DebounceResult, DebouncedInput};
pub use double_press::DoublePressState;
pub use event::{ButtonEvent, Events};
pub use level::ActiveLevel;
pub use sampler::SharedButton;
