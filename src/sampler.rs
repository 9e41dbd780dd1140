//! Running a [Button] on the embassy runtime.
//!
//! Either give the button to a task that owns it and forwards events through a
//! channel ([run]), or keep it in a [SharedButton] static and sample it from a
//! timer interrupt with [sample_shared] while other code queries it.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::InputPin;

use crate::button::Button;
use crate::event::{ButtonEvent, Events};

/// A button that can be sampled from an interrupt and queried from thread mode.
pub type SharedButton = Mutex<CriticalSectionRawMutex, RefCell<Button>>;

/// How often buttons should be sampled.
pub const DEFAULT_TICK: Duration = Duration::from_millis(1);

/// Wraps a button for use in a static.
pub const fn shared(button: Button) -> SharedButton {
    Mutex::new(RefCell::new(button))
}

/// The millisecond clock expected by [Button::sample]. Wraps after ~49 days,
/// which the button copes with.
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Samples a shared button once, inside a critical section.
pub fn sample_shared<P: InputPin>(button: &SharedButton, pin: &mut P) -> Result<Events, P::Error> {
    let now = now_ms();
    button.lock(|cell| cell.borrow_mut().poll(pin, now))
}

/// Samples `pin` every `tick` (usually [DEFAULT_TICK]) and sends each event
/// the button produces.
///
/// A failed pin read skips that tick. If the channel is full the event is
/// dropped rather than delaying the next sample.
pub async fn run<P, M, const N: usize>(
    button: &mut Button,
    mut pin: P,
    tick: Duration,
    sender: Sender<'_, M, ButtonEvent, N>,
) -> !
where
    P: InputPin,
    M: RawMutex,
{
    info!(
        "Sampling button {} every {}us",
        button.id(),
        tick.as_micros()
    );
    let mut ticker = Ticker::every(tick);

    loop {
        match button.poll(&mut pin, now_ms()) {
            Ok(events) => {
                for event in events {
                    if sender.try_send(event).is_err() {
                        warn!("Button {}: event queue full, dropped {}", button.id(), event);
                    }
                }
            }
            Err(_) => {
                warn!("Button {}: failed to read pin", button.id());
            }
        }

        ticker.next().await;
    }
}
