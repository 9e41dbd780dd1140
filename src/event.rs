/// Something a button did during one sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    Press,
    Release,
    DoublePress,
    LongPressStart,
    LongPressEnd,
}

impl ButtonEvent {
    /// All events, in the order they are dispatched within one sample.
    pub const ALL: [ButtonEvent; 5] = [
        ButtonEvent::Press,
        ButtonEvent::Release,
        ButtonEvent::DoublePress,
        ButtonEvent::LongPressStart,
        ButtonEvent::LongPressEnd,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The set of [ButtonEvent]s produced by a single call to
/// [Button::sample](crate::Button::sample).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Events(u8);

impl Events {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, event: ButtonEvent) {
        self.0 |= event.bit();
    }

    pub fn contains(self, event: ButtonEvent) -> bool {
        self.0 & event.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the events in dispatch order.
    pub fn iter(self) -> EventsIter {
        EventsIter {
            events: self,
            index: 0,
        }
    }
}

impl IntoIterator for Events {
    type Item = ButtonEvent;
    type IntoIter = EventsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [Events], see [Events::iter].
pub struct EventsIter {
    events: Events,
    index: usize,
}

impl Iterator for EventsIter {
    type Item = ButtonEvent;

    fn next(&mut self) -> Option<ButtonEvent> {
        while let Some(&event) = ButtonEvent::ALL.get(self.index) {
            self.index += 1;
            if self.events.contains(event) {
                return Some(event);
            }
        }
        None
    }
}
