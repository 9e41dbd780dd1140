use crate::debouncer::DebounceResult;

/// What the long press detector reports for one sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LongPressEdge {
    Start,
    End,
}

/// Recognises a button being held for a while, based on the debounced level.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LongPressDetector {
    /// How long the button has to be held
    pub threshold_ms: u32,

    /// The debounced level on the previous sample
    was_on: bool,
    /// When the button last went from up to down
    press_start_ms: u32,
    detected: bool,
}

impl LongPressDetector {
    pub const fn new(threshold_ms: u32) -> Self {
        Self {
            threshold_ms,
            was_on: false,
            press_start_ms: 0,
            detected: false,
        }
    }

    /// Is a long press currently in progress?
    pub fn is_active(&self) -> bool {
        self.detected
    }

    pub fn update(&mut self, input: &DebounceResult, now_ms: u32) -> Option<LongPressEdge> {
        let was_on = self.was_on;
        self.was_on = input.is_on;

        match (was_on, input.is_on) {
            (false, true) => {
                self.press_start_ms = now_ms;
                self.detected = false;
            }
            (true, false) => {
                return if core::mem::take(&mut self.detected) {
                    debug!("long press ended");
                    Some(LongPressEdge::End)
                } else {
                    None
                };
            }
            (false, false) => return None,
            (true, true) => {}
        }

        if !self.detected && now_ms.wrapping_sub(self.press_start_ms) >= self.threshold_ms {
            info!("long press after {}ms", self.threshold_ms);
            self.detected = true;
            return Some(LongPressEdge::Start);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(is_on: bool) -> DebounceResult {
        DebounceResult {
            is_on,
            is_down: is_on,
            is_up: !is_on,
            ..DebounceResult::default()
        }
    }

    #[test]
    fn fires_start_once_while_held() {
        let mut d = LongPressDetector::new(1000);
        let mut starts = 0;
        for now in (0..=3000).step_by(10) {
            match d.update(&level(true), now) {
                Some(LongPressEdge::Start) => {
                    assert_eq!(now, 1000);
                    starts += 1;
                }
                Some(LongPressEdge::End) => panic!("ended while held"),
                None => {}
            }
        }
        assert_eq!(starts, 1);
        assert!(d.is_active());

        assert_eq!(d.update(&level(false), 3010), Some(LongPressEdge::End));
        assert!(!d.is_active());
        assert_eq!(d.update(&level(false), 3020), None);
    }

    #[test]
    fn short_press_has_no_end() {
        let mut d = LongPressDetector::new(1000);
        assert_eq!(d.update(&level(true), 0), None);
        assert_eq!(d.update(&level(true), 500), None);
        assert_eq!(d.update(&level(false), 600), None);
    }

    #[test]
    fn each_press_restarts_the_timer() {
        let mut d = LongPressDetector::new(1000);
        d.update(&level(true), 0);
        d.update(&level(false), 900);
        assert_eq!(d.update(&level(true), 1000), None);
        assert_eq!(d.update(&level(true), 1999), None);
        assert_eq!(d.update(&level(true), 2000), Some(LongPressEdge::Start));
    }

    #[test]
    fn survives_clock_wraparound() {
        let mut d = LongPressDetector::new(1000);
        let start = u32::MAX - 10;
        d.update(&level(true), start);
        assert_eq!(d.update(&level(true), start.wrapping_add(999)), None);
        assert_eq!(
            d.update(&level(true), start.wrapping_add(1000)),
            Some(LongPressEdge::Start)
        );
    }
}
