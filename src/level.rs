/// Which physical pin level means "pressed".
///
/// A button wired to ground with a pull-up is active [Low](ActiveLevel::Low),
/// one wired to the supply with a pull-down is active [High](ActiveLevel::High).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    #[default]
    High,
    Low,
}

impl ActiveLevel {
    /// Converts a raw pin level (`true` = high) to "is the button active".
    pub fn is_active(self, is_high: bool) -> bool {
        match self {
            ActiveLevel::High => is_high,
            ActiveLevel::Low => !is_high,
        }
    }
}
