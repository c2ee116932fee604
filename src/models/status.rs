/// Timer state derived from the record log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    On,
    Off,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::On => "ON",
            TimerStatus::Off => "OFF",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, TimerStatus::On)
    }
}
