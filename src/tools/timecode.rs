use std::fmt::{Display, Formatter};

/// Hours/minutes/seconds breakdown of a millisecond position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    hours: i64,
    minutes: i64,
    seconds: i64,
}

impl Timecode {
    /// Break a millisecond position into whole hours, minutes, and seconds.
    ///
    /// Positions below zero clamp to `0:00:00`.
    pub fn from_ms(ms: i64) -> Self {
        let total_seconds = ms.max(0) / 1000;
        let total_minutes = total_seconds / 60;
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
        }
    }
}

impl Display for Timecode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
