//! Clock that always reports the same instant.

use chrono::{DateTime, TimeZone, Utc};

use crate::ports::Clock;

/// Returns the instant it was built with.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Pins the clock to `instant`.
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Default for FixedClock {
    /// Midnight UTC on 2024-01-01.
    fn default() -> Self {
        Self::at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_new_year_2024() {
        assert_eq!(FixedClock::default().now().to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }
}
