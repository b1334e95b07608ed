use std::any::Any;

use chrono::{DateTime, Utc};

use crate::State;

/// Current wall-clock time as application state.
///
/// Everything that needs "now" (debounce deadlines, toast expiry) reads this
/// state instead of calling `Utc::now()` directly, so tests can pin or
/// advance time deterministically.
#[derive(Debug, Clone, Copy)]
pub struct Time(DateTime<Utc>);

impl Default for Time {
    fn default() -> Self {
        Self(Utc::now())
    }
}

impl Time {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Advances to the real current time. The app calls this once per frame.
    pub fn tick(&mut self) {
        self.0 = Utc::now();
    }

    pub fn set(&mut self, now: DateTime<Utc>) {
        self.0 = now;
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl State for Time {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
