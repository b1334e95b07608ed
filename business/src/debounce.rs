use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};

/// How long after the last keystroke a refetch fires.
pub const DEBOUNCE_DELAY: TimeDelta = TimeDelta::milliseconds(500);

/// Delays refetches while the operator is still typing.
///
/// Deadlines are kept per field key: each edit calls [`Debouncer::touch`]
/// with the field it changed, re-arming only that field's timer. Every
/// frame the screen asks [`Debouncer::fire`] whether any quiet period has
/// elapsed. Time comes in from the caller so tests can step it.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    deadlines: BTreeMap<String, DateTime<Utc>>,
}

impl Debouncer {
    /// Re-arms `key`'s timer at `now + DEBOUNCE_DELAY`. Other fields keep
    /// their own deadlines.
    pub fn touch(&mut self, key: &str, now: DateTime<Utc>) {
        self.deadlines.insert(key.to_owned(), now + DEBOUNCE_DELAY);
    }

    /// True when at least one deadline has passed; elapsed deadlines are
    /// dropped so each fires exactly once.
    pub fn fire(&mut self, now: DateTime<Utc>) -> bool {
        let armed = self.deadlines.len();
        self.deadlines.retain(|_, deadline| *deadline > now);
        self.deadlines.len() < armed
    }

    pub fn is_pending(&self) -> bool {
        !self.deadlines.is_empty()
    }

    /// Drops every armed deadline without firing.
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
