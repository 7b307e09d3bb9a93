use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scheduled block within a day.
///
/// Times are zero-padded 24-hour "HH:MM" strings and are ordered lexically;
/// they are never parsed into numeric time types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
    pub subject: String,
}

impl Period {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            subject: subject.into(),
        }
    }
}

/// Mapping from lowercase weekday name to that day's ordered periods.
///
/// Serializes as the plain JSON object `{"monday": [{...}, ...], ...}`.
/// Day lists are assumed chronological by `start` and are stored as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    days: BTreeMap<String, Vec<Period>>,
}

impl Timetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered periods for a day, or `None` if the day was never saved.
    pub fn day(&self, name: &str) -> Option<&[Period]> {
        self.days.get(name).map(Vec::as_slice)
    }

    pub fn contains_day(&self, name: &str) -> bool {
        self.days.contains_key(name)
    }

    /// Replace the whole entry for a day; the previous list is discarded.
    pub fn set_day(&mut self, name: impl Into<String>, periods: Vec<Period>) {
        self.days.insert(name.into(), periods);
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = (&str, &[Period])> {
        self.days
            .iter()
            .map(|(name, periods)| (name.as_str(), periods.as_slice()))
    }
}
