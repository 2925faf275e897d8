use crate::time::{Day, Minutes, TimeRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An interviewer with per-day availability windows. The roster is
/// immutable fixture data for the lifetime of a session; the input
/// pipeline keeps each day's windows sorted and disjoint, so the
/// resolver only ever tests containment against one range at a time.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    /// Badge color used by the calendar rendering.
    pub color: String,
    pub availability: BTreeMap<Day, Vec<TimeRange>>,
}

impl Engineer {
    /// Constructs an engineer with an empty availability map. Windows
    /// are attached with [`Engineer::with_availability`].
    pub fn new(id: &str, name: &str, color: &str) -> Engineer {
        Engineer {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            availability: BTreeMap::new(),
        }
    }

    /// Replaces this engineer's windows for one day.
    pub fn with_availability(mut self, day: Day, ranges: Vec<TimeRange>) -> Engineer {
        self.availability.insert(day, ranges);
        self
    }

    /// True iff some window on `day` holds the whole requested
    /// interval. Days absent from the map never match.
    ///
    /// # Examples
    /// ```
    /// use terminplan::engineer::Engineer;
    /// use terminplan::time::{Day, TimeRange};
    ///
    /// let engineer = Engineer::new("eng-1", "Alex Chen", "#22c55e")
    ///     .with_availability(Day::Tue, vec![TimeRange::parse("10:00", "16:00").unwrap()]);
    ///
    /// assert!(engineer.is_available(Day::Tue, 840, 30));
    /// assert!(!engineer.is_available(Day::Tue, 945, 30)); // 15:45 + 30 overruns
    /// assert!(!engineer.is_available(Day::Mon, 840, 30));
    /// ```
    pub fn is_available(&self, day: Day, start_min: Minutes, duration: Minutes) -> bool {
        self.availability
            .get(&day)
            .map_or(false, |ranges| {
                ranges.iter().any(|r| r.contains(start_min, duration))
            })
    }
}

/// Engineers free for the whole interval, in roster order. The order is
/// preserved so badge rendering and the default engineer choice stay
/// deterministic, and an engineer appears once however many of their
/// windows match.
pub fn available_engineers<'a>(
    engineers: &'a [Engineer],
    day: Day,
    start_min: Minutes,
    duration: Minutes,
) -> Vec<&'a Engineer> {
    engineers
        .iter()
        .filter(|e| e.is_available(day, start_min, duration))
        .collect()
}
