use crate::time::{Day, Minutes, TimeRange};
use serde::{Deserialize, Serialize};

/// A candidate from the externally fetched roster. The fetch itself
/// lives outside the engine; only its resolved list is consumed here.
#[derive(Clone, Serialize, Deserialize, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
}

impl Candidate {
    pub fn new(id: u32, name: &str) -> Candidate {
        Candidate {
            id,
            name: name.to_string(),
        }
    }
}

/// Substitute roster used when the external candidate fetch fails.
pub fn fallback_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new(1, "Jane Doe"),
        Candidate::new(2, "John Smith"),
        Candidate::new(3, "Ava Patel"),
    ]
}

/// The candidate's single preferred window for the week, e.g.
/// Tue 14:00-17:00. One scheduling intent at a time: edits replace the
/// whole value rather than accumulating per-day entries.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct CandidatePreference {
    pub day: Day,
    pub range: TimeRange,
}

impl CandidatePreference {
    pub fn new(day: Day, range: TimeRange) -> CandidatePreference {
        CandidatePreference { day, range }
    }

    /// False on any other weekday; otherwise plain containment of the
    /// interval in the preferred range.
    ///
    /// # Examples
    /// ```
    /// use terminplan::candidate::CandidatePreference;
    /// use terminplan::time::{Day, TimeRange};
    ///
    /// let pref = CandidatePreference::new(
    ///     Day::Tue,
    ///     TimeRange::parse("14:00", "17:00").unwrap(),
    /// );
    ///
    /// assert!(pref.allows(Day::Tue, 840, 30));
    /// assert!(!pref.allows(Day::Tue, 1020, 30)); // starts at the window end
    /// assert!(!pref.allows(Day::Mon, 840, 30)); // wrong day
    /// ```
    pub fn allows(&self, day: Day, start_min: Minutes, duration: Minutes) -> bool {
        if day != self.day {
            return false;
        }
        self.range.contains(start_min, duration)
    }
}
