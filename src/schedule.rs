use crate::candidate::{Candidate, CandidatePreference};
use crate::engineer::{available_engineers, Engineer};
use crate::input::Roster;
use crate::time::{generate_slots, slot_label, Day, Minutes, DAYS, SLOT_STEP};
use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    #[error("No candidate has been selected")]
    NoCandidateSelected,
    #[error("No slot has been selected")]
    NoSlotSelected,
    #[error("No engineer has been selected")]
    NoEngineerSelected,
}

/// One grid position: a day column and a row start. Slots are never
/// stored; the grid is the cross product of days and generated row
/// starts, and each slot's state is derived on demand.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Slot {
    pub day: Day,
    #[serde(rename = "startMin")]
    pub start_min: Minutes,
}

/// A confirmed interview. Candidate and engineer are referenced by id,
/// not owned; the value is immutable once recorded.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub candidate_id: u32,
    pub engineer_id: String,
    pub day: Day,
    pub start_min: Minutes,
    pub duration: Minutes,
}

impl Booking {
    /// Display label for the session's scheduled list.
    pub fn label(&self) -> String {
        slot_label(self.day, self.start_min, self.duration)
    }
}

/// Append-only list of this session's confirmed interviews. Entries are
/// never reordered or deleted; the list lives for the process lifetime.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    bookings: Vec<Booking>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger { bookings: vec![] }
    }

    /// Appends unconditionally. Feasibility and engineer choice are the
    /// caller's contract; the ledger only guarantees append-only order.
    pub fn record(&mut self, booking: Booking) {
        debug!("recording booking: {}", booking.label());
        self.bookings.push(booking);
    }

    /// True iff the queried start instant falls inside some booking's
    /// span on that day. Only the query instant is tested, not a whole
    /// new-interview interval: a longer interview starting on an
    /// unlocked row can still run into a locked one.
    ///
    /// # Examples
    /// ```
    /// use terminplan::schedule::{Booking, Ledger};
    /// use terminplan::time::Day;
    ///
    /// let mut ledger = Ledger::new();
    /// ledger.record(Booking {
    ///     candidate_id: 1,
    ///     engineer_id: "eng-1".to_string(),
    ///     day: Day::Tue,
    ///     start_min: 840,
    ///     duration: 30,
    /// });
    ///
    /// assert!(ledger.is_locked(Day::Tue, 840));
    /// assert!(ledger.is_locked(Day::Tue, 855));
    /// assert!(!ledger.is_locked(Day::Tue, 870)); // first instant past the span
    /// assert!(!ledger.is_locked(Day::Mon, 840));
    /// ```
    pub fn is_locked(&self, day: Day, start_min: Minutes) -> bool {
        self.bookings.iter().any(|b| {
            b.day == day && start_min >= b.start_min && start_min < b.start_min + b.duration
        })
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

/// Everything the calendar needs to paint one cell.
#[derive(Debug)]
pub struct SlotState<'a> {
    /// The slot lies inside the candidate's preferred window.
    pub within_candidate: bool,
    /// Engineers free for the whole interval, in roster order.
    pub available: Vec<&'a Engineer>,
    /// The single gate for selecting the slot: within the candidate
    /// window and at least one engineer free.
    pub feasible: bool,
    /// The slot's start instant falls inside an existing booking.
    pub locked: bool,
}

/// Owner of all mutable scheduling state for one sitting: the engineer
/// roster, the fetched candidate list, the candidate's preferred
/// window, the selected duration, and the booking ledger. Every
/// per-slot value is a pure function of these inputs, recomputed on
/// each query; nothing derived is cached.
pub struct Session {
    engineers: Vec<Engineer>,
    candidates: Vec<Candidate>,
    preference: CandidatePreference,
    duration: Minutes,
    ledger: Ledger,
}

impl Session {
    /// Opens a session over a validated roster. The duration starts at
    /// 30 minutes, matching the default grid row length.
    pub fn new(
        roster: Roster,
        candidates: Vec<Candidate>,
        preference: CandidatePreference,
    ) -> Session {
        Session {
            engineers: roster.engineers,
            candidates,
            preference,
            duration: 30,
            ledger: Ledger::new(),
        }
    }

    pub fn engineers(&self) -> &[Engineer] {
        &self.engineers
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn preference(&self) -> CandidatePreference {
        self.preference
    }

    pub fn duration(&self) -> Minutes {
        self.duration
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Replaces the candidate's preferred window wholesale. Feasibility
    /// is derived per query, so the change takes effect immediately.
    pub fn set_preference(&mut self, preference: CandidatePreference) {
        trace!(
            "preference now {} {}..{}",
            preference.day,
            preference.range.start,
            preference.range.end
        );
        self.preference = preference;
    }

    pub fn set_duration(&mut self, duration: Minutes) {
        trace!("duration now {} minutes", duration);
        self.duration = duration;
    }

    /// Engineers free for the whole interval at the session's current
    /// duration, in roster order.
    pub fn available_engineers(&self, day: Day, start_min: Minutes) -> Vec<&Engineer> {
        available_engineers(&self.engineers, day, start_min, self.duration)
    }

    pub fn within_candidate_window(&self, day: Day, start_min: Minutes) -> bool {
        self.preference.allows(day, start_min, self.duration)
    }

    /// The sole gate for selecting a slot: the candidate window must
    /// hold and at least one engineer must be free for the whole
    /// interval. The engineer scan is skipped entirely when the
    /// candidate is out of window.
    pub fn is_feasible(&self, day: Day, start_min: Minutes) -> bool {
        if !self.within_candidate_window(day, start_min) {
            return false;
        }
        !self.available_engineers(day, start_min).is_empty()
    }

    /// Derives the full view state for one cell. Polled per cell by the
    /// rendering layer on every repaint.
    pub fn slot_state(&self, day: Day, start_min: Minutes) -> SlotState<'_> {
        let within_candidate = self.within_candidate_window(day, start_min);
        let available = self.available_engineers(day, start_min);
        let feasible = within_candidate && !available.is_empty();

        SlotState {
            within_candidate,
            available,
            feasible,
            locked: self.ledger.is_locked(day, start_min),
        }
    }

    /// The fixed calendar grid: every (day, row start) pair.
    pub fn grid(&self) -> Vec<Slot> {
        let starts = generate_slots(SLOT_STEP);
        DAYS.iter()
            .cartesian_product(starts.iter())
            .map(|(&day, &start_min)| Slot { day, start_min })
            .collect_vec()
    }

    /// Appends a booking through the ledger. The caller has already
    /// validated feasibility and the engineer choice.
    pub fn record(&mut self, booking: Booking) {
        self.ledger.record(booking);
    }

    /// Records the selected interview at the session's current
    /// duration. Every precondition is checked before anything is
    /// appended, so an incomplete selection can never leave a partial
    /// booking behind.
    pub fn confirm(
        &mut self,
        candidate_id: Option<u32>,
        engineer_id: Option<&str>,
        slot: Option<Slot>,
    ) -> Result<&Booking, ScheduleError> {
        let candidate_id = candidate_id.ok_or(ScheduleError::NoCandidateSelected)?;
        let slot = slot.ok_or(ScheduleError::NoSlotSelected)?;
        let engineer_id = engineer_id.ok_or(ScheduleError::NoEngineerSelected)?;

        self.record(Booking {
            candidate_id,
            engineer_id: engineer_id.to_string(),
            day: slot.day,
            start_min: slot.start_min,
            duration: self.duration,
        });

        Ok(self
            .ledger
            .bookings()
            .last()
            .expect("ledger cannot be empty after an append"))
    }
}
