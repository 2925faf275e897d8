use crate::engineer::Engineer;
use crate::time::{Day, Minutes, TimeError, TimeRange};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported length of input. Expected {expected}, got {found}")]
    UnsupportedLength { expected: usize, found: usize },
    #[error("Overlapping availability ranges. {location} already covers minute {value}")]
    OverlappingTimeRange { location: String, value: Minutes },
    #[error(transparent)]
    Time(#[from] TimeError),
}

const MAX_ENGINEERS: usize = 100;

/// Engineer roster as loaded from fixture data or a deserialized
/// payload. `validate` must run before the roster is handed to a
/// session: deserialization bypasses the range constructor, so inverted
/// windows are caught here, each day's windows are sorted, and overlap
/// is rejected.
#[derive(Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Roster {
    pub engineers: Vec<Engineer>,
}

impl Roster {
    pub fn new(engineers: Vec<Engineer>) -> Roster {
        Roster { engineers }
    }

    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.engineers.len() > MAX_ENGINEERS {
            return Err(ValidationError::UnsupportedLength {
                expected: MAX_ENGINEERS,
                found: self.engineers.len(),
            });
        }

        for engineer in self.engineers.iter_mut() {
            for (day, ranges) in engineer.availability.iter_mut() {
                if let Some(range) = ranges.iter().find(|r| r.end <= r.start) {
                    return Err(TimeError::InvalidRange {
                        start: range.start,
                        end: range.end,
                    }
                    .into());
                }

                ranges.sort_unstable_by_key(|r| r.start);

                // Half-open ranges: touching windows are fine, a start
                // before the previous end is not.
                if let Some((_, next)) = ranges
                    .iter()
                    .tuple_windows()
                    .find(|(current, next)| current.end > next.start)
                {
                    return Err(ValidationError::OverlappingTimeRange {
                        location: format!("Engineer ({}) on {}", engineer.id, day),
                        value: next.start,
                    });
                }
            }
        }

        debug!("validated roster of {} engineers", self.engineers.len());

        Ok(())
    }
}

fn window(start: &str, end: &str) -> TimeRange {
    TimeRange::parse(start, end).expect("fixture windows are well-formed")
}

/// The built-in interviewer roster used by the demo app, tests, and
/// benches.
pub fn demo_roster() -> Roster {
    Roster::new(vec![
        Engineer::new("eng-1", "Alex Chen", "#22c55e")
            .with_availability(
                Day::Mon,
                vec![window("09:00", "12:00"), window("14:00", "17:30")],
            )
            .with_availability(Day::Tue, vec![window("10:00", "16:00")])
            .with_availability(
                Day::Wed,
                vec![window("09:00", "11:30"), window("13:00", "18:00")],
            )
            .with_availability(Day::Thu, vec![window("09:00", "12:30")])
            .with_availability(Day::Fri, vec![window("11:00", "16:00")]),
        Engineer::new("eng-2", "Priya Singh", "#f59e0b")
            .with_availability(Day::Mon, vec![window("13:00", "18:00")])
            .with_availability(
                Day::Tue,
                vec![window("09:00", "12:00"), window("14:00", "18:00")],
            )
            .with_availability(Day::Wed, vec![window("09:30", "15:00")])
            .with_availability(Day::Thu, vec![window("12:00", "18:00")])
            .with_availability(
                Day::Fri,
                vec![window("09:00", "12:30"), window("14:00", "17:00")],
            ),
        Engineer::new("eng-3", "Diego Morales", "#06b6d4")
            .with_availability(
                Day::Mon,
                vec![window("09:00", "11:00"), window("15:00", "18:00")],
            )
            .with_availability(Day::Tue, vec![window("11:00", "17:30")])
            .with_availability(
                Day::Wed,
                vec![window("10:00", "12:00"), window("14:00", "18:00")],
            )
            .with_availability(
                Day::Thu,
                vec![window("09:00", "10:30"), window("13:30", "18:00")],
            )
            .with_availability(Day::Fri, vec![window("10:00", "15:30")]),
    ])
}
