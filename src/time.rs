use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minutes since midnight. All engine times are naive minute-of-day
/// values within one implicit timezone; nothing here knows about dates.
pub type Minutes = u16;

/// 09:00, the opening bound of the business day.
pub const DAY_START: Minutes = 540;
/// 18:00, the closing bound of the business day.
pub const DAY_END: Minutes = 1080;
/// Step between calendar grid rows.
pub const SLOT_STEP: Minutes = 30;
/// Interview lengths offered by the scheduler. Independent of
/// [`SLOT_STEP`]: a 60 minute interview may start on any 30 minute row.
pub const DURATIONS: [Minutes; 3] = [15, 30, 60];

#[derive(Error, Debug, Eq, PartialEq)]
pub enum TimeError {
    #[error("Invalid time. Expected \"HH:mm\" with hour 0-23 and minute 0-59, got \"{input}\"")]
    InvalidTimeFormat { input: String },
    #[error("Invalid time range. Expected start < end, got {start}..{end}")]
    InvalidRange { start: Minutes, end: Minutes },
}

/// Parses a 24-hour "HH:mm" string into minutes since midnight.
///
/// The parse is strict: exactly two numeric components, hour 0-23,
/// minute 0-59. An out-of-range component is an error rather than a
/// silently wrong minute value.
///
/// # Examples
/// ```
/// use terminplan::time::to_minutes;
///
/// assert_eq!(to_minutes("09:00"), Ok(540));
/// assert_eq!(to_minutes("17:30"), Ok(1050));
///
/// assert!(to_minutes("24:00").is_err());
/// assert!(to_minutes("12:60").is_err());
/// assert!(to_minutes("12:5:9").is_err());
/// ```
pub fn to_minutes(text: &str) -> Result<Minutes, TimeError> {
    let invalid = || TimeError::InvalidTimeFormat {
        input: text.to_string(),
    };

    let mut parts = text.split(':');
    let hour: Minutes = parts
        .next()
        .and_then(|h| h.parse().ok())
        .ok_or_else(invalid)?;
    let minute: Minutes = parts
        .next()
        .and_then(|m| m.parse().ok())
        .ok_or_else(invalid)?;

    if parts.next().is_some() || hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(hour * 60 + minute)
}

/// Zero-padded "HH:mm" text for a minute-of-day value. Total inverse of
/// [`to_minutes`] over its valid outputs.
///
/// # Examples
/// ```
/// use terminplan::time::from_minutes;
///
/// assert_eq!(from_minutes(540), "09:00");
/// assert_eq!(from_minutes(1050), "17:30");
/// assert_eq!(from_minutes(0), "00:00");
/// ```
pub fn from_minutes(min: Minutes) -> String {
    format!("{:02}:{:02}", min / 60, min % 60)
}

/// 12-hour display label. Hours 0 and 12 both render as "12".
///
/// # Examples
/// ```
/// use terminplan::time::format_ampm;
///
/// assert_eq!(format_ampm(540), "9:00 AM");
/// assert_eq!(format_ampm(0), "12:00 AM");
/// assert_eq!(format_ampm(750), "12:30 PM");
/// assert_eq!(format_ampm(1050), "5:30 PM");
/// ```
pub fn format_ampm(min: Minutes) -> String {
    let hour = min / 60;
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", (hour + 11) % 12 + 1, min % 60, suffix)
}

/// Display label for a slot at a given duration.
///
/// # Examples
/// ```
/// use terminplan::time::{slot_label, Day};
///
/// assert_eq!(slot_label(Day::Tue, 840, 30), "Tue, 2:00 PM – 2:30 PM");
/// ```
pub fn slot_label(day: Day, start_min: Minutes, duration: Minutes) -> String {
    format!(
        "{}, {} – {}",
        day,
        format_ampm(start_min),
        format_ampm(start_min + duration)
    )
}

/// Weekday of the single recurring business week. No weekend, no
/// calendar dates; the grid is the fixed Mon-Fri cycle.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

/// Calendar column order.
pub const DAYS: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
        })
    }
}

/// Half-open [start, end) window of free or preferred time.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub struct TimeRange {
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeRange {
    /// Constructs a validated range; `end` must be strictly after
    /// `start`.
    ///
    /// # Examples
    /// ```
    /// use terminplan::time::{TimeError, TimeRange};
    ///
    /// let range = TimeRange::new(540, 720).unwrap();
    /// assert_eq!(range.start, 540);
    /// assert_eq!(range.end, 720);
    ///
    /// assert_eq!(
    ///     TimeRange::new(720, 720),
    ///     Err(TimeError::InvalidRange { start: 720, end: 720 })
    /// );
    /// ```
    pub fn new(start: Minutes, end: Minutes) -> Result<TimeRange, TimeError> {
        if start < end {
            Ok(TimeRange { start, end })
        } else {
            Err(TimeError::InvalidRange { start, end })
        }
    }

    /// Builds a range from a pair of "HH:mm" strings.
    ///
    /// # Examples
    /// ```
    /// use terminplan::time::TimeRange;
    ///
    /// let range = TimeRange::parse("10:00", "16:00").unwrap();
    /// assert_eq!((range.start, range.end), (600, 960));
    ///
    /// assert!(TimeRange::parse("16:00", "10:00").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<TimeRange, TimeError> {
        TimeRange::new(to_minutes(start)?, to_minutes(end)?)
    }

    /// True iff the whole interval [start_min, start_min + duration)
    /// lies inside this range. Equality is allowed on the upper bound:
    /// an interview ending exactly at `end` fits, one starting there
    /// does not. The duration is part of the test, not just the start
    /// instant.
    ///
    /// # Examples
    /// ```
    /// use terminplan::time::TimeRange;
    ///
    /// let range = TimeRange::parse("14:00", "17:00").unwrap();
    ///
    /// assert!(range.contains(840, 30));
    /// assert!(range.contains(990, 30)); // 16:30 + 30 ends exactly at 17:00
    /// assert!(!range.contains(1005, 30)); // 16:45 + 30 overruns the window
    /// assert!(!range.contains(1020, 30)); // starts at the very end
    /// ```
    pub fn contains(&self, start_min: Minutes, duration: Minutes) -> bool {
        start_min >= self.start && start_min + duration <= self.end
    }

    /// Grid slot starts within this range: every `t` stepping by `step`
    /// from `start` with `t + step <= end`, so no row's nominal step
    /// overruns the closing bound. A zero step would never advance and
    /// yields nothing.
    ///
    /// # Examples
    /// ```
    /// use terminplan::time::business_day;
    ///
    /// let slots = business_day().slot_starts(30);
    /// assert_eq!(slots.len(), 18);
    /// assert_eq!(slots.first(), Some(&540));
    /// assert_eq!(slots.last(), Some(&1050));
    ///
    /// assert!(business_day().slot_starts(600).is_empty());
    /// ```
    pub fn slot_starts(&self, step: Minutes) -> Vec<Minutes> {
        if step == 0 {
            return vec![];
        }

        let mut slots = vec![];
        let mut t = self.start;
        while t + step <= self.end {
            slots.push(t);
            t += step;
        }
        slots
    }
}

/// The fixed 09:00-18:00 window all grid slots are generated within.
pub fn business_day() -> TimeRange {
    TimeRange {
        start: DAY_START,
        end: DAY_END,
    }
}

/// Start times of the base calendar rows for one business day.
pub fn generate_slots(step: Minutes) -> Vec<Minutes> {
    business_day().slot_starts(step)
}
