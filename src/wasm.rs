use crate::candidate::CandidatePreference;
use crate::input::Roster;
use crate::schedule::{Booking, Session};
use crate::time::{Day, Minutes};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GridRequest {
    roster: Roster,
    preference: CandidatePreference,
    duration: Minutes,
    #[serde(default)]
    bookings: Vec<Booking>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GridCell {
    day: Day,
    start_min: Minutes,
    within_candidate: bool,
    available: Vec<String>,
    feasible: bool,
    locked: bool,
}

/// Per-slot view state for a posted roster, preference, duration, and
/// booking snapshot. The frontend repaints from this array; nothing is
/// retained between calls.
#[wasm_bindgen]
pub fn grid_view(input: JsValue) -> Result<JsValue, JsValue> {
    let mut request: GridRequest = serde_wasm_bindgen::from_value(input).map_err(JsValue::from)?;
    request
        .roster
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut session = Session::new(request.roster, vec![], request.preference);
    session.set_duration(request.duration);
    for booking in request.bookings {
        session.record(booking);
    }

    let cells: Vec<GridCell> = session
        .grid()
        .into_iter()
        .map(|slot| {
            let state = session.slot_state(slot.day, slot.start_min);
            GridCell {
                day: slot.day,
                start_min: slot.start_min,
                within_candidate: state.within_candidate,
                available: state.available.iter().map(|e| e.id.clone()).collect(),
                feasible: state.feasible,
                locked: state.locked,
            }
        })
        .collect();

    serde_wasm_bindgen::to_value(&cells).map_err(JsValue::from)
}
