use crate::clock::{self, Zone};
use crate::model::TvProgram;
use log::{debug, trace};
use serde_json::{Map, Value};

const UNKNOWN_CHANNEL: &str = "Unknown";
const UNTITLED: &str = "Untitled";

/// First candidate that is a non-empty string. `null`, non-strings and `""` fall through.
fn first_non_empty<'a>(candidates: &[Option<&'a Value>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
}

fn as_array(v: Option<&Value>) -> &[Value] {
    v.and_then(Value::as_array).map(Vec::as_slice).unwrap_or(&[])
}

fn to_program(schedule: &Value, zone: Zone) -> TvProgram {
    let empty = Map::new();
    let item = schedule
        .get("item")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let channel_name = first_non_empty(&[
        item.get("broadcastChannel"),
        item.get("customFields").and_then(|c| c.get("BroadcastChannel")),
    ])
    .unwrap_or(UNKNOWN_CHANNEL);

    let start_raw = first_non_empty(&[
        schedule.get("startTimeInDefaultTimeZone"),
        item.get("broadcastChannelStart"),
    ]);
    let end_raw = first_non_empty(&[
        schedule.get("endTimeInDefaultTimeZone"),
        schedule.get("endDate"),
    ]);

    let title = first_non_empty(&[item.get("title")]).unwrap_or(UNTITLED);

    TvProgram {
        channel_name: channel_name.to_string(),
        start_time: clock::to_hhmm(start_raw, zone),
        title: title.to_string(),
        end_time: clock::to_hhmm(end_raw, zone),
    }
}

/// Flattens `[ { schedules: [ { item, ... } ] } ]` into programs, in source order.
/// Any shape mismatch along the way yields fewer records, never an error.
pub fn normalize(doc: &Value, zone: Zone) -> Vec<TvProgram> {
    let mut out = Vec::new();
    for (gi, group) in as_array(Some(doc)).iter().enumerate() {
        let schedules = as_array(group.get("schedules"));
        trace!("group #{}: {} schedules", gi, schedules.len());
        for schedule in schedules {
            out.push(to_program(schedule, zone));
        }
    }
    debug!("normalized {} programs", out.len());
    out
}
