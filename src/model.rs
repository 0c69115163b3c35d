use serde::{Deserialize, Serialize};
use std::fmt;

/// One broadcast slot after normalization. Field order is the JSON key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TvProgram {
    pub channel_name: String,
    pub start_time: Option<String>, // HH:MM
    pub title: String,
    pub end_time: Option<String>,   // HH:MM
}

const UNKNOWN_TIME: &str = "??:??";

impl fmt::Display for TvProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} : {}",
            self.channel_name,
            self.start_time.as_deref().unwrap_or(UNKNOWN_TIME),
            self.end_time.as_deref().unwrap_or(UNKNOWN_TIME),
            self.title
        )
    }
}
