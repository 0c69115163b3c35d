use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::{debug, warn};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%d-%m-%Y"];
const OFFSET_DT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z", "%Y-%m-%dT%H:%M:%S%z"];
const NAIVE_DT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Zone that schedule times are shown in and "today" is computed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Zone {
    Local,
    Named(Tz),
}

impl Zone {
    pub fn from_arg(arg: &Option<String>) -> Zone {
        match arg.as_ref() {
            Some(name) => match name.parse::<Tz>() {
                Ok(tz) => Zone::Named(tz),
                Err(_) => {
                    warn!("Timezone '{}' not recognised; falling back to local", name);
                    Zone::Local
                }
            },
            None => Zone::Local,
        }
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Zone::Local => Local::now().date_naive(),
            Zone::Named(tz) => Utc::now().with_timezone(tz).date_naive(),
        }
    }

    /// Repeated DST hour resolves to the first occurrence; skipped hour is `None`.
    fn attach(&self, naive: &NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Zone::Local => Local.from_local_datetime(naive).earliest().map(|dt| dt.fixed_offset()),
            Zone::Named(tz) => tz.from_local_datetime(naive).earliest().map(|dt| dt.fixed_offset()),
        }
    }

    fn hhmm(&self, dt: &DateTime<FixedOffset>) -> String {
        match self {
            Zone::Local => dt.with_timezone(&Local).format("%H:%M").to_string(),
            Zone::Named(tz) => dt.with_timezone(tz).format("%H:%M").to_string(),
        }
    }
}

/// Lenient timestamp conversion: `None` for missing, empty or unparseable input,
/// otherwise the wall-clock `HH:MM` in `zone`.
///
/// Offset-less timestamps are read as wall-clock time in `zone`.
pub fn to_hhmm(raw: Option<&str>, zone: Zone) -> Option<String> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;

    let parsed = DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            OFFSET_DT_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        })
        .or_else(|| {
            NAIVE_DT_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .and_then(|naive| zone.attach(&naive))
        });

    match parsed {
        Some(dt) => Some(zone.hhmm(&dt)),
        None => {
            debug!("ignoring unparseable timestamp {:?}", raw);
            None
        }
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Date from the command line, or today in `zone`. Bad input warns and falls back.
///
/// The warning is printed regardless of the log level.
pub fn resolve_date(arg: Option<&str>, zone: Zone) -> NaiveDate {
    match arg {
        None => zone.today(),
        Some(s) => parse_date(s).unwrap_or_else(|| {
            eprintln!("Invalid date format {:?}, using today instead.", s);
            zone.today()
        }),
    }
}
