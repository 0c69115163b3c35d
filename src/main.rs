mod cli;
mod clock;
mod errors;
mod json_out;
mod model;
mod normalizer;
mod schedule_api;

use crate::clock::Zone;
use crate::errors::AppError;
use chrono::NaiveDate;
use env_logger::Env;
use log::info;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "warn",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    info!("Done.");
}

fn run(args: &cli::CliArgs) -> Result<(), AppError> {
    let zone = Zone::from_arg(&args.tz);
    let date = clock::resolve_date(args.date.as_deref(), zone);

    println!("Fetching DR TV guide for {}...", date);

    let client = reqwest::blocking::Client::new();
    let doc = schedule_api::fetch_schedule(&client, date)?;

    if let Some(out_path) = report(&doc, zone, date, &args.out_dir)? {
        println!();
        println!("Saved JSON schedule to {}", out_path.display());
    }
    Ok(())
}

/// Prints the schedule and writes it to `out_dir`. An empty schedule writes nothing.
fn report(doc: &Value, zone: Zone, date: NaiveDate, out_dir: &Path) -> Result<Option<PathBuf>, AppError> {
    let programs = normalizer::normalize(doc, zone);

    if programs.is_empty() {
        println!("No programs found in API response.");
        return Ok(None);
    }

    println!();
    println!("=== TV Schedule for {} ===", date);
    for p in &programs {
        println!("{}", p);
    }

    let out_path = json_out::output_path(out_dir, date);
    json_out::write_json(&programs, &out_path)?;
    Ok(Some(out_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TvProgram;
    use serde_json::json;

    const CPH: Zone = Zone::Named(chrono_tz::Europe::Copenhagen);

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn is_empty_dir(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn empty_schedule_writes_no_file() {
        for doc in [json!([]), json!([{ "schedules": [] }]), json!({})] {
            let dir = tempfile::tempdir().unwrap();
            let written = report(&doc, CPH, date(), dir.path()).unwrap();
            assert_eq!(written, None, "{doc}");
            assert!(is_empty_dir(dir.path()), "{doc}");
        }
    }

    #[test]
    fn schedule_is_written_under_dated_name() {
        let doc = json!([{
            "schedules": [{
                "startTimeInDefaultTimeZone": "2024-01-01T18:00:00+01:00",
                "endTimeInDefaultTimeZone": "2024-01-01T18:30:00+01:00",
                "item": { "title": "News", "broadcastChannel": "DR1" }
            }]
        }]);
        let dir = tempfile::tempdir().unwrap();

        let written = report(&doc, CPH, date(), dir.path()).unwrap();

        let expected = dir.path().join("tv_schedule_2024-01-01.json");
        assert_eq!(written.as_deref(), Some(expected.as_path()));
        let saved: Vec<TvProgram> =
            serde_json::from_str(&std::fs::read_to_string(&expected).unwrap()).unwrap();
        assert_eq!(
            saved,
            vec![TvProgram {
                channel_name: "DR1".into(),
                start_time: Some("18:00".into()),
                title: "News".into(),
                end_time: Some("18:30".into()),
            }]
        );
    }

    #[test]
    fn write_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let doc = json!([{ "schedules": [{ "item": { "title": "News" } }] }]);
        let err = report(&doc, CPH, date(), &missing).unwrap_err();
        assert!(matches!(err, AppError::IO(_)));
    }
}
