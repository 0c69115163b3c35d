use argparse::{ArgumentParser, Store, StoreOption};
use std::path::PathBuf;

pub struct CliArgs {
    pub date: Option<String>,
    pub tz: Option<String>,
    pub out_dir: PathBuf,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            date: None,
            tz: None,
            out_dir: PathBuf::from("."),
            log_level: "warn".into(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("DR TV guide -> JSON dumper");
        ap.refer(&mut args.date)
            .add_argument("date", StoreOption, "Schedule date (YYYY-MM-DD); defaults to today");
        ap.refer(&mut args.tz)
            .add_option(&["--tz"], StoreOption, "Timezone for displayed times (IANA name)");
        ap.refer(&mut args.out_dir)
            .add_option(&["--out-dir"], Store, "Directory for tv_schedule_<date>.json");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
