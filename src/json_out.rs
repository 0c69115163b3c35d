use crate::errors::AppError;
use crate::model::TvProgram;
use chrono::NaiveDate;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn output_path(out_dir: &Path, date: NaiveDate) -> PathBuf {
    out_dir.join(format!("tv_schedule_{}.json", date.format("%Y-%m-%d")))
}

/// Pretty JSON array, truncating any existing file at `out_path`.
pub fn write_json(programs: &[TvProgram], out_path: &Path) -> Result<(), AppError> {
    let file = File::create(out_path)
        .map_err(|e| AppError::IO(format!("open out json '{}': {}", out_path.display(), e)))?;
    let mut wtr = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut wtr, programs)
        .map_err(|e| AppError::IO(format!("json write: {}", e)))?;
    wtr.write_all(b"\n")?;
    wtr.flush().map_err(|e| AppError::IO(format!("json flush: {}", e)))?;

    info!("JSON wrote {} programs to {}", programs.len(), out_path.display());
    Ok(())
}
