// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::csv::{write_records, Delim};
use crate::error::LoadError;
use crate::recon::Envelope;
use crate::table::RowRecord;

/// Read a JSON record envelope. A body without `records` still loads; the
/// reconciliation reports it as a structural error.
pub fn read_envelope<T: DeserializeOwned>(path: &Path) -> Result<Envelope<T>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Write extracted records to `path` (CSV, or TSV for a `.tsv` extension).
/// Parent directories are created as needed.
pub fn export_records(path: &Path, records: &[RowRecord]) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let mut w = BufWriter::new(File::create(path)?);
    write_records(&mut w, records, Delim::for_path(path).sep())?;
    w.flush()?;
    logd!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        if dir.is_dir() { Ok(()) }
        else { Err(io::Error::new(io::ErrorKind::AlreadyExists, format!("{} exists and is not a directory", dir.display()))) }
    } else {
        fs::create_dir_all(dir)
    }
}
