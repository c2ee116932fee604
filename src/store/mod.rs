//! Flat-file record store: durable append-only log with full-file read
//! and full-file rewrite.

use crate::errors::AppResult;
use crate::models::record::Record;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Handle to the record log. The path is injected so tests can point it
/// at a temporary file.
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file on first use.
    pub fn append(&self, record: &Record) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.encode())?;
        file.flush()?;
        Ok(())
    }

    /// Read and decode every record in file order. A missing file is an
    /// empty log, not an error.
    pub fn read_all(&self) -> AppResult<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Record::parse)
            .collect()
    }

    /// Replace the whole file with exactly the given records. Written to
    /// a sibling temp file first, then renamed over the log.
    pub fn rewrite(&self, records: &[Record]) -> AppResult<()> {
        let tmp = self.path.with_extension("tmp");
        {
            let mut file = fs::File::create(&tmp)?;
            for record in records {
                writeln!(file, "{}", record.encode())?;
            }
            file.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
