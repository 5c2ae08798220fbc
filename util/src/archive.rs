//! CSV archiving functionality
//!
//! An `Archiver` owns one CSV file. The header is written when the archive is
//! created so that an archive with no rows is still a valid, self-describing
//! file.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An object used to write CSV archive files.
pub struct Archiver {
    path: PathBuf,
    writer: Writer<File>,
    num_records: u64,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors which can occur while creating or writing an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Cannot create the archive directory {0:?}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Cannot open the archive file {0:?}: {1}")]
    Open(PathBuf, std::io::Error),

    #[error("I/O error while writing the archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot serialise record into the archive: {0}")]
    Csv(#[from] csv::Error),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Archiver {
    /// Create a new archiver at the given path, writing the header record
    /// immediately.
    ///
    /// Any existing file at the path is truncated. Missing parent directories
    /// are created.
    pub fn from_path<P: AsRef<Path>>(
        path: P, header: &[&str]
    ) -> Result<Self, ArchiveError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| ArchiveError::CreateDir(parent.to_path_buf(), e))?;
            }
        }

        let file = File::create(&path)
            .map_err(|e| ArchiveError::Open(path.clone(), e))?;

        // Headers are written explicitly, serde must not derive them from
        // the first record.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer.write_record(header)?;
        writer.flush()?;

        Ok(Self {
            path,
            writer,
            num_records: 0
        })
    }

    /// Serialise a record into the archive.
    pub fn serialise<T: Serialize>(
        &mut self, record: T
    ) -> Result<(), ArchiveError> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        self.num_records += 1;

        Ok(())
    }

    /// The number of records (excluding the header) written so far.
    pub fn num_records(&self) -> u64 {
        self.num_records
    }

    /// The path of the archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        a: f64,
        b: u8,
    }

    #[test]
    fn test_archive_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("arch.csv");

        let mut arch = Archiver::from_path(&path, &["a", "b"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n");

        arch.serialise(Row { a: 1.5, b: 2 }).unwrap();
        arch.serialise(Row { a: 0.0, b: 0 }).unwrap();
        assert_eq!(arch.num_records(), 2);

        let contents = std::fs::read_to_string(arch.path()).unwrap();
        assert_eq!(contents, "a,b\n1.5,2\n0.0,0\n");
    }

    #[test]
    fn test_archive_truncates_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arch.csv");
        std::fs::write(&path, "stale\ncontent\n").unwrap();

        Archiver::from_path(&path, &["x"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x\n");
    }

    #[test]
    fn test_archive_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A file where a directory is expected
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let res = Archiver::from_path(blocker.join("arch.csv"), &["x"]);
        assert!(res.is_err());
    }
}
