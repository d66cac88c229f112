//! JSON storage for shop records
//!
//! The data file holds a single JSON array of records, written with
//! 4-space indentation and literal non-ASCII text. Every load validates
//! the full document before any record is handed out.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{validate_records, ShopRecord, ValidationError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed for {}: {} error(s)", .path.display(), .errors.len())]
    Validation {
        path: PathBuf,
        errors: Vec<ValidationError>,
    },

    #[error("Failed to serialize records")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Ordered, append-only list of shop records bound to a data file
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<ShopRecord>,
    dirty: bool,
}

impl RecordStore {
    /// Creates an empty store for the given path without touching the disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            dirty: false,
        }
    }

    /// Loads the store, or starts empty if the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if !path.exists() {
            return Ok(Self::new(path));
        }
        Self::load(path)
    }

    /// Loads and validates the records in an existing data file
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let content =
            fs::read_to_string(&path).map_err(|e| StoreError::io("read data file", &path, e))?;

        let document: Value = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.clone(),
            source: e,
        })?;

        let errors = validate_records(&document);
        if !errors.is_empty() {
            return Err(StoreError::Validation { path, errors });
        }

        let records: Vec<ShopRecord> =
            serde_json::from_value(document).map_err(|e| StoreError::Parse {
                path: path.clone(),
                source: e,
            })?;

        Ok(Self {
            path,
            records,
            dirty: false,
        })
    }

    /// Returns the path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all records in insertion order
    pub fn records(&self) -> &[ShopRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if the store changed since it was loaded or saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Appends a record to the end of the store
    pub fn add(&mut self, record: ShopRecord) {
        self.records.push(record);
        self.dirty = true;
    }

    /// Returns every record of the given shop, in store order
    pub fn find_by_shop(&self, name: &str) -> Vec<&ShopRecord> {
        self.records.iter().filter(|r| r.is_shop(name)).collect()
    }

    /// Writes all records to the data file (full rewrite)
    pub fn save(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| StoreError::io("create directory", parent, e))?;
            }
        }

        let bytes = self.to_pretty_json()?;
        let temp_path = self.temp_path();

        {
            let file =
                File::create(&temp_path).map_err(|e| StoreError::io("create", &temp_path, e))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(&bytes)
                .map_err(|e| StoreError::io("write", &temp_path, e))?;
            writer
                .flush()
                .map_err(|e| StoreError::io("flush", &temp_path, e))?;
        }

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::io("replace data file", &self.path, e));
        }

        self.dirty = false;
        Ok(())
    }

    /// Saves only if a mutation happened; returns true if the file was written
    pub fn save_if_dirty(&mut self) -> Result<bool, StoreError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn to_pretty_json(&self) -> Result<Vec<u8>, StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.records
            .serialize(&mut serializer)
            .map_err(StoreError::Serialize)?;
        buf.push(b'\n');
        Ok(buf)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("shops.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
