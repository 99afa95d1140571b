use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;

use crate::errors::AppError;

/// Keeps a plain-text backup of an operation's result in a file named
/// after the operation.
///
/// The wrapped operation takes no arguments and produces any serializable
/// value. Its serialized form is compared byte-for-byte against the file
/// content, and the file is only rewritten when the result actually
/// changed. The cache directory must already exist; a missing directory
/// surfaces as the underlying I/O error.
pub struct Cacher {
    cache_dir: PathBuf,
}

impl Cacher {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Run `op`, persist its serialized result under `name` and return
    /// that text.
    ///
    /// Exactly one of three things happens to the cache file per call:
    /// it is created, it is truncated and rewritten, or it is left
    /// untouched. On a hit the file is only ever opened read-only.
    pub fn cached<T, F>(&self, name: &str, op: F) -> Result<String, AppError>
    where
        T: Serialize,
        F: FnOnce() -> Result<T, AppError>,
    {
        let value = op()?;
        let text = serde_json::to_string(&value)?;
        let path = self.cache_dir.join(name);

        if !path.exists() {
            let mut file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)?;
            file.write_all(text.as_bytes())?;

            info!("cache entry '{}' created", name);
            return Ok(text);
        }

        let mut existing = String::new();
        File::open(&path)?.read_to_string(&mut existing)?;

        if existing == text {
            debug!("cache entry '{}' unchanged, skipping write", name);
            return Ok(text);
        }

        let mut file = OpenOptions::new().write(true).truncate(true).open(&path)?;
        file.write_all(text.as_bytes())?;

        info!("cache entry '{}' updated", name);
        Ok(text)
    }
}
