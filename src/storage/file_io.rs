//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure, plus a
//! lenient reader that reports unparsable files instead of failing.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// Result of a lenient JSON read
#[derive(Debug)]
pub enum JsonRead<T> {
    /// No file at the path
    Missing,
    /// The file exists but holds nothing but whitespace
    Empty,
    /// Parsed successfully
    Parsed(T),
    /// The file exists but could not be read
    Unreadable(String),
    /// The file was read but does not hold the expected JSON
    Corrupt(String),
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, TrackerError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| TrackerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read JSON from a file without ever failing
///
/// Distinguishes a missing file, an empty file, parsed content, a file that
/// cannot be read and a file that is malformed.
pub fn read_json_lenient<T, P>(path: P) -> JsonRead<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return JsonRead::Missing;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => return JsonRead::Unreadable(format!("Failed to read {}: {}", path.display(), e)),
    };

    if contents.trim().is_empty() {
        return JsonRead::Empty;
    }

    match serde_json::from_str(&contents) {
        Ok(data) => JsonRead::Parsed(data),
        Err(e) => JsonRead::Corrupt(format!("Failed to parse {}: {}", path.display(), e)),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TrackerError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = sibling_path(path, ".tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| TrackerError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "wrote json file");
    Ok(())
}

/// Move an unusable file aside so it is not overwritten by the next save
///
/// Returns the new location, `<file>.corrupt-<YYYYmmdd-HHMMSS>`.
pub fn quarantine_file<P: AsRef<Path>>(path: P) -> Result<PathBuf, TrackerError> {
    let path = path.as_ref();
    let suffix = format!(".corrupt-{}", Local::now().format("%Y%m%d-%H%M%S"));
    let mut target = sibling_path(path, &suffix);

    // Two quarantines in the same second must not clobber each other
    let mut attempt = 1;
    while target.exists() {
        target = sibling_path(path, &format!("{}-{}", suffix, attempt));
        attempt += 1;
    }

    fs::rename(path, &target).map_err(|e| {
        TrackerError::Storage(format!(
            "Failed to move {} to {}: {}",
            path.display(),
            target.display(),
            e
        ))
    })?;

    Ok(target)
}

/// `path` with `suffix` appended to its file name
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(suffix);
    path.with_file_name(name)
}
