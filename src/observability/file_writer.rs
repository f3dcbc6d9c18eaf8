//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe, cloneable file writer that rotates
//! the log file when it exceeds a size threshold, keeping a fixed number of
//! backups. This bounds disk usage for log output, which matters because the
//! plugin cannot log to stdout (stdout is the rendering surface).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (5 MB).
const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 2;

struct Inner {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    file: Mutex<Option<File>>,
}

/// Thread-safe rotating file writer.
///
/// Checks the file size before each write; past the threshold the current
/// file is renamed with a timestamp suffix, a new file is created, and
/// backups beyond the retention limit are removed. Clones share the same
/// underlying handle, which lets this be used as a `tracing_subscriber`
/// writer via a `move || writer.clone()` closure.
#[derive(Clone)]
pub struct RotatingFileWriter {
    inner: Arc<Inner>,
}

impl RotatingFileWriter {
    /// Creates a writer for the given path.
    ///
    /// The file is not opened until the first write, so construction always
    /// succeeds even if the path is not writable yet.
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            inner: Arc::new(Inner {
                file_path,
                file: Mutex::new(None),
            }),
        }
    }

    fn check_and_rotate(&self, file: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.inner.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *file = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.log.<unix_timestamp>` and removes
    /// backups beyond the retention limit.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self
            .inner
            .file_path
            .with_extension(format!("log.{timestamp}"));

        if self.inner.file_path.exists() {
            fs::rename(&self.inner.file_path, &backup_path)?;
        }

        self.cleanup_old_backups();

        Ok(())
    }

    /// Deletes the oldest backups past [`MAX_BACKUP_FILES`], ignoring
    /// individual deletion failures so cleanup always continues.
    fn cleanup_old_backups(&self) {
        let Some(parent_dir) = self.inner.file_path.parent() else {
            return;
        };
        let Some(file_stem) = self.inner.file_path.file_stem().and_then(|s| s.to_str()) else {
            return;
        };
        let Ok(entries) = fs::read_dir(parent_dir) else {
            return;
        };

        let mut backups: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".log."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }
    }
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut file)?;

        if file.is_none() {
            let handle = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.inner.file_path)?;
            *file = Some(handle);
        }

        let handle = file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "no file available"))?;
        handle.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("mutex poisoned: {e}")))?;

        if let Some(handle) = file.as_mut() {
            handle.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.inner.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_append_to_the_target_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookstand.log");

        let mut writer = RotatingFileWriter::new(path.clone());
        writer.write_all(b"first line\n").unwrap();
        writer.write_all(b"second line\n").unwrap();
        writer.flush().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }

    #[test]
    fn clones_share_the_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookstand.log");

        let mut a = RotatingFileWriter::new(path.clone());
        let mut b = a.clone();
        a.write_all(b"from a\n").unwrap();
        b.write_all(b"from b\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "from a\nfrom b\n");
    }
}
