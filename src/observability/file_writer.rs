//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that automatically rotates
//! files when they exceed a size threshold, maintaining a fixed number of
//! backup files. This prevents unbounded disk usage for log files.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// When the current file exceeds [`MAX_FILE_SIZE_BYTES`] it is renamed with
/// a timestamp suffix and a new file is created; old backups beyond
/// [`MAX_BACKUP_FILES`] are removed. The file handle is opened lazily on
/// the first write, so construction never fails.
///
/// An internal `Mutex` makes the writer safe to share between the UI thread
/// and the worker thread; `handle()` produces cheap `io::Write` clones for
/// the tracing fmt layer.
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl FileWriter {
    /// Creates a new file writer for the given path.
    ///
    /// The file is not opened until the first write.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Appends bytes to the file, rotating first if the file has grown past
    /// the size threshold.
    ///
    /// # Errors
    ///
    /// Fails on filesystem errors (permissions, disk space) or if another
    /// thread panicked while holding the internal lock.
    pub fn write_bytes(&self, buf: &[u8]) -> std::io::Result<usize> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::other("No file available"))?;

        file.write_all(buf)?;
        file.flush()?;
        drop(writer);

        Ok(buf.len())
    }

    /// Checks file size and rotates if necessary.
    ///
    /// If the current file exceeds the threshold, closes the handle and
    /// triggers rotation.
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Rotates the current file and cleans up old backups.
    ///
    /// Backups are named `<name>.log.<unix_timestamp>`, e.g.
    /// `reelscout.log.1234567890`.
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("log.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Removes backup files beyond the retention limit.
    ///
    /// Scans the directory for files matching `<stem>*.log.*`, keeps the
    /// newest [`MAX_BACKUP_FILES`] by modification time, and deletes the
    /// rest. Individual deletion failures are ignored so cleanup continues.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::other("No parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::other("Invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
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

        Ok(())
    }

    /// Returns an `io::Write` handle suitable for a tracing fmt layer.
    pub fn handle(self: &Arc<Self>) -> FileWriterHandle {
        FileWriterHandle(Arc::clone(self))
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

/// Cloneable `io::Write` view over a shared [`FileWriter`].
#[derive(Debug, Clone)]
pub struct FileWriterHandle(Arc<FileWriter>);

impl Write for FileWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write_bytes(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FileWriter;
    use std::sync::Arc;

    #[test]
    fn writes_append_lines_to_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reelscout.log");
        let writer = FileWriter::new(path.clone());

        writer.write_bytes(b"first\n").unwrap();
        writer.write_bytes(b"second\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn oversized_files_rotate_to_a_timestamped_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reelscout.log");

        // Sparse file just past the rotation threshold.
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(super::MAX_FILE_SIZE_BYTES + 1).unwrap();
        drop(file);

        let writer = FileWriter::new(path.clone());
        writer.write_bytes(b"fresh\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fresh\n");

        let backups: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| name.contains(".log."))
            .collect();
        assert_eq!(backups.len(), 1);
        assert!(backups[0].starts_with("reelscout.log."));
    }

    #[test]
    fn handle_writes_through_the_shared_writer() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reelscout.log");
        let writer = Arc::new(FileWriter::new(path.clone()));

        let mut handle = writer.handle();
        handle.write_all(b"via handle\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "via handle\n");
    }
}
