//! Diagnostic channel setup.
//!
//! Native builds log to a file in the data directory, since the terminal is
//! owned by the UI. Web builds log to the browser console.

#[cfg(feature = "native")]
use std::fs::{self, File, OpenOptions};
#[cfg(feature = "native")]
use std::io::{self, Read, Seek, SeekFrom, Write};
#[cfg(feature = "native")]
use std::path::Path;
#[cfg(feature = "native")]
use std::sync::{Arc, Mutex};

#[cfg(feature = "native")]
use tracing_subscriber::{EnvFilter, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
#[cfg(feature = "native")]
pub const LOG_FILE_NAME: &str = "multiset.log";

/// Maximum log file size before rotation (5 MB)
#[cfg(feature = "native")]
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
#[cfg(feature = "native")]
const KEEP_SIZE: u64 = 1024 * 1024;

#[cfg(feature = "native")]
const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Truncate `log_path` to its newest `keep` bytes once it grows past `max`.
///
/// The cut is moved forward to the next line start so no partial line is
/// kept. Returns whether the file was rotated.
#[cfg(feature = "native")]
fn rotate_log(log_path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if size <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(size.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let line_start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(ROTATION_MARKER)?;
    file.write_all(&tail[line_start..])?;
    Ok(true)
}

/// Shared handle to the open log file, one writer per event.
#[cfg(feature = "native")]
#[derive(Clone)]
struct SharedLogFile(Arc<Mutex<File>>);

#[cfg(feature = "native")]
impl SharedLogFile {
    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        f(&mut file)
    }
}

#[cfg(feature = "native")]
impl Write for SharedLogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(|file| file.flush())
    }
}

#[cfg(feature = "native")]
impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/multiset.log`. When the log exceeds 5MB,
/// older entries are removed keeping only the last 1MB.
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
#[cfg(feature = "native")]
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("multiset={level},multiset_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedLogFile(Arc::new(Mutex::new(file))))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "Multiset logging initialized");
    Ok(())
}

/// Initialize logging to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let rotated = rotate_log(&dir.path().join(LOG_FILE_NAME), 10, 5).unwrap();
        assert!(!rotated);
    }

    #[test]
    fn test_small_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert!(!rotate_log(&path, 64, 16).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "first line\nsecond line\nthird line\n").unwrap();

        // The last 16 bytes start mid-line: "line\nthird line\n"
        assert!(rotate_log(&path, 20, 16).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "--- Log rotated (older entries removed) ---\nthird line\n"
        );
    }
}
