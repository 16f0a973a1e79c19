//! Output destination shared by every clone of a logger

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Cloneable handle to a writer.
///
/// A formatted record is written with a single `write_all` while the lock is
/// held, so records from concurrent callers never interleave.
#[derive(Clone)]
pub struct Sink {
    name: &'static str,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    pub fn stderr() -> Self {
        Self::named("stderr", std::io::stderr())
    }

    pub fn stdout() -> Self {
        Self::named("stdout", std::io::stdout())
    }

    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", writer)
    }

    /// Open `path` for appending, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;
        Ok(Self::named("file", file))
    }

    fn named<W: Write + Send + 'static>(name: &'static str, writer: W) -> Self {
        Self {
            name,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub(crate) fn write_record(&self, line: &[u8]) -> std::io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line)
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}
