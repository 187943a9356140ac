// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

use chrono::{DateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LOG_FILE_NAME: &str = "logfile.txt";
pub const ROUND_SEPARATOR: &str = "-------------------";

/// Default game log location: `<data_local_dir>/hangman/logfile.txt`, or the
/// working directory when the platform has no data directory.
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(LOG_FILE_NAME),
        |dir| dir.join("hangman").join(LOG_FILE_NAME),
    )
}

#[must_use]
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Human-readable record of play, one timestamped line per event.
///
/// Write failures are reported through the diagnostic logger and otherwise
/// ignored, so a full disk never interrupts a game.
pub struct GameLog {
    sink: Box<dyn Write>,
}

impl GameLog {
    pub fn new(sink: impl Write + 'static) -> Self {
        Self {
            sink: Box::new(sink),
        }
    }

    /// Open `path` for appending, creating it and its parent directory if needed.
    pub fn append_to(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }

    /// A log that discards everything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(io::sink())
    }

    pub fn event(&mut self, message: &str) {
        let line = format!("{}: {message}", format_timestamp(Utc::now()));
        self.write_line(&line);
    }

    pub fn raw(&mut self, message: &str) {
        self.write_line(message);
    }

    pub fn separator(&mut self) {
        self.write_line(ROUND_SEPARATOR);
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.sink.flush() {
            debug_log!("Game log flush failed: {}", e);
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.sink, "{line}") {
            debug_log!("Game log write failed: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    /// Clonable in-memory sink for inspecting a `GameLog` after use.
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
