use std::{
    collections::VecDeque,
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use serde::{Deserialize, Serialize};

const MAX_ENTRIES: usize = 100;

/// The most recent entries, newest first.
static LOG: Mutex<VecDeque<Entry>> = Mutex::new(VecDeque::new());
static FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
static STDERR_LEVEL: Mutex<LevelFilter> = Mutex::new(LevelFilter::Warn);

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Init(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static LOGGER: Logger = Logger;

/// Writes records up to `level` to stderr. All records are kept in the log
/// ring, which is persisted to `file` on flush.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), Error> {
    if let Ok(mut entries) = LOG.lock() {
        *entries = file.map(read_entries).and_then(Result::ok).unwrap_or_default();
    }
    if let Ok(mut path) = FILE.lock() {
        *path = file.map(Path::to_path_buf);
    }
    if let Ok(mut stderr_level) = STDERR_LEVEL.lock() {
        *stderr_level = level;
    }
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(LevelFilter::Debug))
        .map_err(|err| Error::Init(err.to_string()))
}

/// Entries of the log ring, newest first.
#[must_use]
pub fn entries() -> Vec<Entry> {
    LOG.lock()
        .map(|entries| entries.iter().cloned().collect())
        .unwrap_or_default()
}

pub fn read_entries(path: &Path) -> Result<VecDeque<Entry>, Error> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(VecDeque::new()),
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_entries(path: &Path, entries: &VecDeque<Entry>) -> Result<(), Error> {
    let text = serde_json::to_string(entries).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn push(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(MAX_ENTRIES);
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = Entry {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        };

        if STDERR_LEVEL
            .lock()
            .is_ok_and(|level| record.level() <= *level)
        {
            let _ = writeln!(
                std::io::stderr(),
                "{} {:<5} {}",
                entry.time,
                entry.level,
                entry.message
            );
        }

        if let Ok(mut entries) = LOG.lock() {
            push(&mut entries, entry);
        }
    }

    fn flush(&self) {
        let Ok(path) = FILE.lock() else {
            return;
        };
        let Some(path) = path.as_deref() else {
            return;
        };
        if let Ok(entries) = LOG.lock() {
            if let Err(err) = write_entries(path, &entries) {
                let _ = writeln!(std::io::stderr(), "{err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Oct 18 10:00:00".to_string(),
            level: Level::Warn,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_push_truncates() {
        let mut entries = VecDeque::new();

        for i in 0..=MAX_ENTRIES {
            push(&mut entries, entry(&i.to_string()));
        }

        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].message, MAX_ENTRIES.to_string());
        assert_eq!(entries[MAX_ENTRIES - 1].message, "1");
    }

    #[test]
    fn test_init_twice() {
        let _ = init(LevelFilter::Off, None);

        assert!(matches!(init(LevelFilter::Off, None), Err(Error::Init(_))));
        assert!(
            anyhow::Error::from(init(LevelFilter::Off, None).unwrap_err())
                .to_string()
                .starts_with("failed to initialize logger")
        );
    }

    #[test]
    fn test_write_read_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        let entries = VecDeque::from([entry("first"), entry("second")]);

        assert!(read_entries(&path).unwrap().is_empty());
        write_entries(&path, &entries).unwrap();

        assert_eq!(read_entries(&path).unwrap(), entries);
    }
}
