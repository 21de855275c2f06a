//! Process-wide logging setup.
//!
//! All records go to a size-rotated log file; warnings and errors are echoed
//! to stderr as well. The sink is installed once per process, so calling
//! [`init_logging`] again only adjusts the level.

use crate::errors::{BotError, Result};
use env_logger::Target;
use log::{Level, LevelFilter};
use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

pub const MAX_LOG_BYTES: u64 = 5 * 1024 * 1024;
pub const LOG_BACKUPS: usize = 3;

static INSTALLED_LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHandle {
    pub log_file: PathBuf,
    pub level: LevelFilter,
}

impl LogHandle {
    pub fn set_level(&mut self, level: LevelFilter) {
        log::set_max_level(level);
        self.level = level;
    }
}

pub fn init_logging(level: LevelFilter, log_file: &Path) -> Result<LogHandle> {
    let mut installed = INSTALLED_LOG_FILE
        .lock()
        .map_err(|e| BotError::LoggingError {
            message: e.to_string(),
        })?;
    if installed.is_none() {
        install(log_file)?;
        *installed = Some(log_file.to_path_buf());
    }
    let log_file = installed.clone().unwrap_or_else(|| log_file.to_path_buf());

    log::set_max_level(level);
    Ok(LogHandle { log_file, level })
}

fn install(log_file: &Path) -> Result<()> {
    let writer = RotatingFile::open(log_file, MAX_LOG_BYTES, LOG_BACKUPS).map_err(|e| {
        BotError::LoggingError {
            message: format!("cannot open {}: {}", log_file.display(), e),
        }
    })?;

    // 另一个 logger 已注册（如测试环境）时沿用它
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Trace)
        .format(|buf, record| {
            let ts = buf.timestamp_seconds();
            if record.level() <= Level::Warn {
                eprintln!("{} | {:<8} | {}", ts, record.level(), record.args());
            }
            writeln!(
                buf,
                "{} | {:<8} | {} | {}",
                ts,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(writer)))
        .try_init();
    Ok(())
}

/// Append-only file that rolls over to `name.1 .. name.N` once it grows past
/// `max_bytes`.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RotatingFile {
    pub fn open(path: &Path, max_bytes: u64, backups: usize) -> io::Result<Self> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let written = file.metadata()?.len();
        Ok(RotatingFile {
            path: path.to_path_buf(),
            max_bytes,
            backups,
            file,
            written,
        })
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{}", index));
        PathBuf::from(name)
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.backups > 0 {
            for i in (1..self.backups).rev() {
                let from = self.backup_path(i);
                if from.exists() {
                    fs::rename(&from, self.backup_path(i + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        }
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
