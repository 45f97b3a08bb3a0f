//! Size-capped rotating log file
//!
//! [`RotatingFile`] appends to `<dir>/<stem>.<ext>` until the next write
//! would push it past the size cap, then renames it to
//! `<dir>/<stem>-<timestamp>.<ext>` and starts over. After each rotation,
//! backups past their age or beyond the retained count are removed, and the
//! remaining ones are gzipped when compression is on.
//!
//! The file is opened lazily, so nothing touches the disk until the first
//! record is written.

use crate::constants::{BACKUP_TIMESTAMP_FORMAT, COMPRESSED_EXTENSION, DIAGNOSTICS_TARGET};
use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeDelta, Utc};
use flate2::Compression;
use flate2::write::GzEncoder;
use logwire_domain::value_objects::FileSink;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// A log file rotated by size, pruned by count and age
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: Option<usize>,
    max_age: Option<Duration>,
    compress: bool,
    file: Option<File>,
    size: u64,
    last_rotation: Option<DateTime<Utc>>,
}

/// A rotated file found next to the active one
#[derive(Debug)]
struct Backup {
    path: PathBuf,
    rotated_at: DateTime<Utc>,
    compressed: bool,
}

impl RotatingFile {
    /// Create a rotating file for `sink`; nothing is opened yet
    pub fn new(sink: &FileSink) -> Self {
        Self {
            path: sink.path.clone(),
            max_bytes: sink.rotation.max_bytes(),
            max_backups: sink.rotation.backup_limit(),
            max_age: sink.rotation.max_age(),
            compress: sink.rotation.compress,
            file: None,
            size: 0,
            last_rotation: None,
        }
    }

    /// Override the size cap in bytes
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Path of the active file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size cap in bytes
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Close the active file and start a new one, keeping the old as a backup.
    ///
    /// Backup cleanup failures are reported as `tracing` warnings and never
    /// fail the rotation.
    pub fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        self.open_new()?;
        if let Err(err) = self.mill() {
            warn!(
                target: DIAGNOSTICS_TARGET,
                path = %self.path.display(),
                error = %err,
                "Failed to clean up rotated log files"
            );
        }
        Ok(())
    }

    fn open_existing_or_new(&mut self, write_len: u64) -> io::Result<()> {
        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return self.open_new(),
            Err(err) => return Err(err),
        };

        if metadata.len() + write_len > self.max_bytes {
            return self.rotate();
        }

        match OpenOptions::new().append(true).open(&self.path) {
            Ok(file) => {
                self.file = Some(file);
                self.size = metadata.len();
                Ok(())
            }
            Err(_) => self.open_new(),
        }
    }

    fn open_new(&mut self) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        if self.path.exists() {
            let backup = self.backup_path();
            fs::rename(&self.path, backup)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        self.file = Some(file);
        self.size = 0;
        Ok(())
    }

    /// Next backup name. Stamps only move forward within one sink and skip
    /// over names that already exist, compressed or not.
    fn backup_path(&mut self) -> PathBuf {
        let mut stamp = Utc::now().trunc_subsecs(3);
        if let Some(last) = self.last_rotation.filter(|last| stamp <= *last) {
            stamp = last + TimeDelta::milliseconds(1);
        }
        loop {
            let candidate = self.backup_name(stamp);
            if !candidate.exists() && !compressed_path(&candidate).exists() {
                self.last_rotation = Some(stamp);
                return candidate;
            }
            stamp += TimeDelta::milliseconds(1);
        }
    }

    fn backup_name(&self, rotated_at: DateTime<Utc>) -> PathBuf {
        let (stem, ext) = self.name_parts();
        let stamp = rotated_at.format(BACKUP_TIMESTAMP_FORMAT);
        self.path.with_file_name(format!("{stem}-{stamp}{ext}"))
    }

    /// File stem and extension (with its dot) of the active file
    fn name_parts(&self) -> (String, String) {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = self
            .path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        (stem, ext)
    }

    fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Rotated files of this log, newest first
    fn backups(&self) -> io::Result<Vec<Backup>> {
        let (stem, ext) = self.name_parts();
        let prefix = format!("{stem}-");
        let compressed_ext = format!("{ext}.{COMPRESSED_EXTENSION}");

        let mut backups = Vec::new();
        for entry in fs::read_dir(self.directory())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let Some(rest) = name.strip_prefix(&prefix) else {
                continue;
            };
            let (stamp, compressed) = if let Some(stamp) = rest.strip_suffix(&compressed_ext) {
                (stamp, true)
            } else if let Some(stamp) = rest.strip_suffix(&ext) {
                (stamp, false)
            } else {
                continue;
            };
            let Ok(rotated_at) = NaiveDateTime::parse_from_str(stamp, BACKUP_TIMESTAMP_FORMAT)
            else {
                continue;
            };
            backups.push(Backup {
                path: entry.path(),
                rotated_at: rotated_at.and_utc(),
                compressed,
            });
        }

        backups.sort_by(|a, b| b.rotated_at.cmp(&a.rotated_at));
        Ok(backups)
    }

    /// Apply retention and compression to the existing backups
    fn mill(&self) -> io::Result<()> {
        if self.max_backups.is_none() && self.max_age.is_none() && !self.compress {
            return Ok(());
        }

        let mut backups = self.backups()?;

        if let Some(max_age) = self.max_age {
            let cutoff = TimeDelta::from_std(max_age)
                .ok()
                .and_then(|age| Utc::now().checked_sub_signed(age));
            if let Some(cutoff) = cutoff {
                let (expired, kept): (Vec<_>, Vec<_>) = backups
                    .into_iter()
                    .partition(|backup| backup.rotated_at < cutoff);
                remove_all(&expired)?;
                backups = kept;
            }
        }

        if let Some(limit) = self.max_backups
            && backups.len() > limit
        {
            let surplus = backups.split_off(limit);
            remove_all(&surplus)?;
        }

        if self.compress {
            for backup in backups.iter().filter(|backup| !backup.compressed) {
                compress_file(&backup.path)?;
            }
        }
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let write_len = buf.len() as u64;
        if write_len > self.max_bytes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "write length {write_len} exceeds maximum file size {}",
                    self.max_bytes
                ),
            ));
        }

        if self.file.is_none() {
            self.open_existing_or_new(write_len)?;
        } else if self.size + write_len > self.max_bytes {
            self.rotate()?;
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| io::Error::other("log file is not open"))?;
        let written = file.write(buf)?;
        self.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

fn compressed_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}

fn compress_file(path: &Path) -> io::Result<()> {
    let mut source = File::open(path)?;
    let target = File::create(compressed_path(path))?;
    let mut encoder = GzEncoder::new(target, Compression::default());
    io::copy(&mut source, &mut encoder)?;
    encoder.finish()?.sync_all()?;
    fs::remove_file(path)
}

fn remove_all(backups: &[Backup]) -> io::Result<()> {
    for backup in backups {
        match fs::remove_file(&backup.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
            _ => {}
        }
    }
    Ok(())
}
