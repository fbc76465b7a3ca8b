//! File-system predicates, copy, removal and size formatting.

use std::fs::{self, File};
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::error::{Error, Result};

fn stat(path: &Path, operation: &str) -> Result<fs::Metadata> {
    fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::internal_io(e.to_string(), Some(operation.to_string()))
        }
    })
}

/// `Ok(true)` for a directory, `Ok(false)` for anything else that exists.
pub fn is_dir(path: impl AsRef<Path>) -> Result<bool> {
    Ok(stat(path.as_ref(), "stat directory")?.is_dir())
}

/// `Ok(true)` for anything that exists and is not a directory.
pub fn is_file(path: impl AsRef<Path>) -> Result<bool> {
    Ok(!stat(path.as_ref(), "stat file")?.is_dir())
}

/// Remove a file or a directory tree. A missing path is not an error.
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::internal_io(e.to_string(), Some("remove".to_string()))),
    };

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    result.map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("remove {}", path.display())))
    })?;

    log_status!("file", "Removed {}", path.display());
    Ok(())
}

/// Copy a regular file to a destination that must not exist yet.
pub fn copy(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());

    if !stat(src, "stat source")?.is_file() {
        return Err(Error::file_not_regular(src.display().to_string()));
    }

    let mut source = File::open(src).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("open {}", src.display())))
    })?;

    if dst.exists() {
        return Err(Error::file_already_exists(dst.display().to_string()));
    }

    let mut destination = File::options()
        .write(true)
        .create_new(true)
        .open(dst)
        .map_err(|e| {
            if e.kind() == ErrorKind::AlreadyExists {
                Error::file_already_exists(dst.display().to_string())
            } else {
                Error::internal_io(e.to_string(), Some(format!("create {}", dst.display())))
            }
        })?;

    let copied = io::copy(&mut source, &mut destination).map_err(|e| {
        Error::internal_io(
            e.to_string(),
            Some(format!("copy {} to {}", src.display(), dst.display())),
        )
    })?;

    log_status!("file", "Copied {} bytes to {}", copied, dst.display());
    Ok(())
}

/// Human-readable size in binary units with one decimal, e.g. `"1.2 MB"`.
pub fn format_size(bytes: i64) -> String {
    const UNIT: i64 = 1024;
    const PREFIXES: &[u8] = b"KMGTPE";

    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let (mut div, mut exp) = (UNIT, 0usize);
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!(
        "{:.1} {}B",
        bytes as f64 / div as f64,
        PREFIXES[exp] as char
    )
}
