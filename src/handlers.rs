//! The three filesystem operations behind the message loop. Each handler is
//! a pure function of its arguments: per-request failures are folded into
//! the returned [`Response`] and never escape.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::protocol::{FileEntry, Response};

/// List the direct children of a directory. Entries come back in whatever
/// order the OS enumerates them; nothing sorts or deduplicates.
pub fn list_directory(path: &Path) -> Response {
    log::info!("listing directory {}", path.display());
    match read_entries(path) {
        Ok(files) => Response::listing(files),
        Err(err) => {
            log::warn!("failed to list {}: {}", path.display(), err);
            Response::failure(err.to_string())
        }
    }
}

fn read_entries(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        files.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: child.to_string_lossy().into_owned(),
            // follows symlinks, matching what the extension expects
            is_directory: child.is_dir(),
        });
    }
    Ok(files)
}

/// Write or append text to a file, creating missing ancestor directories.
/// When appending to a file that already holds content, a blank line
/// separates the old content from the new.
pub fn save_text(path: Option<&str>, content: &str, append: bool) -> Response {
    let Some(path) = path else {
        return Response::failure("Failed to save file: no destination path given");
    };

    log::info!("saving {} bytes to {} (append: {})", content.len(), path, append);
    match write_text(Path::new(path), content, append) {
        Ok(()) => Response::with_path(path.to_string()),
        Err(err) => {
            log::warn!("failed to save {}: {}", path, err);
            Response::failure(format!("Failed to save file: {}", err))
        }
    }
}

fn write_text(path: &Path, content: &str, append: bool) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut options = fs::OpenOptions::new();
    if append {
        options.append(true).create(true);
    } else {
        options.write(true).create(true).truncate(true);
    }
    let mut file = options.open(path)?;

    if append && file.metadata()?.len() > 0 {
        file.write_all(b"\n\n")?;
    }
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Create a directory and all missing ancestors. Succeeds without effect
/// when the directory already exists.
pub fn ensure_directory(path: Option<&str>) -> Response {
    let Some(path) = path else {
        return Response::failure("Failed to create directory: no path given");
    };

    log::info!("ensuring directory {}", path);
    match fs::create_dir_all(path) {
        Ok(()) => Response::with_path(path.to_string()),
        Err(err) => {
            log::warn!("failed to create {}: {}", path, err);
            Response::failure(format!("Failed to create directory: {}", err))
        }
    }
}
