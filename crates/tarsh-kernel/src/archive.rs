//! Archive loading.
//!
//! Reads a tar byte stream once at startup and produces the flat entry list
//! the virtual tree is built from. Gzip-compressed archives (`.tar.gz`,
//! `.tgz`) are decompressed transparently based on the file extension.
//!
//! Directory names in tar archives may or may not carry a trailing `/`;
//! the loader strips it and tracks the kind separately so the tree builder
//! never depends on incidental formatting.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

/// Kind of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One record decoded from the archive.
///
/// File content is owned eagerly so it can be re-read any number of times
/// after the source stream is gone.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Slash-separated path, archive-relative, no leading or trailing slash.
    pub path: String,
    pub kind: EntryKind,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// File content (empty for directories).
    pub content: Vec<u8>,
}

/// Archive loading and tree construction errors. All fatal at startup.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("invalid archive: {0}")]
    Format(String),
    #[error("invalid entry path: {0:?}")]
    InvalidPath(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decode every entry of a tar stream into a flat list.
///
/// Regular files and directories are kept; other entry types (links,
/// fifos, ...) are skipped with a warning.
pub fn load<R: Read>(reader: R) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive = tar::Archive::new(reader);
    let mut out = Vec::new();

    let entries = archive
        .entries()
        .map_err(|e| ArchiveError::Format(e.to_string()))?;

    for entry in entries {
        let mut entry = entry.map_err(|e| ArchiveError::Format(e.to_string()))?;

        let raw = entry
            .path()
            .map_err(|e| ArchiveError::Format(e.to_string()))?
            .to_string_lossy()
            .into_owned();
        let path = raw.trim_end_matches('/').to_string();

        let entry_type = entry.header().entry_type();
        // Old-style archives sometimes mark directories only via the
        // trailing slash, not the type flag.
        if entry_type.is_dir() || (entry_type.is_file() && raw.ends_with('/')) {
            out.push(ArchiveEntry {
                path,
                kind: EntryKind::Directory,
                size: 0,
                content: Vec::new(),
            });
        } else if entry_type.is_file() {
            let size = entry.size();
            let mut content = Vec::with_capacity(size as usize);
            entry.read_to_end(&mut content)?;
            out.push(ArchiveEntry {
                path,
                kind: EntryKind::File,
                size,
                content,
            });
        } else {
            tracing::warn!(path = %path, entry_type = ?entry_type, "skipping unsupported archive entry");
        }
    }

    Ok(out)
}

/// Open an archive file and decode it, decompressing `.tar.gz`/`.tgz` input.
pub fn load_path(path: &Path) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let file = File::open(path)?;
    let name = path.to_string_lossy();
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        load(GzDecoder::new(file))
    } else {
        load(file)
    }
}
