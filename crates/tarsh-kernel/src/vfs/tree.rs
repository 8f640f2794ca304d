//! The virtual tree and its queries.

use super::node::{Node, NodeKind};
use super::VfsError;
use crate::archive::{ArchiveEntry, ArchiveError, EntryKind};

/// Read-only directory tree with a mutable current-directory cursor.
///
/// Built once from the archive's flat entry list; immutable afterwards.
/// The cursor starts at `/` and is moved only by successful
/// [`change_directory`](VirtualTree::change_directory) calls.
#[derive(Debug, Clone)]
pub struct VirtualTree {
    root: Node,
    current_dir: String,
}

impl VirtualTree {
    /// Build the tree from the loader's flat entry list.
    ///
    /// Intermediate directories that the archive never declared are
    /// synthesized: tar archives commonly omit parent entries, so this is a
    /// correctness requirement, not a convenience. Entry paths containing
    /// `.` or `..` segments mean the archive itself is malformed and fail
    /// the build.
    pub fn build(entries: Vec<ArchiveEntry>) -> Result<Self, ArchiveError> {
        let mut root = Node::directory("/");

        for entry in entries {
            let segments: Vec<&str> = entry.path.split('/').filter(|s| !s.is_empty()).collect();
            if segments.is_empty() {
                return Err(ArchiveError::InvalidPath(entry.path.clone()));
            }
            if segments.iter().any(|s| *s == "." || *s == "..") {
                return Err(ArchiveError::InvalidPath(entry.path.clone()));
            }

            let mut cursor = &mut root;
            for segment in &segments[..segments.len() - 1] {
                cursor = cursor.ensure_dir(segment);
            }

            let name = segments[segments.len() - 1];
            match entry.kind {
                EntryKind::Directory => {
                    cursor.ensure_dir(name);
                }
                EntryKind::File => cursor.insert_file(name, entry.size, entry.content),
            }
        }

        Ok(Self {
            root,
            current_dir: "/".to_string(),
        })
    }

    /// The current directory as a normalized absolute path (`/` or `/a/b`).
    pub fn current_dir(&self) -> &str {
        &self.current_dir
    }

    /// Compute and walk an absolute path from a base directory and a target
    /// spec.
    ///
    /// The target may be empty (meaning: root, mirroring a bare `cd`), `/`,
    /// `.`, `..` (clamped at root), or a relative/absolute path. Any missing
    /// segment yields [`VfsError::NotFound`] carrying the original target
    /// spec — callers rely on that exact payload for their messages.
    pub fn resolve(&self, base: &str, target: &str) -> Result<(String, &Node), VfsError> {
        let segments = if target.is_empty() {
            Vec::new()
        } else {
            normalize_segments(base, target)
        };

        let mut node = &self.root;
        for segment in &segments {
            node = match node.child(segment) {
                Some(child) => child,
                None => return Err(VfsError::NotFound(target.to_string())),
            };
        }

        Ok((join_segments(&segments), node))
    }

    /// Move the cursor. On any error the cursor is left unchanged.
    pub fn change_directory(&mut self, target: &str) -> Result<(), VfsError> {
        let (path, kind) = {
            let (path, node) = self.resolve(&self.current_dir, target)?;
            (path, node.kind())
        };
        if kind != NodeKind::Directory {
            return Err(VfsError::NotDirectory(target.to_string()));
        }
        self.current_dir = path;
        Ok(())
    }

    /// Immediate child names of a directory, in archive-declaration order.
    ///
    /// `None` lists the current directory. The order is the insertion order
    /// of the children map — never sorted.
    pub fn list(&self, path: Option<&str>) -> Result<Vec<String>, VfsError> {
        let target = path.unwrap_or(".");
        let (_, node) = self.resolve(&self.current_dir, target)?;
        match node.kind() {
            NodeKind::Directory => Ok(node.child_names().map(String::from).collect()),
            NodeKind::File => Err(VfsError::NotDirectory(target.to_string())),
        }
    }

    /// A file's lines in reverse order, resolved against the cursor.
    ///
    /// Exactly one trailing newline is trimmed per line, so output lines
    /// never carry an embedded `\n`.
    pub fn read_file_reversed(&self, target: &str) -> Result<Vec<String>, VfsError> {
        let node = self.expect_file(target)?;
        let text = String::from_utf8_lossy(node.content());
        let mut lines: Vec<String> = text.lines().map(String::from).collect();
        lines.reverse();
        Ok(lines)
    }

    /// A file's content as text, resolved against the cursor.
    pub fn read_file(&self, target: &str) -> Result<String, VfsError> {
        let node = self.expect_file(target)?;
        Ok(String::from_utf8_lossy(node.content()).into_owned())
    }

    fn expect_file(&self, target: &str) -> Result<&Node, VfsError> {
        let (_, node) = self.resolve(&self.current_dir, target)?;
        match node.kind() {
            NodeKind::File => Ok(node),
            NodeKind::Directory => Err(VfsError::IsDirectory(target.to_string())),
        }
    }
}

/// Resolve `.` and `..` segment-by-segment against a base path. `..` above
/// root stays at root.
fn normalize_segments(base: &str, target: &str) -> Vec<String> {
    let mut segments: Vec<&str> = Vec::new();
    let sources = if target.starts_with('/') {
        ["", target]
    } else {
        [base, target]
    };
    for part in sources {
        for segment in part.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }
    }
    segments.into_iter().map(String::from).collect()
}

fn join_segments(segments: &[String]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}
