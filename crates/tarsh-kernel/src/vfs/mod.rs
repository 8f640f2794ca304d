//! Virtual filesystem for tarsh.
//!
//! The VFS is a read-only in-memory tree built once from the archive's flat
//! entry list:
//!
//! ```text
//! /                      # root, always a directory
//! ├── file1.txt          # file node, owns its content bytes
//! └── dir1/              # directory node
//!     └── file2.txt
//! ```
//!
//! The tree is immutable after construction. The only mutable state is the
//! current-directory cursor, owned by the [`VirtualTree`] instance so that
//! independent sessions never share it.

mod node;
mod tree;

pub use node::{Node, NodeKind};
pub use tree::VirtualTree;

use thiserror::Error;

/// Query-time errors. All recoverable: the caller reports them and the
/// session continues with the tree and cursor unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// The target does not exist. Carries the original target spec as
    /// typed by the user, never the fully-qualified path.
    #[error("no such file or directory: {0}")]
    NotFound(String),
    /// The target exists but is a file where a directory was required.
    #[error("not a directory: {0}")]
    NotDirectory(String),
    /// The target exists but is a directory where a file was required.
    #[error("is a directory: {0}")]
    IsDirectory(String),
}
