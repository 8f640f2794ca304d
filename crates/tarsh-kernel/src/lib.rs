//! tarsh-kernel: the core of tarsh.
//!
//! This crate provides:
//!
//! - **Archive**: tar (optionally gzip) decoding into a flat entry list
//! - **VFS**: the read-only virtual tree with path resolution and the
//!   current-directory cursor
//! - **Tools**: Tool trait, registry, and builtin commands
//! - **Dispatch**: command-line tokenizing into tool invocations
//! - **Kernel**: the facade a REPL or script runner drives

pub mod archive;
pub mod dispatch;
pub mod kernel;
pub mod result;
pub mod tools;
pub mod vfs;

pub use archive::{ArchiveEntry, ArchiveError, EntryKind};
pub use kernel::{Kernel, KernelConfig};
pub use result::ExecResult;
pub use vfs::{VfsError, VirtualTree};
