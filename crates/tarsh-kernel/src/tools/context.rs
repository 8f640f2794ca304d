//! Execution context for tools.

use crate::vfs::VirtualTree;

/// Execution context passed to tools.
///
/// Owns the virtual tree, and with it the current-directory cursor — one
/// context is one shell session, so independent sessions never share
/// navigation state.
pub struct ExecContext {
    /// The archive-backed filesystem.
    pub tree: VirtualTree,
}

impl ExecContext {
    /// Create a context over a built tree.
    pub fn new(tree: VirtualTree) -> Self {
        Self { tree }
    }
}
