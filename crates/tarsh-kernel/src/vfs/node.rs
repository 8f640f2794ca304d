//! Tree nodes.

use indexmap::IndexMap;

/// Kind of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// One element of the constructed tree.
///
/// Every node is exclusively owned by its parent's children map; the tree is
/// acyclic with no shared ownership. Children preserve insertion order, which
/// is the archive-declaration order listings must report.
#[derive(Debug, Clone)]
pub struct Node {
    name: String,
    kind: NodeKind,
    children: IndexMap<String, Node>,
    content: Vec<u8>,
    size: u64,
}

impl Node {
    pub(crate) fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory,
            children: IndexMap::new(),
            content: Vec::new(),
            size: 0,
        }
    }

    pub(crate) fn file(name: impl Into<String>, size: u64, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
            children: IndexMap::new(),
            content,
            size,
        }
    }

    /// Name of this node (path segment, `/` for the root).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Size in bytes (0 for directories).
    pub fn size(&self) -> u64 {
        self.size
    }

    /// File content (empty for directories). Re-readable any number of times.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Immediate child names in insertion order.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    /// Walk to the named child directory, creating it if missing.
    ///
    /// A file already occupying the name is replaced in place: the directory
    /// form is authoritative, and replacing through the entry keeps the
    /// child's original position in the listing order.
    pub(crate) fn ensure_dir(&mut self, name: &str) -> &mut Node {
        let child = self
            .children
            .entry(name.to_string())
            .or_insert_with(|| Node::directory(name));
        if child.kind == NodeKind::File {
            tracing::warn!(name = %name, "directory entry shadows existing file; directory wins");
            *child = Node::directory(name);
        }
        child
    }

    /// Attach a file child. An existing directory under the same name wins;
    /// an existing file is overwritten (last archive entry wins).
    pub(crate) fn insert_file(&mut self, name: &str, size: u64, content: Vec<u8>) {
        match self.children.get_mut(name) {
            Some(existing) if existing.is_dir() => {
                tracing::warn!(name = %name, "file entry collides with existing directory; keeping directory");
            }
            _ => {
                self.children
                    .insert(name.to_string(), Node::file(name, size, content));
            }
        }
    }
}
