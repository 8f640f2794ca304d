//! The Kernel — executes tarsh commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Kernel                     │
//! │  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ ToolRegistry │  │ ExecContext          │  │
//! │  │ cat cd ls …  │  │  └─ VirtualTree      │  │
//! │  └──────────────┘  │      └─ current_dir  │  │
//! │                    └──────────────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! One kernel is one session: it owns the tree built from the archive and
//! the cursor inside it. Commands run strictly one at a time.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::archive::{self, ArchiveEntry};
use crate::dispatch;
use crate::result::ExecResult;
use crate::tools::{register_builtins, ExecContext, ToolRegistry, ToolSchema};
use crate::vfs::VirtualTree;

/// Kernel configuration.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Path of the archive backing the filesystem.
    pub archive: PathBuf,
}

impl KernelConfig {
    /// Configure a kernel over the given archive file.
    pub fn new(archive: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
        }
    }
}

/// The kernel: tool registry plus one session's execution context.
pub struct Kernel {
    tools: ToolRegistry,
    ctx: ExecContext,
}

impl Kernel {
    /// Create a kernel from an archive on disk (`.tar`, `.tar.gz`, `.tgz`).
    pub fn new(config: KernelConfig) -> Result<Self> {
        let entries = archive::load_path(&config.archive)
            .with_context(|| format!("failed to load archive {}", config.archive.display()))?;
        Self::assemble(entries)
    }

    /// Create a kernel from an uncompressed tar byte stream.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let entries = archive::load(reader).context("failed to load archive")?;
        Self::assemble(entries)
    }

    fn assemble(entries: Vec<ArchiveEntry>) -> Result<Self> {
        let tree = VirtualTree::build(entries)?;
        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);
        Ok(Self {
            tools,
            ctx: ExecContext::new(tree),
        })
    }

    /// The session's current directory.
    pub fn cwd(&self) -> &str {
        self.ctx.tree.current_dir()
    }

    /// Schemas of all registered tools (for help output).
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.tools.schemas()
    }

    /// Execute one command line.
    ///
    /// An empty line is a successful no-op; an unknown command fails with
    /// code 127.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn execute(&mut self, line: &str) -> ExecResult {
        let Some((name, args)) = dispatch::parse(line) else {
            return ExecResult::success("");
        };

        match self.tools.get(&name) {
            Some(tool) => tool.execute(args, &mut self.ctx).await,
            None => ExecResult::failure(127, format!("tarsh: command not found: {name}")),
        }
    }
}
