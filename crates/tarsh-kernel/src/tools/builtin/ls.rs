//! ls — List directory contents.
//!
//! Entries come back in archive-declaration order, not sorted: the order in
//! which the archive first names an entry is part of the listing contract.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

/// Ls tool: list directory contents.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents").param(ParamSchema::optional(
            "path",
            "Directory to list (defaults to the current directory)",
        ))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let path = args.get_positional(0);

        match ctx.tree.list(path) {
            Ok(names) => ExecResult::success(names.join("\n")),
            Err(VfsError::NotFound(t)) => {
                ExecResult::failure(1, format!("ls: {t}: no such file or directory"))
            }
            Err(VfsError::NotDirectory(t)) => {
                ExecResult::failure(1, format!("ls: {t}: Not a directory"))
            }
            Err(other) => ExecResult::failure(1, format!("ls: {other}")),
        }
    }
}
