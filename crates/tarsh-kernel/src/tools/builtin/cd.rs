//! cd — Change current directory.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

/// Cd tool: move the current-directory cursor.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current directory").param(ParamSchema::optional(
            "path",
            "Directory to change to (defaults to /)",
        ))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let target = args.get_positional(0).unwrap_or("/");

        match ctx.tree.change_directory(target) {
            Ok(()) => ExecResult::success(""),
            Err(VfsError::NotFound(t)) => {
                ExecResult::failure(1, format!("cd: no such file or directory: {t}"))
            }
            Err(VfsError::NotDirectory(t)) => {
                ExecResult::failure(1, format!("cd: {t}: Not a directory"))
            }
            Err(other) => ExecResult::failure(1, format!("cd: {other}")),
        }
    }
}
