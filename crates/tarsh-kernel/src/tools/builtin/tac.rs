//! tac — Print file lines in reverse order.
//!
//! Each file's output is preceded by a `--- <path> ---` header line.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

/// Tac tool: print a file last line first.
pub struct Tac;

#[async_trait]
impl Tool for Tac {
    fn name(&self) -> &str {
        "tac"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("tac", "Print file lines in reverse order")
            .param(ParamSchema::required("path", "File(s) to print reversed"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.positional.is_empty() {
            return ExecResult::failure(1, "tac: missing file operand");
        }

        let mut blocks = Vec::new();
        for path in &args.positional {
            match ctx.tree.read_file_reversed(path) {
                Ok(lines) => {
                    blocks.push(format!("--- {path} ---\n{}", lines.join("\n")));
                }
                Err(VfsError::NotFound(t)) => {
                    return ExecResult::failure(1, format!("tac: {t}: No such file"));
                }
                Err(VfsError::IsDirectory(t)) => {
                    return ExecResult::failure(1, format!("tac: {t}: Is a directory"));
                }
                Err(other) => return ExecResult::failure(1, format!("tac: {other}")),
            }
        }

        ExecResult::success(blocks.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::{ArchiveEntry, EntryKind};
    use crate::vfs::VirtualTree;

    fn make_ctx() -> ExecContext {
        let entries = vec![
            ArchiveEntry {
                path: "file1.txt".to_string(),
                kind: EntryKind::File,
                size: 14,
                content: b"Hello, World!\n".to_vec(),
            },
            ArchiveEntry {
                path: "dir1".to_string(),
                kind: EntryKind::Directory,
                size: 0,
                content: Vec::new(),
            },
            ArchiveEntry {
                path: "poem.txt".to_string(),
                kind: EntryKind::File,
                size: 14,
                content: b"one\ntwo\nthree\n".to_vec(),
            },
        ];
        ExecContext::new(VirtualTree::build(entries).unwrap())
    }

    #[tokio::test]
    async fn test_tac_single_line_file() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("file1.txt".to_string());

        let result = Tac.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "--- file1.txt ---\nHello, World!");
    }

    #[tokio::test]
    async fn test_tac_reverses_lines() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("poem.txt".to_string());

        let result = Tac.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "--- poem.txt ---\nthree\ntwo\none");
    }

    #[tokio::test]
    async fn test_tac_multiple_files() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("file1.txt".to_string());
        args.positional.push("poem.txt".to_string());

        let result = Tac.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert!(result.out.contains("--- file1.txt ---"));
        assert!(result.out.contains("--- poem.txt ---"));
        assert!(result.out.contains("three\ntwo\none"));
    }

    #[tokio::test]
    async fn test_tac_directory_fails() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("dir1".to_string());

        let result = Tac.execute(args, &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "tac: dir1: Is a directory");
    }

    #[tokio::test]
    async fn test_tac_nonexistent_exact_message() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("nonexistent.txt".to_string());

        let result = Tac.execute(args, &mut ctx).await;
        assert!(!result.ok());
        assert_eq!(result.err, "tac: nonexistent.txt: No such file");
    }

    #[tokio::test]
    async fn test_tac_no_args() {
        let mut ctx = make_ctx();

        let result = Tac.execute(ToolArgs::new(), &mut ctx).await;
        assert!(!result.ok());
        assert!(result.err.contains("missing"));
    }
}
