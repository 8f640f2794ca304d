//! cat — Read and output file contents.

use async_trait::async_trait;

use crate::result::ExecResult;
use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::VfsError;

/// Cat tool: read and output file contents.
pub struct Cat;

#[async_trait]
impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Read and output file contents")
            .param(ParamSchema::required("path", "File path(s) to read"))
            .param(ParamSchema::optional("number", "Number output lines (-n)"))
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let number_lines = args.has_flag("number") || args.has_flag("n");

        if args.positional.is_empty() {
            return ExecResult::failure(1, "cat: missing path argument");
        }

        let mut all_content = String::new();
        let mut line_num = 1;

        for (i, path) in args.positional.iter().enumerate() {
            match ctx.tree.read_file(path) {
                Ok(content) => {
                    if number_lines {
                        for line in content.lines() {
                            if !all_content.is_empty() {
                                all_content.push('\n');
                            }
                            all_content.push_str(&format!("{:6}\t{}", line_num, line));
                            line_num += 1;
                        }
                    } else {
                        if i > 0 && !all_content.is_empty() {
                            all_content.push('\n');
                        }
                        all_content.push_str(&content);
                    }
                }
                Err(VfsError::NotFound(t)) => {
                    return ExecResult::failure(1, format!("cat: {t}: No such file"));
                }
                Err(VfsError::IsDirectory(t)) => {
                    return ExecResult::failure(1, format!("cat: {t}: Is a directory"));
                }
                Err(other) => return ExecResult::failure(1, format!("cat: {other}")),
            }
        }

        ExecResult::success(all_content)
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
                path: "test.txt".to_string(),
                kind: EntryKind::File,
                size: 11,
                content: b"hello world".to_vec(),
            },
            ArchiveEntry {
                path: "dir/nested.txt".to_string(),
                kind: EntryKind::File,
                size: 14,
                content: b"nested content".to_vec(),
            },
            ArchiveEntry {
                path: "lines.txt".to_string(),
                kind: EntryKind::File,
                size: 17,
                content: b"line1\nline2\nline3".to_vec(),
            },
        ];
        ExecContext::new(VirtualTree::build(entries).unwrap())
    }

    #[tokio::test]
    async fn test_cat_file() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("test.txt".to_string());

        let result = Cat.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "hello world");
    }

    #[tokio::test]
    async fn test_cat_nested() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("dir/nested.txt".to_string());

        let result = Cat.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "nested content");
    }

    #[tokio::test]
    async fn test_cat_not_found() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("nonexistent.txt".to_string());

        let result = Cat.execute(args, &mut ctx).await;
        assert!(!result.ok());
        assert!(result.err.contains("nonexistent"));
    }

    #[tokio::test]
    async fn test_cat_directory_fails() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("dir".to_string());

        let result = Cat.execute(args, &mut ctx).await;
        assert!(!result.ok());
        assert!(result.err.contains("Is a directory"));
    }

    #[tokio::test]
    async fn test_cat_no_args() {
        let mut ctx = make_ctx();

        let result = Cat.execute(ToolArgs::new(), &mut ctx).await;
        assert!(!result.ok());
        assert!(result.err.contains("missing"));
    }

    #[tokio::test]
    async fn test_cat_n_line_numbers() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("lines.txt".to_string());
        args.flags.insert("n".to_string());

        let result = Cat.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert!(result.out.contains("1\tline1"));
        assert!(result.out.contains("2\tline2"));
        assert!(result.out.contains("3\tline3"));
    }

    #[tokio::test]
    async fn test_cat_n_multiple_files_continuous_numbering() {
        let mut ctx = make_ctx();
        let mut args = ToolArgs::new();
        args.positional.push("lines.txt".to_string());
        args.positional.push("test.txt".to_string());
        args.flags.insert("n".to_string());

        let result = Cat.execute(args, &mut ctx).await;
        assert!(result.ok());
        // lines.txt has 3 lines, so test.txt starts at line 4
        assert!(result.out.contains("4\thello world"));
    }
}
