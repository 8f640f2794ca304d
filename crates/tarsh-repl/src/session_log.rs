//! Session log.
//!
//! One JSON record per executed command, appended as a line and flushed
//! immediately so the log survives an abrupt exit. The core never logs;
//! recording happens here, at the dispatcher level.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use tarsh_kernel::ExecResult;

/// One logged command.
#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    time: DateTime<Utc>,
    command: &'a str,
    code: i64,
    output: &'a str,
}

/// JSON-lines session log.
pub struct SessionLog {
    file: File,
}

impl SessionLog {
    /// Create (truncating) the log file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create session log {}", path.display()))?;
        Ok(Self { file })
    }

    /// Append one command record.
    pub fn record(&mut self, command: &str, result: &ExecResult) -> Result<()> {
        let record = LogRecord {
            time: Utc::now(),
            command,
            code: result.code,
            output: if result.ok() { &result.out } else { &result.err },
        };
        serde_json::to_writer(&mut self.file, &record)?;
        self.file.write_all(b"\n")?;
        self.file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.log");

        let mut log = SessionLog::create(&path).unwrap();
        log.record("ls", &ExecResult::success("file1.txt\ndir1"))
            .unwrap();
        log.record(
            "cd nonexistent",
            &ExecResult::failure(1, "cd: no such file or directory: nonexistent"),
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["command"], "ls");
        assert_eq!(first["code"], 0);
        assert_eq!(first["output"], "file1.txt\ndir1");
        assert!(first["time"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["code"], 1);
        assert_eq!(
            second["output"],
            "cd: no such file or directory: nonexistent"
        );
    }
}
