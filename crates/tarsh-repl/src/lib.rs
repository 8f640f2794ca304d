//! tarsh REPL — interactive shell over a tar archive.
//!
//! The REPL handles:
//! - Shell-style meta-commands: `help`, `exit` (also `quit`)
//! - Command execution via the Kernel
//! - The optional session log
//! - Command history via rustyline

pub mod session_log;

use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::Runtime;

use tarsh_kernel::{ExecResult, Kernel, KernelConfig};

use session_log::SessionLog;

/// Result from meta-command handling.
#[derive(Debug)]
enum MetaResult {
    /// Continue with optional output
    Continue(Option<String>),
    /// Exit the REPL (caller should save history and exit)
    Exit,
}

/// REPL configuration and state.
pub struct Repl {
    kernel: Kernel,
    runtime: Runtime,
    log: Option<SessionLog>,
}

impl Repl {
    /// Create a new REPL over the given archive.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let kernel = Kernel::new(config).context("failed to create kernel")?;
        Self::from_kernel(kernel)
    }

    /// Create a new REPL over an already-built kernel.
    pub fn from_kernel(kernel: Kernel) -> Result<Self> {
        let runtime = Runtime::new().context("failed to create tokio runtime")?;
        Ok(Self {
            kernel,
            runtime,
            log: None,
        })
    }

    /// Record every executed command into the given session log.
    pub fn with_log(mut self, log: SessionLog) -> Self {
        self.log = Some(log);
        self
    }

    /// The session's current directory, for the prompt.
    pub fn cwd(&self) -> &str {
        self.kernel.cwd()
    }

    /// Execute one command line through the kernel, recording it in the
    /// session log when one is attached.
    pub fn execute(&mut self, line: &str) -> ExecResult {
        let result = self.runtime.block_on(self.kernel.execute(line));
        if let Some(log) = self.log.as_mut() {
            if let Err(e) = log.record(line, &result) {
                tracing::warn!("failed to write session log: {e}");
            }
        }
        result
    }

    /// Process a single line of input.
    ///
    /// Returns `Ok(None)` for empty input, `Ok(Some(output))` for output to
    /// display, or an `__REPL_EXIT__` error to signal the REPL should exit.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        if let Some(meta) = self.try_meta_command(trimmed) {
            return match meta {
                MetaResult::Continue(output) => Ok(output),
                MetaResult::Exit => Err(anyhow::anyhow!("__REPL_EXIT__")),
            };
        }

        let result = self.execute(trimmed);
        if result.ok() {
            if result.out.is_empty() {
                Ok(None)
            } else {
                Ok(Some(result.out))
            }
        } else {
            Ok(Some(result.err))
        }
    }

    /// Try to handle a shell-style meta-command.
    /// Returns Some(result) if it was recognized, None otherwise.
    fn try_meta_command(&mut self, cmd: &str) -> Option<MetaResult> {
        let command = cmd.split_whitespace().next().unwrap_or("");
        match command {
            "exit" | "quit" => Some(MetaResult::Exit),
            "help" => Some(MetaResult::Continue(Some(self.help_text()))),
            _ => None,
        }
    }

    /// Render help from the registered tool schemas plus the meta-commands.
    fn help_text(&self) -> String {
        let mut out = String::from("tarsh — shell emulator over a tar archive\n\nCommands:\n");
        for schema in self.kernel.tool_schemas() {
            let params: String = schema
                .params
                .iter()
                .map(|p| {
                    if p.required {
                        format!(" <{}>", p.name)
                    } else {
                        format!(" [{}]", p.name)
                    }
                })
                .collect();
            out.push_str(&format!(
                "  {}{}\n      {}\n",
                schema.name, params, schema.description
            ));
        }
        out.push_str("  help\n      Show this help\n");
        out.push_str("  exit\n      Leave the shell\n");
        out
    }
}

/// Save REPL history to disk.
fn save_history(rl: &mut Editor<(), DefaultHistory>, history_path: &Option<PathBuf>) {
    if let Some(path) = history_path {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("failed to create history directory: {}", e);
            }
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("failed to save history: {}", e);
        }
    }
}

/// Run the interactive loop until `exit` or end of input.
pub fn run(mut repl: Repl) -> Result<()> {
    println!("tarsh v{}", env!("CARGO_PKG_VERSION"));
    println!("Type help for commands, exit to quit.");

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("failed to create editor")?;

    // Load history if it exists
    let history_path = directories::BaseDirs::new()
        .map(|b| b.data_dir().join("tarsh").join("history.txt"));
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            // Only log if it's not a "file not found" error (expected on first run)
            let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
            if !is_not_found {
                tracing::warn!("failed to load history: {}", e);
            }
        }
    }

    println!();

    loop {
        let prompt = format!("tarsh:{}> ", repl.cwd());

        match rl.readline(&prompt) {
            Ok(line) => {
                if let Err(e) = rl.add_history_entry(line.as_str()) {
                    tracing::warn!("failed to add history entry: {}", e);
                }

                match repl.process_line(&line) {
                    Ok(Some(output)) => println!("{}", output),
                    Ok(None) => {}
                    Err(e) if e.to_string() == "__REPL_EXIT__" => {
                        println!("Exiting...");
                        save_history(&mut rl, &history_path);
                        return Ok(());
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    save_history(&mut rl, &history_path);

    Ok(())
}
