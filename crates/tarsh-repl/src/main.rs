//! tarsh CLI entry point.
//!
//! Usage:
//!   tarsh <archive.tar>                 # Interactive shell
//!   tarsh <archive.tar> --log=<path>    # ... with a session log
//!   tarsh <archive.tar> -c <command>    # Execute command and exit

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tarsh_repl::session_log::SessionLog;
use tarsh_repl::Repl;

use tarsh_kernel::KernelConfig;

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    let mut archive: Option<PathBuf> = None;
    let mut log_path: Option<PathBuf> = None;
    let mut command: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(ExitCode::SUCCESS);
            }
            "--version" | "-V" => {
                println!("tarsh {}", env!("CARGO_PKG_VERSION"));
                return Ok(ExitCode::SUCCESS);
            }
            "-c" => {
                i += 1;
                let cmd = args.get(i).context("-c requires a command argument")?;
                command = Some(cmd.clone());
            }
            arg if arg.starts_with("--log=") => {
                log_path = Some(PathBuf::from(&arg["--log=".len()..]));
            }
            arg if !arg.starts_with('-') && archive.is_none() => {
                archive = Some(PathBuf::from(arg));
            }
            unknown => {
                eprintln!("Unknown option: {unknown}");
                eprintln!("Run 'tarsh --help' for usage.");
                return Ok(ExitCode::FAILURE);
            }
        }
        i += 1;
    }

    let archive = archive.context("missing archive path (run 'tarsh --help' for usage)")?;

    let mut repl = Repl::new(KernelConfig::new(archive))?;
    if let Some(path) = log_path {
        repl = repl.with_log(SessionLog::create(&path)?);
    }

    match command {
        Some(cmd) => run_command(&mut repl, &cmd),
        None => {
            tarsh_repl::run(repl)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Execute a command string and exit with its code.
fn run_command(repl: &mut Repl, cmd: &str) -> Result<ExitCode> {
    let result = repl.execute(cmd);
    if !result.out.is_empty() {
        println!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err);
    }
    if result.ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(result.code as u8))
    }
}

fn print_help() {
    println!(
        r#"tarsh v{} — shell emulator over a tar archive

Usage:
  tarsh <archive>              Interactive shell over the archive
  tarsh <archive> -c <command> Execute command and exit

Options:
  --log=<path>                 Record every command to a JSON-lines session log
  -c <command>                 Execute command string and exit
  -h, --help                   Show this help
  -V, --version                Show version

The archive may be a plain tar file or gzip-compressed (.tar.gz, .tgz).
The filesystem is read-only; available commands are ls, cd, pwd, cat, tac,
whoami, plus help and exit.

Examples:
  tarsh image.tar              # Browse image.tar interactively
  tarsh image.tar -c 'ls /'    # One-shot listing
  tarsh image.tar --log=session.log
"#,
        env!("CARGO_PKG_VERSION")
    );
}
