use std::process::{Command, Stdio};

use clap::ValueEnum;

use crate::error::InvocationError;

/// How a catalog entry becomes a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Hand the whole line to the system shell.
    Shell,
    /// Split into words and spawn the program directly, no shell involved.
    Direct,
}

impl Mode {
    pub fn invoker(self) -> Box<dyn Invoker> {
        match self {
            Mode::Shell => Box::new(ShellInvoker),
            Mode::Direct => Box::new(DirectInvoker),
        }
    }
}

/// Runs one command to completion. Implementations must be shareable across
/// worker threads.
pub trait Invoker: Send + Sync {
    fn invoke(&self, command: &str) -> Result<(), InvocationError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShellInvoker;

#[derive(Debug, Default, Clone, Copy)]
pub struct DirectInvoker;

impl Invoker for ShellInvoker {
    fn invoke(&self, command: &str) -> Result<(), InvocationError> {
        let mut process = shell_command();
        process.arg(command);
        wait_silently(process, command)
    }
}

impl Invoker for DirectInvoker {
    fn invoke(&self, command: &str) -> Result<(), InvocationError> {
        let argv = tokenize(command)?;
        let mut process = Command::new(&argv[0]);
        process.args(&argv[1..]);
        wait_silently(process, command)
    }
}

/// Splits a command line with POSIX shell-word rules.
///
/// Fails on unbalanced quotes and on lines with no words at all, so the
/// returned vector always has a program name at index 0.
pub fn tokenize(command: &str) -> Result<Vec<String>, InvocationError> {
    match shlex::split(command) {
        Some(argv) if !argv.is_empty() => Ok(argv),
        _ => Err(InvocationError::Parse {
            command: command.to_string(),
        }),
    }
}

#[cfg(unix)]
fn shell_command() -> Command {
    let mut process = Command::new("/bin/sh");
    process.arg("-c");
    process
}

#[cfg(windows)]
fn shell_command() -> Command {
    let mut process = Command::new("cmd");
    process.arg("/C");
    process
}

fn wait_silently(mut process: Command, command: &str) -> Result<(), InvocationError> {
    let status = process
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| InvocationError::Spawn {
            command: command.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(InvocationError::ExitStatus {
            command: command.to_string(),
            status,
        })
    }
}
