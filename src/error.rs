use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can go wrong while running a single catalog command.
/// Workers count these and move on.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("cannot split `{command}` into arguments")]
    Parse { command: String },

    #[error("failed to spawn `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    ExitStatus { command: String, status: ExitStatus },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("thread count must be at least 1")]
    NoThreads,

    #[error("command catalog is empty")]
    EmptyCatalog,

    #[error("minimum iterations ({min}) is greater than maximum iterations ({max})")]
    InvertedBounds { min: u64, max: u64 },
}

/// Why a run could not get all of its workers going.
#[derive(Debug, Error)]
pub enum BlastError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to start worker {worker}")]
    SpawnWorker {
        worker: usize,
        #[source]
        source: io::Error,
    },
}
