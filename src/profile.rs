use clap::ValueEnum;

use crate::catalog::Catalog;
use crate::invoker::Mode;

pub const DEFAULT_THREADS: usize = 10;

/// The two load shapes the tool ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Profile {
    /// Ten everyday commands through the shell, 1k-10k per worker.
    Basic,
    /// Forty diagnostic commands spawned directly, 1k-30k per worker.
    #[default]
    Extended,
}

impl Profile {
    pub fn catalog(self) -> Catalog {
        match self {
            Profile::Basic => Catalog::basic(),
            Profile::Extended => Catalog::extended(),
        }
    }

    pub fn iterations(self) -> (u64, u64) {
        match self {
            Profile::Basic => (1_000, 10_000),
            Profile::Extended => (1_000, 30_000),
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Profile::Basic => Mode::Shell,
            Profile::Extended => Mode::Direct,
        }
    }
}
