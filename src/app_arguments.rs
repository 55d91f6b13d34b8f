use clap::Parser;

use crate::catalog::Catalog;
use crate::command_stress::BlastConfig;
use crate::invoker::Mode;
use crate::profile::{Profile, DEFAULT_THREADS};

/// Floods the host with randomly chosen shell commands from several threads.
#[derive(Debug, Parser)]
#[command(name = "command-blaster", version)]
pub struct AppArguments {
    /// Preset for catalog, iteration bounds and execution mode
    #[arg(long, value_enum, default_value_t = Profile::default())]
    pub profile: Profile,

    /// Number of worker threads
    #[arg(short, long, default_value_t = DEFAULT_THREADS)]
    pub threads: usize,

    /// Lowest number of commands a worker runs (profile default when omitted)
    #[arg(long)]
    pub min_iterations: Option<u64>,

    /// Highest number of commands a worker runs (profile default when omitted)
    #[arg(long)]
    pub max_iterations: Option<u64>,

    /// Execution mode (profile default when omitted)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Replace the catalog with these commands, repeat for several
    #[arg(short = 'c', long = "command", value_name = "CMD")]
    pub commands: Vec<String>,

    /// Seed for reproducible command selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log every failed command
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a run needs, with profile defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub config: BlastConfig,
    pub catalog: Catalog,
    pub mode: Mode,
}

impl AppArguments {
    pub fn into_plan(self) -> RunPlan {
        let (default_min, default_max) = self.profile.iterations();

        let catalog = if self.commands.is_empty() {
            self.profile.catalog()
        } else {
            Catalog::new(self.commands)
        };

        RunPlan {
            config: BlastConfig {
                threads: self.threads,
                min_iterations: self.min_iterations.unwrap_or(default_min),
                max_iterations: self.max_iterations.unwrap_or(default_max),
                seed: self.seed,
            },
            catalog,
            mode: self.mode.unwrap_or_else(|| self.profile.mode()),
        }
    }
}
