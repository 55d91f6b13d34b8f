use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::error::{BlastError, ConfigError};
use crate::invoker::Invoker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlastConfig {
    pub threads: usize,
    pub min_iterations: u64,
    pub max_iterations: u64,
    /// Fixed seed for reproducible runs; worker `i` uses `seed + i`.
    pub seed: Option<u64>,
}

impl BlastConfig {
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.min_iterations > self.max_iterations {
            return Err(ConfigError::InvertedBounds {
                min: self.min_iterations,
                max: self.max_iterations,
            });
        }
        Ok(())
    }

    fn worker_rng(&self, worker: usize) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(worker as u64)),
            None => StdRng::from_os_rng(),
        }
    }
}

/// What one worker did before it joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker: usize,
    pub planned: u64,
    pub invoked: u64,
    pub failures: u64,
}

/// Starts `config.threads` workers, each running a random number of random
/// catalog commands, and blocks until all of them have finished.
///
/// Command failures never escape a worker. An invalid configuration is
/// reported before any thread is spawned. If the OS refuses a thread, the
/// workers already running are joined before the error is returned.
pub fn stress_commands(
    config: &BlastConfig,
    catalog: Catalog,
    invoker: Arc<dyn Invoker>,
) -> Result<Vec<WorkerReport>, BlastError> {
    config.validate(&catalog)?;

    let mut handles = Vec::with_capacity(config.threads);

    for worker in 0..config.threads {
        let catalog = catalog.clone();
        let invoker = Arc::clone(&invoker);
        let rng = config.worker_rng(worker);
        let bounds = (config.min_iterations, config.max_iterations);

        let spawned = thread::Builder::new()
            .name(format!("worker-{}", worker))
            .spawn(move || run_worker(worker, rng, bounds, &catalog, invoker.as_ref()));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(source) => {
                error!("[Worker {}] could not be started: {}", worker, source);
                join_workers(handles);
                return Err(BlastError::SpawnWorker { worker, source });
            }
        }
    }

    Ok(join_workers(handles))
}

fn join_workers(handles: Vec<JoinHandle<WorkerReport>>) -> Vec<WorkerReport> {
    let mut reports = Vec::with_capacity(handles.len());
    for (worker, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(report) => reports.push(report),
            Err(_) => error!("[Worker {}] panicked before finishing", worker),
        }
    }
    reports
}

fn run_worker(
    worker: usize,
    mut rng: StdRng,
    (min, max): (u64, u64),
    catalog: &Catalog,
    invoker: &dyn Invoker,
) -> WorkerReport {
    let planned = rng.random_range(min..=max);
    debug!("[Worker {}] Running {} commands", worker, planned);

    let mut invoked = 0;
    let mut failures = 0;
    for _ in 0..planned {
        let command = catalog.pick(&mut rng);
        invoked += 1;
        if let Err(e) = invoker.invoke(command) {
            failures += 1;
            trace!("[Worker {}] {}", worker, e);
        }
    }

    debug!(
        "[Worker {}] Finished, {} of {} commands failed",
        worker, failures, planned
    );

    WorkerReport {
        worker,
        planned,
        invoked,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvocationError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl Invoker for Recorder {
        fn invoke(&self, command: &str) -> Result<(), InvocationError> {
            self.calls.lock().unwrap().push(command.to_string());
            Ok(())
        }
    }

    fn config(threads: usize, min: u64, max: u64) -> BlastConfig {
        BlastConfig {
            threads,
            min_iterations: min,
            max_iterations: max,
            seed: Some(42),
        }
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let catalog = Catalog::basic();
        assert_eq!(config(0, 1, 2).validate(&catalog), Err(ConfigError::NoThreads));
        assert_eq!(
            config(1, 5, 2).validate(&catalog),
            Err(ConfigError::InvertedBounds { min: 5, max: 2 })
        );
        assert_eq!(
            config(1, 1, 2).validate(&Catalog::new(Vec::<String>::new())),
            Err(ConfigError::EmptyCatalog)
        );
        assert!(config(1, 0, 0).validate(&catalog).is_ok());
    }

    #[test]
    fn invalid_config_invokes_nothing() {
        let recorder = Arc::new(Recorder::default());
        let result = stress_commands(&config(2, 9, 1), Catalog::basic(), recorder.clone());
        assert!(matches!(
            result,
            Err(BlastError::Config(ConfigError::InvertedBounds { min: 9, max: 1 }))
        ));
        assert!(recorder.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn zero_iterations_finishes_immediately() {
        let recorder = Arc::new(Recorder::default());
        let reports =
            stress_commands(&config(3, 0, 0), Catalog::basic(), recorder.clone()).unwrap();
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.planned == 0 && r.invoked == 0));
        assert!(recorder.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn same_seed_same_plan() {
        let catalog = Catalog::extended();
        let cfg = config(1, 10, 50);

        let first = Arc::new(Recorder::default());
        let a = stress_commands(&cfg, catalog.clone(), first.clone()).unwrap();
        let second = Arc::new(Recorder::default());
        let b = stress_commands(&cfg, catalog, second.clone()).unwrap();

        assert_eq!(a, b);
        assert_eq!(*first.calls.lock().unwrap(), *second.calls.lock().unwrap());
    }

    #[test]
    fn workers_get_distinct_streams() {
        let cfg = config(2, 1, 1_000_000);
        let a = cfg.worker_rng(0).random_range(0..u64::MAX);
        let b = cfg.worker_rng(1).random_range(0..u64::MAX);
        assert_ne!(a, b);
    }
}
