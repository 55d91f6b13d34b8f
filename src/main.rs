use std::sync::Arc;

use clap::Parser;
use log::{debug, info, warn, LevelFilter};

use command_blaster::app_arguments::AppArguments;
use command_blaster::{stress_commands, Invoker};

fn main() -> anyhow::Result<()> {
    let arguments = AppArguments::parse();

    let filter_level = if arguments.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(filter_level)
        .parse_default_env()
        .init();

    let plan = arguments.into_plan();
    let cpus = num_cpus::get();

    info!(
        "Starting command stress test with {} threads, {}-{} commands each, {:?} mode, {} catalog entries ({} logical CPUs)",
        plan.config.threads,
        plan.config.min_iterations,
        plan.config.max_iterations,
        plan.mode,
        plan.catalog.len(),
        cpus
    );
    if plan.config.threads > cpus {
        warn!(
            "{} threads on {} logical CPUs, workers will contend for cores",
            plan.config.threads, cpus
        );
    }

    let invoker: Arc<dyn Invoker> = Arc::from(plan.mode.invoker());
    let reports = stress_commands(&plan.config, plan.catalog, invoker)?;

    for report in &reports {
        debug!(
            "[Worker {}] {} commands, {} failed",
            report.worker, report.invoked, report.failures
        );
    }

    println!("All random command simulations finished.");
    Ok(())
}
