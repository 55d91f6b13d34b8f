pub mod app_arguments;
pub mod catalog;
pub mod command_stress;
pub mod error;
pub mod invoker;
pub mod profile;

pub use catalog::Catalog;
pub use command_stress::{stress_commands, BlastConfig, WorkerReport};
pub use error::{BlastError, ConfigError, InvocationError};
pub use invoker::{tokenize, DirectInvoker, Invoker, Mode, ShellInvoker};
pub use profile::Profile;
