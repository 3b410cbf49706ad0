pub mod cli;
pub mod job;

pub use self::cli::{parse_args, ExitStatus, Rejected};
pub use self::job::{load_config, BatchConfig, Job};
