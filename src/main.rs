use pixel_stamp::config::{parse_args, ExitStatus};
use pixel_stamp::run_job;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    std::process::exit(run().code());
}

fn run() -> ExitStatus {
    let job = match parse_args(env::args_os()) {
        Ok(job) => job,
        Err(rejected) => {
            rejected.report();
            return rejected.status;
        }
    };
    match run_job(&job) {
        Ok(_) => ExitStatus::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitStatus::for_error(&err)
        }
    }
}
