use pixel_stamp::config::load_config;
use pixel_stamp::image::io::write_json_file;
use pixel_stamp::{run_job, JobSummary};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let mut entries = Vec::with_capacity(config.jobs.len());
    for (index, job) in config.jobs.iter().enumerate() {
        let entry = match run_job(job) {
            Ok(summary) => BatchEntry {
                index,
                summary: Some(summary),
                error: None,
            },
            Err(err) => {
                eprintln!("Job {index} ({}) failed: {err}", job.input.display());
                BatchEntry {
                    index,
                    summary: None,
                    error: Some(err.to_string()),
                }
            }
        };
        entries.push(entry);
    }
    let failed = entries.iter().filter(|e| e.error.is_some()).count();

    if let Some(path) = &config.report {
        write_json_file(path, &entries).map_err(|e| e.to_string())?;
        println!(
            "Report for {} jobs written to {}",
            entries.len(),
            path.display()
        );
    } else {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
        println!("{json}");
    }

    if failed > 0 {
        return Err(format!("{failed} of {} jobs failed", entries.len()));
    }
    Ok(())
}

fn usage() -> String {
    "Usage: batch_edit <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchEntry {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<JobSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}
