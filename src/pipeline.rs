//! End-to-end processing of one [`Job`]: load, copy/paste, render, save.
//!
//! Stages run strictly in that order. A render failure returns before the
//! save, so no output image is written for it.
use crate::compose::{copy_paste, render_text, RenderOutcome};
use crate::config::Job;
use crate::error::Result;
use crate::image::io::{load_image, save_image};
use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

/// What a finished job did, suitable for JSON reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: usize,
    pub height: usize,
    pub pasted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderOutcome>,
}

pub fn run_job(job: &Job) -> Result<JobSummary> {
    let mut image = load_image(&job.input);
    debug!(
        "pipeline: loaded {} ({}x{})",
        job.input.display(),
        image.width(),
        image.height()
    );

    let pasted = match (job.copy, job.paste) {
        (Some(copy), Some(paste)) => {
            copy_paste(&mut image, copy, paste);
            true
        }
        _ => false,
    };

    let render = job
        .render
        .as_ref()
        .map(|render| render_text(&mut image, render))
        .transpose()?;
    if let Some(outcome) = &render {
        debug!(
            "pipeline: rendered {} glyphs ({} skipped)",
            outcome.stamped, outcome.skipped
        );
    }

    save_image(&image, &job.output)?;
    info!("{} -> {}", job.input.display(), job.output.display());

    Ok(JobSummary {
        input: job.input.clone(),
        output: job.output.clone(),
        width: image.width(),
        height: image.height(),
        pasted,
        render,
    })
}
