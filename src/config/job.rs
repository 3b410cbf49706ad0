use crate::compose::{CopyParams, PasteParams, RenderParams};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One load → edit → save request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Region to copy. Has no effect without `paste`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<CopyParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paste: Option<PasteParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderParams>,
}

impl Job {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            copy: None,
            paste: None,
            render: None,
        }
    }
}

/// Config file for the `batch_edit` tool.
#[derive(Debug, Deserialize)]
pub struct BatchConfig {
    pub jobs: Vec<Job>,
    /// Where to write the JSON report. Printed to stdout when absent.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<BatchConfig> {
    let data = fs::read_to_string(path).map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let config: BatchConfig = serde_json::from_str(&data)?;
    if config.jobs.is_empty() {
        return Err(Error::Config(format!("{} lists no jobs", path.display())));
    }
    Ok(config)
}
