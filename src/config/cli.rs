//! Command-line surface of the `pixel_stamp` binary.
//!
//! ```text
//! pixel_stamp -i <input> -o <output> [-c row,column,width,height]
//!             [-p row,column] [-r message,font,size,row,col]
//! ```
//!
//! Like `getopt`, a flag always takes the next word as its value, even when it
//! starts with `-`; such values are then rejected as missing. There is no
//! `-h`: it is rejected like any other unknown flag. Words outside any flag
//! are skipped.
//!
//! Every rejection maps to a fixed process exit code ([`ExitStatus`]).
//! Checks run in this order: required flags, input exists, output can be
//! created, `-p` needs `-c`, then the contents of `-c`, `-p` and `-r`.
use super::job::Job;
use crate::compose::{CopyParams, PasteParams, RenderParams};
use crate::error::Error;
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "pixel_stamp",
    about = "Copy/paste regions and stamp text onto .ppm/.sbu images",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Input image (.ppm or .sbu)
    #[arg(short = 'i', value_name = "INPUT", allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Output image (.ppm or .sbu)
    #[arg(short = 'o', value_name = "OUTPUT", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Region to copy
    #[arg(short = 'c', value_name = "ROW,COLUMN,WIDTH,HEIGHT", allow_hyphen_values = true)]
    pub copy: Option<String>,

    /// Where to paste the copied region (requires -c)
    #[arg(short = 'p', value_name = "ROW,COLUMN", allow_hyphen_values = true)]
    pub paste: Option<String>,

    /// Text to draw with a bitmap font
    #[arg(short = 'r', value_name = "MESSAGE,FONT,SIZE,ROW,COL", allow_hyphen_values = true)]
    pub render: Option<String>,

    /// Words that belong to no flag; ignored.
    #[arg(hide = true)]
    pub stray: Vec<String>,
}

/// Process exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitStatus {
    Success = 0,
    MissingArgument = 1,
    UnrecognizedArgument = 2,
    DuplicateArgument = 3,
    InputFileMissing = 4,
    OutputFileUnwritable = 5,
    CArgumentMissing = 6,
    CArgumentInvalid = 7,
    PArgumentInvalid = 8,
    RArgumentInvalid = 9,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit status for a failure after arguments were accepted.
    ///
    /// Render failures keep the historical `MissingArgument` code; a failed
    /// write reports the output as unwritable.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::CreateFile { .. } | Error::Io(_) => ExitStatus::OutputFileUnwritable,
            _ => ExitStatus::MissingArgument,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ExitStatus::Success => "success",
            ExitStatus::MissingArgument => "missing argument",
            ExitStatus::UnrecognizedArgument => "unrecognized argument",
            ExitStatus::DuplicateArgument => "duplicate argument",
            ExitStatus::InputFileMissing => "input file missing",
            ExitStatus::OutputFileUnwritable => "output file unwritable",
            ExitStatus::CArgumentMissing => "-p given without -c",
            ExitStatus::CArgumentInvalid => "invalid -c argument",
            ExitStatus::PArgumentInvalid => "invalid -p argument",
            ExitStatus::RArgumentInvalid => "invalid -r argument",
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Why the command line was not turned into a [`Job`].
#[derive(Debug)]
pub struct Rejected {
    pub status: ExitStatus,
    pub message: String,
}

impl Rejected {
    fn new(status: ExitStatus) -> Self {
        Self {
            status,
            message: status.to_string(),
        }
    }

    pub fn report(&self) {
        eprintln!("Error: {}", self.message);
    }
}

impl From<clap::Error> for Rejected {
    fn from(err: clap::Error) -> Self {
        let status = match err.kind() {
            ErrorKind::ArgumentConflict => ExitStatus::DuplicateArgument,
            ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand => {
                ExitStatus::UnrecognizedArgument
            }
            _ => ExitStatus::MissingArgument,
        };
        let message = err
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        Self { status, message }
    }
}

/// Parse and validate a full argument vector (program name first).
///
/// Succeeds only once the input exists and the output has been created, which
/// truncates any existing output file.
pub fn parse_args<I, T>(args: I) -> Result<Job, Rejected>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    if !cli.stray.is_empty() {
        debug!("ignoring stray arguments: {:?}", cli.stray);
    }

    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        return Err(Rejected::new(ExitStatus::MissingArgument));
    };
    let values = [
        Some(input.as_os_str().to_string_lossy()),
        Some(output.as_os_str().to_string_lossy()),
        cli.copy.as_deref().map(Into::into),
        cli.paste.as_deref().map(Into::into),
        cli.render.as_deref().map(Into::into),
    ];
    if values.iter().flatten().any(|v| v.starts_with('-')) {
        return Err(Rejected::new(ExitStatus::MissingArgument));
    }

    if !input.exists() {
        return Err(Rejected::new(ExitStatus::InputFileMissing));
    }
    if File::create(&output).is_err() {
        return Err(Rejected::new(ExitStatus::OutputFileUnwritable));
    }
    if cli.paste.is_some() && cli.copy.is_none() {
        return Err(Rejected::new(ExitStatus::CArgumentMissing));
    }

    let copy = cli
        .copy
        .as_deref()
        .map(|v| parse_copy(v).ok_or(Rejected::new(ExitStatus::CArgumentInvalid)))
        .transpose()?;
    let paste = cli
        .paste
        .as_deref()
        .map(|v| parse_paste(v).ok_or(Rejected::new(ExitStatus::PArgumentInvalid)))
        .transpose()?;
    let render = cli
        .render
        .as_deref()
        .map(|v| parse_render(v).ok_or(Rejected::new(ExitStatus::RArgumentInvalid)))
        .transpose()?;

    Ok(Job {
        input,
        output,
        copy,
        paste,
        render,
    })
}

/// Comma-separated items; runs of commas count as one separator.
fn items(value: &str) -> Vec<&str> {
    value.split(',').filter(|s| !s.is_empty()).collect()
}

/// Non-negative decimal made only of ASCII digits.
fn number(item: &str) -> Option<usize> {
    if !item.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    item.parse().ok()
}

pub fn parse_copy(value: &str) -> Option<CopyParams> {
    let parts = items(value);
    let [row, column, width, height] = parts[..] else {
        return None;
    };
    Some(CopyParams {
        row: number(row)?,
        column: number(column)?,
        width: number(width)?,
        height: number(height)?,
    })
}

pub fn parse_paste(value: &str) -> Option<PasteParams> {
    let parts = items(value);
    let [row, column] = parts[..] else {
        return None;
    };
    Some(PasteParams {
        row: number(row)?,
        column: number(column)?,
    })
}

/// `message,font,size,row,col`; the font asset must exist.
pub fn parse_render(value: &str) -> Option<RenderParams> {
    let parts = items(value);
    let [message, font, size, row, col] = parts[..] else {
        return None;
    };
    let font_path = Path::new(font);
    if !font_path.exists() {
        return None;
    }
    Some(RenderParams {
        message: message.to_string(),
        font_path: font_path.to_path_buf(),
        font_size: number(size)?,
        row: number(row)?,
        col: number(col)?,
    })
}
