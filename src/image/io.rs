//! File helpers for images and JSON.
//!
//! - `load_image`: read a `.ppm`/`.sbu` file, degenerating to a 0×0 image on
//!   any failure.
//! - `try_load_image`: same, but reports why the load failed.
//! - `save_image`: encode by output extension and write to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Writers never create directories.
use super::PixelBuffer;
use crate::codec::{self, ImageFormat};
use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load an image, reporting unreadable files and bad headers as errors.
pub fn try_load_image(path: &Path) -> Result<PixelBuffer> {
    let format = ImageFormat::from_path(path)?;
    let data = fs::read(path).map_err(|source| Error::OpenFile {
        path: path.to_path_buf(),
        source,
    })?;
    let image = codec::decode(&data, format)?;
    debug!(
        "loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        format
    );
    Ok(image)
}

/// Load an image; failures yield the empty 0×0 image.
pub fn load_image(path: &Path) -> PixelBuffer {
    try_load_image(path).unwrap_or_else(|err| {
        warn!("{err}; continuing with an empty image");
        PixelBuffer::empty()
    })
}

/// Encode `image` according to the extension of `path` and write it.
///
/// The file is created the same way the command line checks its output, so
/// a missing parent directory is an error rather than created.
pub fn save_image(image: &PixelBuffer, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    let mut out = create_output(path)?;
    codec::encode(image, format, &mut out)?;
    out.flush()?;
    debug!("saved {} as {:?}", path.display(), format);
    Ok(())
}

/// Write a run report (or any serializable value) as pretty JSON.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut out = create_output(path)?;
    serde_json::to_writer_pretty(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| Error::CreateFile {
            path: path.to_path_buf(),
            source,
        })
}
