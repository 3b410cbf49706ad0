#![allow(dead_code)]

pub mod synthetic_image;

use std::fs;
use std::path::{Path, PathBuf};

/// Fresh per-process directory under the OS temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pixel_stamp_{}_{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Three 5-row glyphs: A (5 wide), B (3 wide), C (3 wide).
pub const SAMPLE_FONT: &str = "\
\x20***  **   **
*   * * * *
***** **  *
*   * * * *
*   * **   **
";

pub fn write_sample_font(dir: &Path) -> PathBuf {
    let path = dir.join("font.txt");
    fs::write(&path, SAMPLE_FONT).expect("write font");
    path
}
