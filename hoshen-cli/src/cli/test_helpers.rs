//! Small helpers shared across CLI tests.
//!
//! The tests paint tiny masks into PNG files inside a temporary directory and
//! drive the commands against them.

use std::io;
use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use super::{Cli, CliError, Command, LabelCommand, run_cli};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// Writes a PNG where non-zero mask cells are white and the rest black.
pub(super) fn write_mask<const W: usize>(
    dir: &TempDir,
    name: &str,
    rows: &[[u8; W]],
) -> Result<PathBuf, image::ImageError> {
    let path = dir.path().join(name);
    let width = u32::try_from(W).map_err(|_| io::Error::other("mask too wide"))?;
    let height = u32::try_from(rows.len()).map_err(|_| io::Error::other("mask too tall"))?;
    let image = RgbaImage::from_fn(width, height, |x, y| {
        if rows[y as usize][x as usize] == 0 {
            BLACK
        } else {
            WHITE
        }
    });
    image.save(&path)?;
    Ok(path)
}

pub(super) fn label_command(input: PathBuf) -> LabelCommand {
    LabelCommand {
        input,
        output: None,
        visualize: None,
        name: None,
        label_capacity: 0,
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn label_cli(command: LabelCommand) -> Cli {
    Cli {
        command: Command::Label(command),
    }
}
