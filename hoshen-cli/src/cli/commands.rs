//! Command implementations and argument parsing for the hoshen CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hoshen_core::{Blob, LabelerBuilder, LabelingError, PixelBuffer, collect_blobs, visualize};
use image::{ImageFormat, ImageReader, RgbaImage};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "hoshen", about = "Label 4-connected blobs in images.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Label the non-black pixels of an image.
    Label(LabelCommand),
    /// Recount the blobs of a label map written by `label --output`.
    Census(CensusCommand),
}

/// Options accepted by the `label` command.
#[derive(Debug, Args, Clone)]
pub struct LabelCommand {
    /// Image to label; any format the `image` crate can decode.
    pub input: PathBuf,

    /// Write the label map (blob ids encoded in RGBA) as a PNG.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write a palette rendering of the largest blobs as a PNG.
    #[arg(long)]
    pub visualize: Option<PathBuf>,

    /// Override the source name reported in the summary and logs.
    #[arg(long)]
    pub name: Option<String>,

    /// Number of raw labels to reserve before scanning.
    #[arg(
        long = "label-capacity",
        default_value_t = 0,
        value_parser = clap::value_parser!(usize),
    )]
    pub label_capacity: usize,
}

/// Options accepted by the `census` command.
#[derive(Debug, Args, Clone)]
pub struct CensusCommand {
    /// Label map PNG produced by `label --output`.
    pub label_map: PathBuf,

    /// Override the source name reported in the summary and logs.
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening an input file failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Decoding or encoding an image failed.
    #[error("failed to process image `{path}`: {source}")]
    Image {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Error reported by the `image` crate.
        #[source]
        source: image::ImageError,
    },
    /// A labeled buffer does not fit the PNG encoder's 32-bit dimensions.
    #[error("image dimensions {width}x{height} exceed the encoder limits")]
    Dimensions {
        /// Width in pixels.
        width: usize,
        /// Height in pixels.
        height: usize,
    },
    /// Labeling failed.
    #[error(transparent)]
    Core(#[from] LabelingError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Name of the labeled source.
    pub source: String,
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Blobs ordered by id.
    pub blobs: Vec<Blob>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, labeling or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hoshen_cli::cli::{Cli, Command, LabelCommand, run_cli};
/// # use image::{Rgba, RgbaImage};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("dots.png");
/// RgbaImage::from_fn(3, 1, |x, _| {
///     if x == 1 { Rgba([0, 0, 0, 255]) } else { Rgba([255, 255, 255, 255]) }
/// })
/// .save(&input)?;
///
/// let cli = Cli {
///     command: Command::Label(LabelCommand {
///         input,
///         output: None,
///         visualize: None,
///         name: None,
///         label_capacity: 0,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.source, "dots");
/// assert_eq!(summary.blobs.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Label(label) => {
            Span::current().record("command", field::display("label"));
            run_label(label)
        }
        Command::Census(census) => {
            Span::current().record("command", field::display("census"));
            run_census(census)
        }
    }
}

#[instrument(
    name = "cli.label",
    err,
    skip(command),
    fields(input = field::Empty, label_capacity = command.label_capacity),
)]
pub(super) fn run_label(command: LabelCommand) -> Result<ExecutionSummary, CliError> {
    let LabelCommand {
        input,
        output,
        visualize: rendering,
        name,
        label_capacity,
    } = command;
    Span::current().record("input", field::display(input.display()));

    let source = derive_source_name(&input, name.as_deref());
    let labeler = LabelerBuilder::new()
        .with_label_capacity(label_capacity)
        .with_name(source.as_str())
        .build()?;

    let mut image = load_image(&input)?;
    let blobs = labeler.label_image(&mut image)?;

    if let Some(path) = &output {
        save_image(path, &image)?;
    }
    if let Some(path) = &rendering {
        visualize(&mut image)?;
        save_image(path, &image)?;
    }

    info!(
        source = source.as_str(),
        blobs = blobs.len(),
        "label completed"
    );
    Ok(ExecutionSummary {
        source,
        width: image.width(),
        height: image.height(),
        blobs,
    })
}

#[instrument(
    name = "cli.census",
    err,
    skip(command),
    fields(label_map = field::Empty),
)]
pub(super) fn run_census(command: CensusCommand) -> Result<ExecutionSummary, CliError> {
    let CensusCommand { label_map, name } = command;
    Span::current().record("label_map", field::display(label_map.display()));

    let source = derive_source_name(&label_map, name.as_deref());
    let image = load_image(&label_map)?;
    let blobs = collect_blobs(&image)?;

    info!(
        source = source.as_str(),
        blobs = blobs.len(),
        "census completed"
    );
    Ok(ExecutionSummary {
        source,
        width: image.width(),
        height: image.height(),
        blobs,
    })
}

/// Decodes an image file into an RGBA8 buffer.
#[instrument(name = "cli.load_image", err, fields(width = field::Empty, height = field::Empty))]
pub(super) fn load_image(path: &Path) -> Result<PixelBuffer, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| CliError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    let rgba = decoded.to_rgba8();
    let (width, height) = (rgba.width() as usize, rgba.height() as usize);
    let span = Span::current();
    span.record("width", width);
    span.record("height", height);
    Ok(PixelBuffer::from_raw(width, height, rgba.into_raw())?)
}

/// Encodes `image` as a PNG at `path`.
#[instrument(name = "cli.save_image", err, skip(image))]
pub(super) fn save_image(path: &Path, image: &PixelBuffer) -> Result<(), CliError> {
    let (width, height) = (image.width(), image.height());
    let too_large = || CliError::Dimensions { width, height };
    let encoded = RgbaImage::from_raw(
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(height).map_err(|_| too_large())?,
        image.data().to_vec(),
    )
    .ok_or_else(too_large)?;

    encoded
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CliError::Image {
            path: path.to_path_buf(),
            source,
        })
}

pub(super) fn derive_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "image".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hoshen_cli::cli::{ExecutionSummary, render_summary};
/// # use hoshen_core::Blob;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     width: 4,
///     height: 2,
///     blobs: vec![Blob::new(0, 5), Blob::new(1, 2)],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "source: demo\nsize: 4x2\nblobs: 2\n0\t5\n1\t2\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "size: {}x{}", summary.width, summary.height)?;
    writeln!(writer, "blobs: {}", summary.blobs.len())?;
    for blob in &summary.blobs {
        writeln!(writer, "{}\t{}", blob.id(), blob.size())?;
    }
    Ok(())
}
