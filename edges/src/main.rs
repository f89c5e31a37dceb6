use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use edgemap::{EdgeDetector, GaussianBlur, GenericImage, ImageVisualizer};
use image::{DynamicImage, ImageReader};
use log::debug;

mod structs;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(disable_help_flag = true)]
struct Cli {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Path to source image file
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Path to result image file
    #[clap(value_parser)]
    destination_path: Option<PathBuf>,

    /// Standard deviation of the Gaussian blur
    #[clap(short, long, value_parser, default_value = "1.0")]
    sigma: structs::Sigma,

    /// Side of the Gaussian kernel, must be odd
    #[clap(short, long, value_parser, default_value = "3")]
    kernel_size: structs::KernelSize,

    /// The way of mapping gradient magnitudes into gray levels
    #[clap(short, long, value_enum, default_value_t = structs::Mode::Normalized)]
    mode: structs::Mode,

    /// Stage of processing saved into the result file
    #[clap(long, value_enum, default_value_t = structs::Stage::Edges)]
    stage: structs::Stage,

    /// Overwrite destination file
    #[clap(short, long, action)]
    overwrite: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    process(&cli)
}

fn process(cli: &Cli) -> Result<()> {
    let source = open_source_image(cli)?;
    let blur = GaussianBlur::new()
        .side(cli.kernel_size.0)
        .sigma(cli.sigma.0);
    let is_gray = matches!(source, DynamicImage::ImageLuma8(_));

    let result: DynamicImage = match cli.stage {
        structs::Stage::Blur if is_gray => {
            debug!("Blur the gray source image with {:?}", blur);
            let blurred = blur.blur_gray(&GenericImage::<u8>::from(&source));
            blurred.to_gray_image().into()
        }
        structs::Stage::Blur => {
            debug!("Blur the colour source image with {:?}", blur);
            let blurred = blur.blur_rgb(&GenericImage::<u32>::from(&source));
            blurred.to_rgb_image().into()
        }
        structs::Stage::Edges => {
            let detector = EdgeDetector::new(blur);
            debug!("Detect edges with {:?}", blur);
            let magnitude = if is_gray {
                detector.detect_edges(&GenericImage::<u8>::from(&source))
            } else {
                detector.detect_edges_rgb(&GenericImage::<u32>::from(&source))
            };
            debug!(
                "Visualize the gradient magnitude in {:?} mode, the greatest magnitude is {:?}",
                cli.mode,
                magnitude.max().ok()
            );
            let visualizer = ImageVisualizer::new(cli.mode.into());
            visualizer.visualize(&magnitude).to_gray_image().into()
        }
    };

    save_result(cli, &result)
}

fn open_source_image(cli: &Cli) -> Result<DynamicImage> {
    let source_path = &cli.source_path;
    debug!("Opening the source image {:?}", source_path);
    let image = ImageReader::open(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?
        .decode()
        .with_context(|| "Failed to decode source image")?;
    debug!(
        "Source image has size {}x{} and colour type {:?}",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

fn save_result(cli: &Cli, image: &DynamicImage) -> Result<()> {
    let result_path = if let Some(path) = cli.destination_path.clone() {
        path
    } else {
        let mut path = PathBuf::from("./");
        let ext = cli
            .source_path
            .extension()
            .unwrap_or_else(|| OsStr::new("png"));
        path.push("result");
        path.set_extension(ext);
        path
    };
    if result_path.exists() && !cli.overwrite {
        return Err(anyhow!(
            "Destination path {:?} already exists.",
            result_path
        ));
    };

    debug!("Save the result image into the file {:?}", result_path);
    image
        .save(&result_path)
        .with_context(|| "Failed to save the result image")?;
    Ok(())
}
