//! ArrayDraw CLI
//!
//! Renders array shape diagrams to SVG (or the JSON primitive list), and
//! writes the reference gallery.

mod error;
mod gallery;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use arraydraw::{render, render_batch, CubeColor, Document, DrawOptions, Legends, Rgb, Shape};
use arraydraw_svg::save_svg;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "arraydraw")]
#[command(about = "Draw array shapes as cabinet-projected cubes", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render one shape
    Render(RenderArgs),
    /// Write the reference drawings example_1.svg .. example_7.svg
    Gallery {
        /// Directory to write into (created if missing)
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Height, width and depth, e.g. 4,3,2
    #[arg(long)]
    shape: Shape,

    /// Tile side length in pixels
    #[arg(long, default_value_t = 30.0)]
    cube_size: f64,

    /// Base face color; roof and side shades are derived from it
    #[arg(long, conflicts_with_all = ["face_color", "roof_color", "side_color"])]
    color: Option<Rgb>,

    /// Face color (requires --roof-color and --side-color)
    #[arg(long, requires_all = ["roof_color", "side_color"])]
    face_color: Option<Rgb>,

    /// Roof color
    #[arg(long, requires_all = ["face_color", "side_color"])]
    roof_color: Option<Rgb>,

    /// Side color
    #[arg(long, requires_all = ["face_color", "roof_color"])]
    side_color: Option<Rgb>,

    /// Outline color
    #[arg(long)]
    line_color: Option<Rgb>,

    /// Outline width (default: cube size / 10)
    #[arg(long)]
    line_size: Option<f64>,

    /// Background color (default: transparent)
    #[arg(long)]
    background: Option<Rgb>,

    /// Legend and title color
    #[arg(long)]
    text_color: Option<Rgb>,

    #[arg(long)]
    height_legend: Option<String>,

    #[arg(long)]
    width_legend: Option<String>,

    #[arg(long)]
    depth_legend: Option<String>,

    #[arg(long)]
    title: Option<String>,

    /// Depth-axis angle in degrees, within [0, 90]
    #[arg(long, default_value_t = 45.0)]
    theta: f64,

    /// Depth-unit length relative to a tile side
    #[arg(long, default_value_t = 0.5)]
    projection: f64,

    /// Write the primitive list as JSON instead of SVG
    #[arg(long)]
    json: bool,

    /// Output file
    #[arg(long)]
    output: PathBuf,
}

impl RenderArgs {
    fn options(&self) -> Result<DrawOptions, CliError> {
        let mut options = DrawOptions::new(&<[usize; 3]>::from(self.shape))
            .with_cube_size(self.cube_size)
            .with_legends(Legends {
                height: self.height_legend.clone(),
                width: self.width_legend.clone(),
                depth: self.depth_legend.clone(),
            })
            .with_theta(self.theta)
            .with_projection(self.projection);

        match (self.color, self.face_color, self.roof_color, self.side_color) {
            (Some(base), None, None, None) => options = options.with_cube_color(base),
            (None, Some(face), Some(roof), Some(side)) => {
                options = options.with_cube_color(CubeColor::families(face, roof, side))
            }
            (None, None, None, None) => {}
            _ => {
                return Err(CliError::Usage(
                    "use either --color or all of --face-color, --roof-color, --side-color"
                        .to_string(),
                ))
            }
        }

        if let Some(color) = self.line_color {
            options = options.with_line_color(color);
        }
        if let Some(size) = self.line_size {
            options = options.with_line_size(size);
        }
        if let Some(color) = self.background {
            options = options.with_background(color);
        }
        if let Some(color) = self.text_color {
            options = options.with_text_color(color);
        }
        if let Some(title) = &self.title {
            options = options.with_title(title.clone());
        }
        Ok(options)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Render(args) => run_render(&args),
        Command::Gallery { out_dir } => run_gallery(&out_dir),
    };

    if let Err(e) = result {
        e.exit();
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_render(args: &RenderArgs) -> Result<(), CliError> {
    let doc = render(&args.options()?)?;
    if args.json {
        write_json(&doc, &args.output)?;
    } else {
        save_svg(&doc, &args.output)?;
    }
    info!(output = %args.output.display(), "rendered {}", args.shape);
    Ok(())
}

fn write_json(doc: &Document, path: &Path) -> Result<(), CliError> {
    let file = File::create(path).map_err(|error| CliError::FileWrite {
        path: path.to_path_buf(),
        error,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, doc).map_err(|error| CliError::Json {
        path: path.to_path_buf(),
        error,
    })?;
    writer.flush().map_err(|error| CliError::FileWrite {
        path: path.to_path_buf(),
        error,
    })?;
    debug!(path = %path.display(), "wrote json");
    Ok(())
}

fn run_gallery(out_dir: &Path) -> Result<(), CliError> {
    fs::create_dir_all(out_dir).map_err(|error| CliError::FileWrite {
        path: out_dir.to_path_buf(),
        error,
    })?;

    let (names, batch): (Vec<String>, Vec<DrawOptions>) = gallery::gallery()?.into_iter().unzip();
    for (name, doc) in names.iter().zip(render_batch(&batch)) {
        let path = out_dir.join(name);
        save_svg(&doc?, &path)?;
        println!("{}", path.display());
    }
    Ok(())
}
