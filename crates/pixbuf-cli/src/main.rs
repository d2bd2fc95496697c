//! pixbuf - RGB image CLI
//!
//! Creates, resizes, composites and converts PNG/JPEG images through the
//! pixbuf libraries.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use pixbuf_core::Rgb;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixbuf")]
#[command(author, version, about = "Create, resize, draw and convert RGB images")]
#[command(long_about = "
Small RGB image tool built on bicubic resampling and blue-as-opacity
compositing. Reads PNG and JPEG, writes PNG and JPEG.

Examples:
  pixbuf info photo.jpg                       # Show image info
  pixbuf new -o black.png -w 300              # 300x300 black square
  pixbuf new -o red.jpg -w 64 -H 32 --color 255,0,0
  pixbuf resize in.png -o half.png -s 0.5     # Scale by ratio
  pixbuf resize in.png -o thumb.png -w 128 -H 96
  pixbuf draw bg.png logo.png -x 100 -y 100 -o out.png --overlay-scale 0.5
  pixbuf convert in.png out.jpg -q 85
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Create a new solid-color image
    New(NewArgs),

    /// Resize an image with bicubic interpolation
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Draw one image onto another (source blue channel is the opacity)
    Draw(DrawArgs),

    /// Convert between PNG and JPEG
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

/// Encoder settings shared by every command that writes a file.
#[derive(Args, Clone, Default)]
struct OutputOpts {
    /// Output format: png, jpeg, jpg (default: from output extension)
    #[arg(short, long)]
    format: Option<String>,

    /// JPEG quality 0-100, clamped (0 means 90)
    #[arg(short, long)]
    quality: Option<i32>,

    /// PNG compression level 0-9, clamped
    #[arg(short, long)]
    compression: Option<i32>,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NewArgs {
    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Width in pixels
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Height in pixels (default: same as width)
    #[arg(short = 'H', long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Fill color as r,g,b (default: black)
    #[arg(long, value_parser = commands::parse_color)]
    color: Option<Rgb>,

    #[command(flatten)]
    out: OutputOpts,
}

#[derive(Args)]
struct ResizeArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Scale factor (e.g., 0.5, 2.0)
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    scale: Option<f64>,

    /// Vertical scale factor (default: same as --scale)
    #[arg(long, requires = "scale")]
    scale_y: Option<f64>,

    /// Target width
    #[arg(short, long, requires = "height")]
    width: Option<u32>,

    /// Target height
    #[arg(short = 'H', long, requires = "width")]
    height: Option<u32>,

    #[command(flatten)]
    out: OutputOpts,
}

#[derive(Args)]
struct DrawArgs {
    /// Background image (drawn onto)
    background: PathBuf,

    /// Overlay image
    overlay: PathBuf,

    /// Overlay left edge on the background, may be negative
    #[arg(short, allow_negative_numbers = true, default_value_t = 0)]
    x: i32,

    /// Overlay top edge on the background, may be negative
    #[arg(short, allow_negative_numbers = true, default_value_t = 0)]
    y: i32,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Resize the overlay by this factor before drawing
    #[arg(long)]
    overlay_scale: Option<f64>,

    #[command(flatten)]
    out: OutputOpts,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    output: PathBuf,

    #[command(flatten)]
    out: OutputOpts,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::New(args) => commands::new::run(args),
        Commands::Resize(args) => commands::resize::run(args),
        Commands::Draw(args) => commands::draw::run(args),
        Commands::Convert(args) => commands::convert::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_draw_accepts_negative_offsets() {
        let cli = Cli::try_parse_from([
            "pixbuf", "draw", "bg.png", "fg.png", "-x", "-20", "-y", "7", "-o", "out.png",
        ])
        .unwrap();
        let Commands::Draw(args) = cli.command else {
            panic!("expected draw");
        };
        assert_eq!((args.x, args.y), (-20, 7));
        assert!(args.overlay_scale.is_none());
    }

    #[test]
    fn test_resize_modes_are_exclusive() {
        assert!(Cli::try_parse_from(["pixbuf", "resize", "a.png", "-o", "b.png", "-s", "0.5", "-w", "3", "-H", "3"]).is_err());
        assert!(Cli::try_parse_from(["pixbuf", "resize", "a.png", "-o", "b.png", "-w", "3"]).is_err());
        assert!(Cli::try_parse_from(["pixbuf", "resize", "a.png", "-o", "b.png", "--scale-y", "2"]).is_err());
        assert!(Cli::try_parse_from(["pixbuf", "resize", "a.png", "-o", "b.png", "-s", "2", "--scale-y", "0.5"]).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_width() {
        assert!(Cli::try_parse_from(["pixbuf", "new", "-o", "a.png", "-w", "0"]).is_err());
        let cli = Cli::try_parse_from(["pixbuf", "-vv", "new", "-o", "a.png", "-w", "5", "--color", "1,2,3"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.color, Some(Rgb::new(1, 2, 3)));
    }
}
