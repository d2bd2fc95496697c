//! New command - create a solid-color image

use crate::NewArgs;
use anyhow::Result;
use pixbuf_core::PixelBuffer;
use tracing::info;

pub fn run(args: NewArgs) -> Result<()> {
    let height = args.height.unwrap_or(args.width);
    let image = match args.color {
        Some(color) => PixelBuffer::filled(args.width, height, color)?,
        None => PixelBuffer::new(args.width, height)?,
    };
    info!(w = args.width, h = height, color = ?args.color, "Created image");

    super::save_image(&args.output, &image, &args.out)
}
