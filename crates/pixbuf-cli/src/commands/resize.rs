//! Resize command
//!
//! Scales images with bicubic interpolation, either by ratio or to an
//! exact size.

use crate::ResizeArgs;
use anyhow::{bail, Result};
use pixbuf_ops::{resize, resize_to};
use tracing::info;

pub fn run(args: ResizeArgs) -> Result<()> {
    let mut image = super::load_image(&args.input)?;
    let (src_w, src_h) = image.dimensions();

    match (args.scale, args.width, args.height) {
        (Some(s), None, None) => resize(&mut image, s, args.scale_y)?,
        (None, Some(w), Some(h)) => resize_to(&mut image, w, h)?,
        _ => bail!("Specify --scale, or both --width and --height"),
    }

    info!(src_w, src_h, dst_w = image.width(), dst_h = image.height(), "Resized");
    super::save_image(&args.output, &image, &args.out)
}
