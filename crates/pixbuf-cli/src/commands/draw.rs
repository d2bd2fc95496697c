//! Draw command - overlay one image onto another
//!
//! The overlay's blue channel is its opacity: 0 leaves the background,
//! 255 replaces it.

use crate::DrawArgs;
use anyhow::Result;
use pixbuf_ops::{draw, resize};
use tracing::{debug, info};

pub fn run(args: DrawArgs) -> Result<()> {
    let mut bg = super::load_image(&args.background)?;
    let mut overlay = super::load_image(&args.overlay)?;
    debug!(bg = ?bg.dimensions(), overlay = ?overlay.dimensions(), "Loaded");

    if let Some(scale) = args.overlay_scale {
        resize(&mut overlay, scale, None)?;
        debug!(overlay = ?overlay.dimensions(), scale, "Scaled overlay");
    }

    draw(&mut bg, &overlay, args.x, args.y)?;
    info!(x = args.x, y = args.y, "Drew overlay");

    super::save_image(&args.output, &bg, &args.out)
}
