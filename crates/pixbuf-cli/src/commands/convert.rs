//! Convert command - re-encode between PNG and JPEG

use crate::ConvertArgs;
use anyhow::Result;
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    let image = super::load_image(&args.input)?;
    info!(input = %args.input.display(), w = image.width(), h = image.height(), "Converting");
    super::save_image(&args.output, &image, &args.out)
}
