//! Image info command.
//!
//! Displays dimensions, byte size and detected format of each input.

use crate::InfoArgs;
use anyhow::Result;
use pixbuf_core::CHANNELS;
use pixbuf_io::ImageFormat;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// One input's summary, as printed by `--json`.
#[derive(Debug, Serialize)]
struct ImageInfo {
    file: String,
    format: Option<String>,
    width: u32,
    height: u32,
    channels: usize,
    pixel_bytes: usize,
    file_size: u64,
}

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    let mut records = Vec::with_capacity(args.input.len());
    for path in &args.input {
        records.push(inspect(path)?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (idx, info) in records.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_text(info, verbose);
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<ImageInfo> {
    let file_size = fs::metadata(path)?.len();
    let format = ImageFormat::detect(path).ok();
    let image = super::load_image(path)?;

    Ok(ImageInfo {
        file: path.display().to_string(),
        format: format.map(|f| f.to_string()),
        width: image.width(),
        height: image.height(),
        channels: CHANNELS,
        pixel_bytes: image.byte_len(),
        file_size,
    })
}

fn print_text(info: &ImageInfo, verbose: u8) {
    println!("{}", info.file);
    println!("  Resolution: {}x{}", info.width, info.height);
    println!("  Channels:   {}", info.channels);
    println!("  Pixels:     {}", info.width as u64 * info.height as u64);
    println!("  File size:  {}", super::format_size(info.file_size));
    if let Some(format) = &info.format {
        println!("  Format:     {}", format);
    }
    if verbose > 0 {
        println!("  In memory:  {}", super::format_size(info.pixel_bytes as u64));
    }
}
