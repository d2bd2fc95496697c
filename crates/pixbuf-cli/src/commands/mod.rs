//! CLI command implementations

pub mod convert;
pub mod draw;
pub mod info;
pub mod new;
pub mod resize;

use crate::OutputOpts;
use anyhow::{anyhow, Context, Result};
use pixbuf_core::{PixelBuffer, Rgb};
use pixbuf_io::{ImageFormat, JpegOptions, PngOptions, SaveOptions};
use std::path::Path;
use tracing::info;

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    pixbuf_io::load(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path, taking the format from `--format` or the extension.
pub fn save_image(path: &Path, image: &PixelBuffer, out: &OutputOpts) -> Result<()> {
    let format = match &out.format {
        Some(name) => name.clone(),
        None => ImageFormat::from_extension(path)
            .map(|f| f.extension().to_string())
            .ok_or_else(|| {
                anyhow!(
                    "Cannot infer format from {}; pass --format png|jpeg",
                    path.display()
                )
            })?,
    };

    pixbuf_io::save(image, path, &format, save_options(out))
        .with_context(|| format!("Failed to save: {}", path.display()))?;

    info!(path = %path.display(), format = %format, w = image.width(), h = image.height(), "Saved");
    Ok(())
}

/// Builds encoder options from the command line, leaving unset values at
/// their defaults.
pub fn save_options(out: &OutputOpts) -> SaveOptions {
    let mut opts = SaveOptions::default();
    if let Some(level) = out.compression {
        opts = opts.with_png(PngOptions::default().with_compression_level(level));
    }
    if let Some(quality) = out.quality {
        opts = opts.with_jpeg(JpegOptions::default().with_quality(quality));
    }
    opts
}

/// Parses `r,g,b` with each component in `0..=255`.
pub fn parse_color(s: &str) -> std::result::Result<Rgb, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected r,g,b, got '{}'", s));
    };
    let channel = |v: &str| {
        v.parse::<u8>()
            .map_err(|_| format!("color component '{}' is not in 0..=255", v))
    };
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("255,0,16").unwrap(), Rgb::new(255, 0, 16));
        assert_eq!(parse_color(" 1, 2 ,3 ").unwrap(), Rgb::new(1, 2, 3));
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("1,2,3,4").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_save_options() {
        let opts = save_options(&OutputOpts::default());
        assert_eq!(opts, SaveOptions::default());

        let opts = save_options(&OutputOpts {
            format: None,
            quality: Some(150),
            compression: Some(4),
        });
        assert_eq!(opts.jpeg.quality(), 100);
        assert_eq!(opts.png.compression_level(), 4);
    }

    #[test]
    fn test_save_image_format_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let image = PixelBuffer::filled(3, 2, Rgb::new(9, 8, 7)).unwrap();

        let by_ext = dir.path().join("a.PNG");
        save_image(&by_ext, &image, &OutputOpts::default()).unwrap();
        assert_eq!(load_image(&by_ext).unwrap(), image);

        let forced = dir.path().join("b.png");
        let out = OutputOpts {
            format: Some("jpeg".into()),
            ..Default::default()
        };
        save_image(&forced, &image, &out).unwrap();
        assert_eq!(ImageFormat::detect(&forced).unwrap(), ImageFormat::Jpeg);

        let unknown = dir.path().join("c.bmp");
        assert!(save_image(&unknown, &image, &OutputOpts::default()).is_err());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
