use pixbuf_core::{PixelBuffer, Rgb};
use pixbuf_io::{encode, load, save, ImageFormat, JpegOptions, PngOptions, SaveOptions};

fn checker(size: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::square(size).unwrap();
    for (x, y, _) in buf.clone().pixels() {
        let on = (x / 4 + y / 4) % 2 == 0;
        buf.set_pixel(x, y, if on { Rgb::new(250, 250, 250) } else { Rgb::new(10, 60, 200) });
    }
    buf
}

#[test]
fn jpeg_quality_zero_matches_fallback() {
    let buf = checker(32);
    let zero = SaveOptions::default().with_jpeg(JpegOptions::default().with_quality(0));
    let ninety = SaveOptions::default().with_jpeg(JpegOptions::default().with_quality(90));

    assert_eq!(
        encode(&buf, ImageFormat::Jpeg, zero).unwrap(),
        encode(&buf, ImageFormat::Jpeg, ninety).unwrap()
    );
}

#[test]
fn out_of_range_options_are_clamped() {
    let buf = checker(16);
    let wild = SaveOptions::default()
        .with_png(PngOptions::default().with_compression_level(99))
        .with_jpeg(JpegOptions::default().with_quality(1000));
    let max = SaveOptions::default()
        .with_png(PngOptions::default().with_compression_level(9))
        .with_jpeg(JpegOptions::default().with_quality(100));

    for format in [ImageFormat::Png, ImageFormat::Jpeg] {
        assert_eq!(encode(&buf, format, wild).unwrap(), encode(&buf, format, max).unwrap());
    }
}

#[test]
fn every_png_level_is_lossless() {
    let dir = tempfile::tempdir().unwrap();
    let buf = checker(24);

    for level in 0..=9 {
        let path = dir.path().join(format!("level{level}.png"));
        let opts = SaveOptions::default().with_png(PngOptions::default().with_compression_level(level));
        save(&buf, &path, "png", opts).unwrap();
        assert_eq!(load(&path).unwrap(), buf, "level {level}");
    }
}
