use std::io::Cursor;
use std::path::Path;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use image::DynamicImage;
use log::debug;

use crate::error::LoadError;

// RGBA8 pixels of one frame, decoded off the UI thread
#[derive(Debug)]
pub struct DecodedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

// --- Read EXIF Orientation ---
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Most rendered frames carry no EXIF at all
            debug!("No EXIF orientation for {:?}: {}", path, e);
            1
        }
    }
}

// --- Decode Fetched Bytes, Apply EXIF Rotation ---
pub fn decode_frame(path: &Path, bytes: &[u8]) -> Result<DecodedFrame, LoadError> {
    let orientation = exif_orientation(path, bytes);
    let image = image::load_from_memory(bytes).map_err(|e| LoadError::decode(path, e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    let image: DynamicImage = match orientation {
        3 => image.rotate180(),
        6 => image.rotate90(),
        8 => image.rotate270(),
        _ => image,
    };

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedFrame {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

// --- Upload Decoded Pixels as a Texture (UI thread only) ---
pub fn upload_frame_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
    frame: &DecodedFrame,
) -> Result<Texture2D, LoadError> {
    // Blank RGBA8 image sizes the texture; the pixels are copied in afterwards
    let blank = Image::gen_image_color(frame.width as i32, frame.height as i32, Color::BLANK);
    let mut texture = rl.load_texture_from_image(thread, &blank)
        .map_err(|e| LoadError::texture(path, e))?;
    drop(blank);

    texture.update_texture(&frame.pixels)
        .map_err(|e| LoadError::texture(path, e))?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, format).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn decodes_webp_frames_to_rgba() {
        let mut source = RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
        source.put_pixel(3, 1, Rgba([200, 100, 50, 255]));
        let bytes = encode(&source, ImageFormat::WebP);

        let frame = decode_frame(Path::new("frames/000001.webp"), &bytes).unwrap();
        assert_eq!((frame.width, frame.height), (4, 2));
        assert_eq!(frame.pixels.len(), 4 * 2 * 4);
        // Lossless WebP keeps exact values
        assert_eq!(&frame.pixels[..4], &[10, 20, 30, 255]);
        assert_eq!(&frame.pixels[(4 + 3) * 4..], &[200, 100, 50, 255]);
    }

    #[test]
    fn decodes_png_frames_to_rgba() {
        let source = RgbaImage::from_pixel(3, 5, Rgba([1, 2, 3, 4]));
        let bytes = encode(&source, ImageFormat::Png);

        let frame = decode_frame(Path::new("frames/000002.png"), &bytes).unwrap();
        assert_eq!((frame.width, frame.height), (3, 5));
        assert!(frame.pixels.chunks_exact(4).all(|px| px == [1, 2, 3, 4]));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_frame(Path::new("frames/000003.webp"), b"not an image").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains("000003.webp"));
    }

    #[test]
    fn frames_without_exif_are_not_rotated() {
        assert_eq!(exif_orientation(Path::new("frames/000001.jpg"), b"garbage"), 1);
    }
}
