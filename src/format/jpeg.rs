//! JPEG encoding bridge over [`image::codecs::jpeg`].
//!
//! JPEG has no alpha channel, so the image is converted to RGB8 before
//! encoding. Quality is the codec default; the conversion is lossy and no
//! byte-level round-trip is guaranteed.

use image::{DynamicImage, ImageResult, codecs::jpeg::JpegEncoder};
use std::io::Write;

/// Encodes `image` as JPEG with default quality into `writer`.
pub fn encode(image: &DynamicImage, writer: &mut dyn Write) -> ImageResult<()> {
	JpegEncoder::new(writer).encode_image(&image.to_rgb8())
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use image::{ImageFormat, load_from_memory_with_format};

	#[test]
	fn encodes_rgb_images() -> Result<()> {
		let img = DynamicImage::new_rgb8(8, 6);
		let mut buffer: Vec<u8> = Vec::new();
		encode(&img, &mut buffer)?;

		let decoded = load_from_memory_with_format(&buffer, ImageFormat::Jpeg)?;
		assert_eq!((decoded.width(), decoded.height()), (8, 6));
		Ok(())
	}

	// Alpha inputs must not fail, they are flattened to RGB.
	#[test]
	fn encodes_rgba_images_by_dropping_alpha() -> Result<()> {
		let img = DynamicImage::new_rgba8(4, 4);
		let mut buffer: Vec<u8> = Vec::new();
		encode(&img, &mut buffer)?;

		let decoded = load_from_memory_with_format(&buffer, ImageFormat::Jpeg)?;
		assert_eq!(decoded.color().channel_count(), 3);
		Ok(())
	}
}
