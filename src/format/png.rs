use image::{DynamicImage, ImageEncoder, ImageResult, codecs::png::PngEncoder};
use std::io::Write;

/// Encodes `image` as PNG with default compression into `writer`.
///
/// PNG supports all color types produced by decoding, so the image is
/// written with its own color type unchanged.
pub fn encode(image: &DynamicImage, writer: &mut dyn Write) -> ImageResult<()> {
	PngEncoder::new(writer).write_image(
		image.as_bytes(),
		image.width(),
		image.height(),
		image.color().into(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use image::{ImageFormat, Rgba, RgbaImage, load_from_memory_with_format};

	#[test]
	fn round_trips_rgba_pixels_losslessly() -> Result<()> {
		let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([10, 200, 30, 255])));
		let mut buffer: Vec<u8> = Vec::new();
		encode(&img, &mut buffer)?;

		let decoded = load_from_memory_with_format(&buffer, ImageFormat::Png)?;
		assert_eq!((decoded.width(), decoded.height()), (3, 2));
		assert_eq!(decoded.to_rgba8().get_pixel(0, 0), &Rgba([10, 200, 30, 255]));
		Ok(())
	}
}
