use image::{DynamicImage, Frame, ImageResult, codecs::gif::GifEncoder};
use std::io::Write;

/// Encodes `image` as a single-frame GIF with the default palette into
/// `writer`. The frame is built from the RGBA8 view of the image.
pub fn encode(image: &DynamicImage, writer: &mut dyn Write) -> ImageResult<()> {
	let mut encoder = GifEncoder::new(writer);
	encoder.encode_frame(Frame::new(image.to_rgba8()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use image::{ImageFormat, load_from_memory_with_format};

	#[test]
	fn encodes_a_decodable_single_frame() -> Result<()> {
		let img = DynamicImage::new_rgb8(5, 7);
		let mut buffer: Vec<u8> = Vec::new();
		encode(&img, &mut buffer)?;

		let decoded = load_from_memory_with_format(&buffer, ImageFormat::Gif)?;
		assert_eq!((decoded.width(), decoded.height()), (5, 7));
		Ok(())
	}
}
