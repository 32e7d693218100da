//! Supported image formats, the canonical extension rule and the encoder
//! dispatch. Each submodule implements the encoding bridge for one target
//! format on top of the [`image`] crate.

pub mod gif;
pub mod jpeg;
pub mod png;

use crate::error::ConfigError;
use image::{DynamicImage, ImageResult};
use std::{
	fmt::{Display, Formatter},
	io::Write,
	str::FromStr,
};

/// Raster formats accepted as the source side of a conversion.
///
/// Parsing is case-insensitive and accepts `"jpeg"` as an alias of `"jpg"`:
///
/// ```
/// use imgconv::SourceFormat;
///
/// assert_eq!("JPEG".parse::<SourceFormat>().unwrap(), SourceFormat::Jpg);
/// assert_eq!(SourceFormat::Png.as_extension(), "png");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceFormat {
	Jpg,
	Png,
	Gif,
}

impl SourceFormat {
	/// Returns the canonical file extension of this format.
	pub fn as_extension(self) -> &'static str {
		match self {
			SourceFormat::Jpg => "jpg",
			SourceFormat::Png => "png",
			SourceFormat::Gif => "gif",
		}
	}
}

impl FromStr for SourceFormat {
	type Err = ConfigError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_lowercase().as_str() {
			"jpeg" | "jpg" => Ok(SourceFormat::Jpg),
			"png" => Ok(SourceFormat::Png),
			"gif" => Ok(SourceFormat::Gif),
			_ => Err(ConfigError::UnsupportedFormat {
				format: value.to_string(),
			}),
		}
	}
}

impl Display for SourceFormat {
	fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
		f.write_str(self.as_extension())
	}
}

/// Normalizes a format string or file extension to its canonical form:
/// lower-cased, with `"jpeg"` unified to `"jpg"`.
pub fn canonical_ext(value: &str) -> String {
	let ext = value.trim().to_lowercase();
	if ext == "jpeg" { "jpg".to_string() } else { ext }
}

/// The signature shared by all per-format encoders.
pub type EncodeFn = fn(&DynamicImage, &mut dyn Write) -> ImageResult<()>;

/// Resolves the encoder for a target format string.
///
/// Returns `None` for anything outside {jpg, jpeg, png, gif}. This is the
/// only place where target format legality is checked; the
/// [`Converter`](crate::Converter) deliberately defers it until a file is
/// about to be encoded.
pub fn encoder_for(target: &str) -> Option<EncodeFn> {
	match target {
		"jpg" | "jpeg" => Some(jpeg::encode),
		"png" => Some(png::encode),
		"gif" => Some(gif::encode),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case::lower("jpg", "jpg")]
	#[case::upper("JPG", "jpg")]
	#[case::alias("jpeg", "jpg")]
	#[case::alias_upper("JPEG", "jpg")]
	#[case::png("png", "png")]
	#[case::gif("GIF", "gif")]
	#[case::unknown("bmp", "bmp")]
	fn canonical_ext_cases(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(canonical_ext(input), expected);
	}

	#[test]
	fn canonical_ext_distinguishes_formats() {
		assert_ne!(canonical_ext("jpg"), canonical_ext("png"));
	}

	#[rstest]
	#[case::jpg("jpg", SourceFormat::Jpg)]
	#[case::jpeg("jpeg", SourceFormat::Jpg)]
	#[case::mixed_case("Png", SourceFormat::Png)]
	#[case::gif("gif", SourceFormat::Gif)]
	fn parse_supported_formats(#[case] input: &str, #[case] expected: SourceFormat) {
		assert_eq!(input.parse::<SourceFormat>().unwrap(), expected);
	}

	#[rstest]
	#[case::bmp("bmp")]
	#[case::webp("webp")]
	#[case::empty("")]
	fn parse_rejects_unsupported_formats(#[case] input: &str) {
		assert!(input.parse::<SourceFormat>().is_err());
	}

	#[test]
	fn encoder_dispatch_covers_aliases_and_rejects_unknown() {
		assert!(encoder_for("jpg").is_some());
		assert!(encoder_for("jpeg").is_some());
		assert!(encoder_for("png").is_some());
		assert!(encoder_for("gif").is_some());
		assert!(encoder_for("webp").is_none());
		assert!(encoder_for("").is_none());
	}
}
