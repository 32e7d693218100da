//! The conversion pipeline: configuration validation, recursive directory
//! walk and per-file transcoding.
//!
//! A [`Converter`] is immutable after construction. Validation happens once
//! in [`Converter::new`]; [`Converter::run`] then walks the tree and rewrites
//! every file whose canonical extension matches the source format. The first
//! error of any kind aborts the whole run.

use crate::error::{ConfigError, ConvertError};
use crate::format::{self, SourceFormat, canonical_ext};
use std::{
	fs::{self, File},
	io::{self, BufWriter, Write},
	path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Recursively converts every image of one format under a directory into
/// another format, writing each result as a sibling file with the extension
/// swapped. Source files are never modified, renamed or deleted.
///
/// ```no_run
/// use imgconv::Converter;
///
/// # fn main() -> Result<(), imgconv::ConvertError> {
/// let converter = Converter::new("./photos", "png", "jpg")?;
/// let converted = converter.run()?;
/// println!("{converted} file(s) converted");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Converter {
	root: PathBuf,
	source: SourceFormat,
	target: String,
}

impl Converter {
	/// Validates the configuration and builds a converter.
	///
	/// `root` must exist and be a directory. `source` must name a supported
	/// format; `target` is only required to differ from `source` after
	/// canonicalization — whether it names a known encoder is checked when
	/// the first file is encoded. Both format strings are case-insensitive.
	pub fn new(root: impl AsRef<Path>, source: &str, target: &str) -> Result<Self, ConfigError> {
		let root = root.as_ref().to_path_buf();

		let metadata = fs::metadata(&root).map_err(|source| {
			if source.kind() == io::ErrorKind::NotFound {
				ConfigError::DirNotFound { path: root.clone(), source }
			} else {
				ConfigError::Stat { path: root.clone(), source }
			}
		})?;
		if !metadata.is_dir() {
			return Err(ConfigError::NotADirectory { path: root });
		}

		let source_format: SourceFormat = source.parse()?;
		let target = target.trim().to_lowercase();
		if canonical_ext(&target) == source_format.as_extension() {
			return Err(ConfigError::SameFormat {
				from: source.to_string(),
				to: target,
			});
		}

		Ok(Converter {
			root,
			source: source_format,
			target,
		})
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	pub fn source_format(&self) -> SourceFormat {
		self.source
	}

	/// The lowercased target format string, used verbatim as the extension of
	/// every file this converter writes.
	pub fn target_extension(&self) -> &str {
		&self.target
	}

	/// Walks the root directory depth-first and transcodes every matching
	/// file, returning the number of files written.
	///
	/// A run that finds no matching file succeeds with `Ok(0)`. Any failure
	/// (walking, reading, decoding, creating or encoding) aborts immediately
	/// and files after it in walk order are left untouched.
	pub fn run(&self) -> Result<u64, ConvertError> {
		let mut converted = 0;
		for entry in WalkDir::new(&self.root) {
			let entry = entry.map_err(|source| ConvertError::Walk { source })?;
			if entry.file_type().is_dir() {
				continue;
			}
			let path = entry.path();
			if !self.matches(path) {
				continue;
			}
			self.transcode(path)?;
			converted += 1;
		}
		log::info!("converted {converted} file(s) under {:?}", self.root);
		Ok(converted)
	}

	/// A file matches if its extension canonicalizes to the source format's
	/// canonical extension. Files without an extension never match.
	fn matches(&self, path: &Path) -> bool {
		path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| canonical_ext(ext) == self.source.as_extension())
	}

	/// Decodes `path` by content sniffing and re-encodes it into a sibling
	/// file carrying the target extension. The destination is only created
	/// once decoding has succeeded.
	fn transcode(&self, path: &Path) -> Result<(), ConvertError> {
		let bytes = fs::read(path).map_err(|source| ConvertError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let image = image::load_from_memory(&bytes).map_err(|source| ConvertError::Decode {
			path: path.to_path_buf(),
			source,
		})?;
		drop(bytes);

		let encode = format::encoder_for(&self.target).ok_or_else(|| ConvertError::UnsupportedTarget {
			format: self.target.clone(),
		})?;

		let dest = path.with_extension(&self.target);
		let file = File::create(&dest).map_err(|source| ConvertError::Create {
			path: dest.clone(),
			source,
		})?;
		let mut writer = BufWriter::new(file);
		encode(&image, &mut writer).map_err(|source| ConvertError::Encode {
			path: dest.clone(),
			format: self.target.clone(),
			source,
		})?;
		log::debug!("converted {path:?} -> {dest:?}");
		writer.flush().map_err(|source| ConvertError::Write { path: dest, source })
	}
}
