//! Error types for the conversion pipeline.
//!
//! Construction failures ([`ConfigError`]) are separated from failures during
//! the walk itself ([`ConvertError`]) so callers can tell a bad configuration
//! apart from a bad filesystem or a bad file. Every variant that wraps a lower
//! level failure keeps it reachable through [`std::error::Error::source`].

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors raised while validating a [`Converter`](crate::Converter)
/// configuration. No file is read or written when one of these occurs.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("directory {path:?} does not exist")]
	DirNotFound {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to get information about {path:?}")]
	Stat {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("{path:?} must be a directory")]
	NotADirectory { path: PathBuf },

	#[error("unsupported source format {format:?}")]
	UnsupportedFormat { format: String },

	#[error("source format {from:?} must be different from target format {to:?}")]
	SameFormat { from: String, to: String },
}

/// Errors raised while walking the directory tree and transcoding files.
///
/// Every variant is fatal: the first one encountered aborts the whole run.
#[derive(Debug, Error)]
pub enum ConvertError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("failed to walk directory tree")]
	Walk {
		#[source]
		source: walkdir::Error,
	},

	#[error("failed to read {path:?}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to decode {path:?} as an image")]
	Decode {
		path: PathBuf,
		#[source]
		source: image::ImageError,
	},

	#[error("unknown target format {format:?}")]
	UnsupportedTarget { format: String },

	#[error("failed to create {path:?}")]
	Create {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to encode {path:?} as {format:?}")]
	Encode {
		path: PathBuf,
		format: String,
		#[source]
		source: image::ImageError,
	},

	#[error("failed to write {path:?}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}
