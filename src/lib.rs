//! Recursively convert images in a directory tree between JPEG, PNG and GIF.
//!
//! The [`Converter`] validates its configuration once, walks the given
//! directory depth-first and rewrites every file whose extension matches the
//! source format as a sibling file in the target format. It processes files
//! one at a time and aborts on the first error; it never deletes, renames or
//! modifies existing files, and never writes outside the given tree.
//!
//! ```no_run
//! use imgconv::Converter;
//!
//! # fn main() -> Result<(), imgconv::ConvertError> {
//! let converted = Converter::new("/tmp/imgs", "png", "gif")?.run()?;
//! println!("{converted} file(s) converted");
//! # Ok(())
//! # }
//! ```

mod converter;
mod error;
mod format;

pub use converter::Converter;
pub use error::{ConfigError, ConvertError};
pub use format::{SourceFormat, canonical_ext};
