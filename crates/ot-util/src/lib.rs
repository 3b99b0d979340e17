//! Path, filename and duration helpers for the ot toolkit
//!
//! Pure string utilities: splitting repository-relative paths into safe
//! components, validating single filenames, and formatting elapsed-time
//! magnitudes for display. Nothing here touches the filesystem.

pub mod duration;
pub mod error;
pub mod filename;
pub mod path;

pub use duration::{HumanDuration, format_human_duration};
pub use error::{Error, ErrorKind, Result};
pub use filename::is_valid_filename;
pub use path::{split_and_validate, validate_components};
