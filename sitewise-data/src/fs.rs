//! Capability-based file access for dataset inputs.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a dataset file for reading with ambient authority.
///
/// # Errors
/// Returns the underlying I/O error when the file cannot be opened.
pub fn open_dataset_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Report whether `path` names an existing regular file.
///
/// A missing file yields an error of kind [`io::ErrorKind::NotFound`] so
/// callers can tell "absent" apart from "present but not a file".
///
/// # Errors
/// Returns I/O errors raised while opening the parent directory or reading
/// metadata.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
