/// Errors raised while selecting an icon image
///
/// All of these are non-fatal: the component leaves its state untouched and
/// the host surfaces the error as a transient notification.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IconSelectError {
    /// More than one file arrived in a single drop.
    /// The whole drop is rejected rather than silently taking the first file.
    #[error("Only one file can be uploaded at a time ({0} files dropped)")]
    MultipleFiles(usize),

    /// A drop finalized with no files in it.
    #[error("No file was provided")]
    EmptyDrop,

    /// The file exists as a path but could not be read from disk.
    #[error("Could not read {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// The bytes are not a decodable image, so no preview can be shown.
    #[error("{file_name} is not a supported image")]
    Undecodable { file_name: String },
}
