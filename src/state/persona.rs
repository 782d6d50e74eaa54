/// Persona icon payload types
///
/// A persona (a configured assistant identity) may carry a custom icon.
/// The upload widget owns the selected file transiently; at save time the
/// host hands the whole payload to the parent save action.
use std::path::Path;

use serde::Serialize;

use crate::error::IconSelectError;

/// An icon image file selected by the user, held in memory until save.
///
/// Bytes are kept verbatim for the eventual upload; width/height come from
/// decoding them once at selection time, which doubles as the check that a
/// preview can be rendered at all.
#[derive(Clone, PartialEq, Serialize)]
pub struct UploadedIcon {
    pub file_name: String,
    #[serde(skip_serializing)]
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl UploadedIcon {
    /// Read and decode an icon file from disk.
    ///
    /// The read and decode both complete before this returns; there is no
    /// async transition in this layer.
    pub fn from_path(path: &Path) -> Result<Self, IconSelectError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let bytes = std::fs::read(path).map_err(|err| IconSelectError::Unreadable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|_| IconSelectError::Undecodable {
                file_name: file_name.clone(),
            })?;

        Ok(Self {
            file_name,
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }
}

// Skip the raw bytes in debug output
impl std::fmt::Debug for UploadedIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedIcon")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Encode a tiny valid PNG for tests.
#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    use std::io::Cursor;

    let img = image::RgbaImage::from_pixel(2, 3, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_reads_and_decodes() {
        let dir = std::env::temp_dir();
        let path = dir.join("connector_admin_icon_test.png");
        std::fs::write(&path, tiny_png()).unwrap();

        let icon = UploadedIcon::from_path(&path).unwrap();
        assert_eq!(icon.file_name, "connector_admin_icon_test.png");
        assert_eq!((icon.width, icon.height), (2, 3));
        assert!(!icon.bytes.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_path_missing_file_is_unreadable() {
        let path = std::env::temp_dir().join("connector_admin_does_not_exist.png");
        match UploadedIcon::from_path(&path) {
            Err(IconSelectError::Unreadable { .. }) => {}
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_from_path_non_image_is_undecodable() {
        let path = std::env::temp_dir().join("connector_admin_not_an_image.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        match UploadedIcon::from_path(&path) {
            Err(IconSelectError::Undecodable { file_name }) => {
                assert_eq!(file_name, "connector_admin_not_an_image.png");
            }
            other => panic!("expected Undecodable, got {other:?}"),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_serialization_skips_bytes() {
        let icon = UploadedIcon {
            file_name: "icon.png".into(),
            bytes: vec![1, 2, 3],
            width: 2,
            height: 3,
        };
        let json = serde_json::to_string(&icon).unwrap();
        assert!(json.contains("icon.png"));
        assert!(!json.contains("bytes"));
    }
}
