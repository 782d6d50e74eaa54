/// Image URL builder collaborator
///
/// Maps an opaque stored-image identifier to the URL the chat file API
/// serves it under. Pure function, no side effects.

/// Build the displayable URL for a stored image id.
pub fn build_img_url(image_id: &str) -> String {
    format!("/api/chat/file/{image_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_img_url() {
        assert_eq!(build_img_url("abc-123"), "/api/chat/file/abc-123");
    }
}
