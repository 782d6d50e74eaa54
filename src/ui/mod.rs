/// UI components module
///
/// Each component follows the same pattern: a `State` struct owning the
/// local form state, a `Message` enum for widget interactions, and an
/// `Event` enum the host applies to its own copy of the values.

pub mod advanced_form;
pub mod icon_upload;
