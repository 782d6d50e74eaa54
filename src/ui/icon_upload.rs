/// Assistant icon selection and upload widget
///
/// Shows the existing persona image reference (if the host supplies one),
/// a drag-and-drop/browse upload zone, a preview of the selected file, a
/// Reset action and a "Remove current image" action. The host owns the
/// existing-image id and the removal flag; this widget only raises events.
///
/// Drag-and-drop arrives as window-level events (one `FileHovered` and one
/// `FileDropped` per file), routed in by the host. Hovered paths are batched
/// so a multi-file drop is evaluated as a single drop and rejected whole.
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, text, Image};
use iced::{Border, Color, Element, Length};
use rfd::FileDialog;

use crate::error::IconSelectError;
use crate::images::build_img_url;
use crate::state::persona::UploadedIcon;

/// A selected file together with its preview resource.
///
/// The `Handle` owns the preview bytes handed to the renderer; dropping it
/// (on reset or replacement) is what releases the preview.
#[derive(Debug, Clone)]
struct Selection {
    icon: UploadedIcon,
    preview: Handle,
}

/// Local UI state for the upload widget.
#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<Selection>,
    /// Files currently hovering over the window during a drag.
    hovered: Vec<PathBuf>,
    /// Files received so far for the drop in progress.
    pending_drop: Vec<PathBuf>,
}

/// Messages emitted by the widget (and window file events routed by the host).
#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
    FileHovered(PathBuf),
    FilesHoveredLeft,
    FileDropped(PathBuf),
    ResetPressed,
    RemoveExistingPressed,
}

/// Events propagated to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// A single valid file was selected; the host writes it into the
    /// save payload.
    FileSelected(UploadedIcon),
    /// The selection was reset; the host clears the payload slot.
    FileCleared,
    /// The user asked to remove the previously stored image. The host
    /// clears the existing-image id and sets the removal flag; nothing is
    /// deleted until its save action runs.
    ExistingImageRemoved,
    /// The drop or file was rejected; state is unchanged.
    Rejected(IconSelectError),
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// The file currently selected for upload, if any.
    pub fn selected_icon(&self) -> Option<&UploadedIcon> {
        self.selected.as_ref().map(|selection| &selection.icon)
    }

    /// Whether a drag is currently hovering the window.
    pub fn drag_active(&self) -> bool {
        !self.hovered.is_empty()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::BrowsePressed => {
                // Affordance-level restriction only; dropped files are not
                // extension-checked.
                let picked = FileDialog::new()
                    .set_title("Select Icon Image")
                    .add_filter("Images (.png, .jpg)", &["png", "jpg", "jpeg"])
                    .pick_file();

                match picked {
                    Some(path) => self.select_path(&path),
                    None => Event::None,
                }
            }
            Message::FileHovered(path) => {
                if !self.hovered.contains(&path) {
                    self.hovered.push(path);
                }
                Event::None
            }
            Message::FilesHoveredLeft => {
                self.hovered.clear();
                self.pending_drop.clear();
                Event::None
            }
            Message::FileDropped(path) => {
                self.pending_drop.push(path);
                // The window reports one event per file; the hover list
                // tells us how many files belong to this drop.
                if self.pending_drop.len() >= self.hovered.len() {
                    self.finalize_drop()
                } else {
                    Event::None
                }
            }
            Message::ResetPressed => {
                if self.selected.take().is_some() {
                    Event::FileCleared
                } else {
                    Event::None
                }
            }
            Message::RemoveExistingPressed => Event::ExistingImageRemoved,
        }
    }

    /// Evaluate the accumulated drop as a whole. Anything other than exactly
    /// one file rejects the entire drop.
    fn finalize_drop(&mut self) -> Event {
        let paths = std::mem::take(&mut self.pending_drop);
        self.hovered.clear();

        match paths.as_slice() {
            [] => Event::Rejected(IconSelectError::EmptyDrop),
            [path] => self.select_path(path),
            _ => Event::Rejected(IconSelectError::MultipleFiles(paths.len())),
        }
    }

    /// Read and decode one file, replacing any previous selection (and its
    /// preview handle) on success. Failures leave the selection untouched.
    fn select_path(&mut self, path: &Path) -> Event {
        match UploadedIcon::from_path(path) {
            Ok(icon) => {
                let preview = Handle::from_bytes(icon.bytes.clone());
                self.selected = Some(Selection {
                    icon: icon.clone(),
                    preview,
                });
                Event::FileSelected(icon)
            }
            Err(err) => Event::Rejected(err),
        }
    }

    /// Render the selection surface. `existing_image_id` is the host-owned
    /// reference to a previously stored image.
    pub fn view<'a>(&'a self, existing_image_id: Option<&'a str>) -> Element<'a, Message> {
        let mut content = column![text("Or Upload Image").size(16)].spacing(8);

        if let Some(image_id) = existing_image_id {
            content = content.push(
                row![
                    text("Current image:").size(14),
                    dim_text(build_img_url(image_id)),
                ]
                .spacing(8),
            );
        }

        let mut actions = row![].spacing(8);

        match &self.selected {
            None => {
                actions = actions.push(self.drop_zone());
            }
            Some(selection) => {
                let preview = row![
                    text("Uploaded Image:").size(14),
                    Image::new(selection.preview.clone())
                        .width(Length::Fixed(48.0))
                        .height(Length::Fixed(48.0)),
                    dim_text(format!(
                        "{} ({}x{})",
                        selection.icon.file_name, selection.icon.width, selection.icon.height
                    )),
                ]
                .spacing(8)
                .align_y(iced::Alignment::Center);

                actions = actions.push(
                    column![
                        preview,
                        button(text("Reset").size(14))
                            .padding(6)
                            .on_press(Message::ResetPressed),
                    ]
                    .spacing(8),
                );
            }
        }

        if existing_image_id.is_some() {
            actions = actions.push(
                button(text("Remove current image").size(14))
                    .padding(8)
                    .on_press(Message::RemoveExistingPressed),
            );
        }

        content = content.push(actions);
        content = content.push(dim_text(
            "Uploading an image will override the generated icon.".to_string(),
        ));

        content.into()
    }

    /// The bordered drop target, highlighted while a drag hovers the window.
    fn drop_zone(&self) -> Element<'_, Message> {
        let drag_active = self.drag_active();

        let inner = column![
            text("Upload a .png or .jpg file").size(14),
            text("Drop it here, or").size(12),
            button(text("Browse").size(14))
                .padding(6)
                .on_press(Message::BrowsePressed),
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center);

        container(inner)
            .padding(12)
            .width(Length::Fixed(200.0))
            .style(move |theme: &iced::Theme| {
                let border_color = if drag_active {
                    theme.palette().primary
                } else {
                    Color::from_rgb(0.45, 0.45, 0.45)
                };
                container::Style {
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 6.0.into(),
                    },
                    ..container::Style::default()
                }
            })
            .into()
    }
}

fn dim_text<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(14)
        .style(|_theme| iced::widget::text::Style {
            color: Some(Color::from_rgb(0.6, 0.6, 0.6)),
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::persona::tiny_png;

    fn write_png(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, tiny_png()).unwrap();
        path
    }

    #[test]
    fn test_single_file_drop_selects_and_builds_preview() {
        let path = write_png("icon_upload_single.png");
        let mut state = State::new();

        state.update(Message::FileHovered(path.clone()));
        assert!(state.drag_active());

        let event = state.update(Message::FileDropped(path.clone()));
        match event {
            Event::FileSelected(icon) => assert_eq!(icon.file_name, "icon_upload_single.png"),
            other => panic!("expected FileSelected, got {other:?}"),
        }
        assert!(state.selected_icon().is_some());
        assert!(!state.drag_active());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_multi_file_drop_is_rejected_whole() {
        let first = write_png("icon_upload_multi_a.png");
        let second = write_png("icon_upload_multi_b.png");
        let mut state = State::new();

        state.update(Message::FileHovered(first.clone()));
        state.update(Message::FileHovered(second.clone()));

        // First drop event: the drop is still incomplete.
        assert_eq!(state.update(Message::FileDropped(first.clone())), Event::None);
        let event = state.update(Message::FileDropped(second.clone()));
        assert_eq!(
            event,
            Event::Rejected(IconSelectError::MultipleFiles(2))
        );
        assert!(state.selected_icon().is_none());

        std::fs::remove_file(&first).ok();
        std::fs::remove_file(&second).ok();
    }

    #[test]
    fn test_rejected_drop_leaves_previous_selection_untouched() {
        let kept = write_png("icon_upload_kept.png");
        let extra_a = write_png("icon_upload_extra_a.png");
        let extra_b = write_png("icon_upload_extra_b.png");
        let mut state = State::new();

        state.update(Message::FileHovered(kept.clone()));
        state.update(Message::FileDropped(kept.clone()));

        state.update(Message::FileHovered(extra_a.clone()));
        state.update(Message::FileHovered(extra_b.clone()));
        state.update(Message::FileDropped(extra_a.clone()));
        let event = state.update(Message::FileDropped(extra_b.clone()));

        assert!(matches!(event, Event::Rejected(_)));
        assert_eq!(
            state.selected_icon().unwrap().file_name,
            "icon_upload_kept.png"
        );

        for path in [&kept, &extra_a, &extra_b] {
            std::fs::remove_file(path).ok();
        }
    }

    #[test]
    fn test_empty_drop_is_rejected() {
        let mut state = State::new();
        assert_eq!(
            state.finalize_drop(),
            Event::Rejected(IconSelectError::EmptyDrop)
        );
    }

    #[test]
    fn test_unreadable_file_is_rejected() {
        let mut state = State::new();
        let path = std::env::temp_dir().join("icon_upload_missing.png");
        let event = state.update(Message::FileDropped(path));
        assert!(matches!(
            event,
            Event::Rejected(IconSelectError::Unreadable { .. })
        ));
        assert!(state.selected_icon().is_none());
    }

    #[test]
    fn test_reset_clears_selection_and_preview() {
        let path = write_png("icon_upload_reset.png");
        let mut state = State::new();
        state.update(Message::FileDropped(path.clone()));
        assert!(state.selected.is_some());

        let event = state.update(Message::ResetPressed);
        assert_eq!(event, Event::FileCleared);
        assert!(state.selected.is_none());

        // A second reset has nothing to clear.
        assert_eq!(state.update(Message::ResetPressed), Event::None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_replacing_a_selection_swaps_the_preview() {
        let first = write_png("icon_upload_first.png");
        let second = write_png("icon_upload_second.png");
        let mut state = State::new();

        state.update(Message::FileDropped(first.clone()));
        state.update(Message::FileDropped(second.clone()));
        assert_eq!(
            state.selected_icon().unwrap().file_name,
            "icon_upload_second.png"
        );

        std::fs::remove_file(&first).ok();
        std::fs::remove_file(&second).ok();
    }

    #[test]
    fn test_remove_existing_raises_event_and_keeps_selection() {
        let path = write_png("icon_upload_keep_on_remove.png");
        let mut state = State::new();
        state.update(Message::FileDropped(path.clone()));

        let event = state.update(Message::RemoveExistingPressed);
        assert_eq!(event, Event::ExistingImageRemoved);
        assert!(state.selected_icon().is_some());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_hover_leave_cancels_the_pending_drop() {
        let path = write_png("icon_upload_cancelled.png");
        let mut state = State::new();

        state.update(Message::FileHovered(path.clone()));
        state.update(Message::FilesHoveredLeft);
        assert!(!state.drag_active());
        assert!(state.pending_drop.is_empty());

        std::fs::remove_file(&path).ok();
    }
}
