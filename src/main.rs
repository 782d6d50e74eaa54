use iced::widget::{button, column, container, scrollable, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};
use serde::Serialize;

mod error;
mod images;
mod notify;
mod state;
mod ui;

use notify::Notification;
use state::connector::ScheduleSettings;
use state::persona::UploadedIcon;
use ui::{advanced_form, icon_upload};

/// Everything the parent save action needs, gathered from both components.
/// Serialized as JSON on save; the actual upload/persistence happens outside
/// this layer.
#[derive(Debug, Clone, Serialize)]
struct SavePayload {
    schedule: ScheduleSettings,
    uploaded_image: Option<UploadedIcon>,
    existing_image_id: Option<String>,
    remove_persona_image: bool,
}

/// Host page state: the parent-owned values plus the two embedded components.
struct ConnectorAdmin {
    /// Parent-owned scheduling values, kept current by form events.
    schedule: ScheduleSettings,
    /// Opaque reference to the previously stored persona image.
    existing_image_id: Option<String>,
    /// Request-to-remove flag; acted on at save time, never before.
    remove_persona_image: bool,
    /// The save payload slot for a freshly selected icon file.
    uploaded_image: Option<UploadedIcon>,

    advanced: advanced_form::State,
    icon: icon_upload::State,

    /// Current transient notification, if any.
    popup: Option<Notification>,
    /// Status line shown at the bottom of the page.
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    AdvancedForm(advanced_form::Message),
    IconUpload(icon_upload::Message),
    Save,
    DismissNotification,
}

impl ConnectorAdmin {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Stands in for values a parent page would fetch before embedding
        // the settings form.
        let schedule = ScheduleSettings::default();
        let existing_image_id = Some("persona-3f8a".to_string());

        println!("⚙️  Connector admin panel initialized");

        (
            ConnectorAdmin {
                advanced: advanced_form::State::new(&schedule),
                icon: icon_upload::State::new(),
                schedule,
                existing_image_id,
                remove_persona_image: false,
                uploaded_image: None,
                popup: None,
                status: "Ready.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AdvancedForm(message) => {
                match self.advanced.update(message) {
                    advanced_form::Event::None => {}
                    advanced_form::Event::PruneFreqChanged(days) => {
                        self.schedule.prune_freq_days = days;
                    }
                    advanced_form::Event::RefreshFreqChanged(mins) => {
                        self.schedule.refresh_freq_mins = mins;
                    }
                    advanced_form::Event::IndexingStartChanged(date) => {
                        self.schedule.indexing_start = date;
                    }
                }
                Task::none()
            }
            Message::IconUpload(message) => {
                match self.icon.update(message) {
                    icon_upload::Event::None => {}
                    icon_upload::Event::FileSelected(icon) => {
                        self.status = format!("Selected {} for upload.", icon.file_name);
                        self.uploaded_image = Some(icon);
                    }
                    icon_upload::Event::FileCleared => {
                        self.uploaded_image = None;
                    }
                    icon_upload::Event::ExistingImageRemoved => {
                        self.remove_persona_image = true;
                        self.existing_image_id = None;
                    }
                    icon_upload::Event::Rejected(err) => {
                        eprintln!("⚠️  Icon selection rejected: {err}");
                        self.popup = Some(Notification::error(err.to_string()));
                    }
                }
                Task::none()
            }
            Message::Save => {
                let payload = self.save_payload();
                match serde_json::to_string_pretty(&payload) {
                    Ok(json) => {
                        println!("💾 Save payload:\n{json}");
                        self.status = "Settings handed off to save action.".to_string();
                        self.popup = Some(Notification::info("Settings saved"));
                    }
                    Err(err) => {
                        eprintln!("⚠️  Could not serialize save payload: {err}");
                        self.popup = Some(Notification::error("Could not build save payload"));
                    }
                }
                Task::none()
            }
            Message::DismissNotification => {
                self.popup = None;
                Task::none()
            }
        }
    }

    /// Gather the parent-owned values for the save action.
    fn save_payload(&self) -> SavePayload {
        SavePayload {
            schedule: self.schedule,
            uploaded_image: self.uploaded_image.clone(),
            existing_image_id: self.existing_image_id.clone(),
            remove_persona_image: self.remove_persona_image,
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let mut page = column![].spacing(24).max_width(720);

        if let Some(popup) = &self.popup {
            page = page.push(popup.view(Message::DismissNotification));
        }

        page = page
            .push(text("Connector Settings").size(32))
            .push(self.advanced.view().map(Message::AdvancedForm))
            .push(
                self.icon
                    .view(self.existing_image_id.as_deref())
                    .map(Message::IconUpload),
            )
            .push(
                button(text("Save").size(16))
                    .padding(10)
                    .on_press(Message::Save),
            )
            .push(text(&self.status).size(14));

        let content = container(page.align_x(Alignment::Start).padding(40))
            .width(Length::Fill)
            .center_x(Length::Fill);

        scrollable(content).into()
    }

    /// Route window-level file drag events to the upload widget.
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(window::Event::FileHovered(path)) => {
                Some(Message::IconUpload(icon_upload::Message::FileHovered(path)))
            }
            iced::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::IconUpload(icon_upload::Message::FileDropped(path)))
            }
            iced::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::IconUpload(icon_upload::Message::FilesHoveredLeft))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Connector Admin",
        ConnectorAdmin::update,
        ConnectorAdmin::view,
    )
    .theme(ConnectorAdmin::theme)
    .subscription(ConnectorAdmin::subscription)
    .centered()
    .run_with(ConnectorAdmin::new)
}
