/// Transient notification collaborator
///
/// Fire-and-forget popups: a severity tag plus a message string. The host
/// keeps at most one current notification and renders it as a dismissable
/// banner above the page content.
use iced::widget::{button, container, row, text};
use iced::{Background, Border, Color, Element, Length};

/// How loudly to present the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Render the notification banner. `on_dismiss` is sent when the user
    /// closes it.
    pub fn view<'a, Message: Clone + 'a>(&'a self, on_dismiss: Message) -> Element<'a, Message> {
        let tint = match self.severity {
            Severity::Error => Color::from_rgb(0.75, 0.15, 0.15),
            Severity::Info => Color::from_rgb(0.15, 0.35, 0.65),
        };

        let content = row![
            text(&self.message).size(14).width(Length::Fill),
            button(text("Dismiss").size(12)).on_press(on_dismiss),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center);

        container(content)
            .padding(10)
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(Color { a: 0.9, ..tint })),
                text_color: Some(Color::WHITE),
                border: Border {
                    radius: 4.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_tag_severity() {
        assert_eq!(Notification::error("boom").severity, Severity::Error);
        assert_eq!(Notification::info("ok").severity, Severity::Info);
        assert_eq!(Notification::error("boom").message, "boom");
    }
}
