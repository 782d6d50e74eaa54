/// Advanced connector configuration form
///
/// Edits the scheduling settings: prune frequency (days), refresh frequency
/// (minutes) and an optional indexing start date. The [`State`] owns the
/// transient editing copy; every change bubbles up as an [`Event`] so the
/// host's copy is already current when its save action runs. There is no
/// submit step in this layer.
use chrono::NaiveDate;
use iced::widget::{button, column, row, text, text_input};
use iced::{Color, Element, Length};
use iced_aw::date_picker::Date;
use iced_aw::helpers::date_picker;

use crate::state::connector::ScheduleSettings;

/// Inline validation message for negative frequencies.
pub const MUST_BE_POSITIVE: &str = "Must be a positive number";
/// Inline validation message for text that is not a number at all.
pub const MUST_BE_A_NUMBER: &str = "Must be a number";

const PRUNE_DESCRIPTION: &str = "Checks all documents against the source to delete those that \
     no longer exist. Note: This process checks every document, so be cautious when increasing \
     frequency. Default is 30 days. Enter 0 to disable pruning for this connector.";

const REFRESH_DESCRIPTION: &str = "This is how frequently we pull new documents from the \
     source (in minutes). If you input 0, we will never pull new documents for this connector.";

const INDEXING_START_DESCRIPTION: &str = "Documents prior to this date will not be pulled in";

/// Local UI state for the advanced configuration form.
#[derive(Debug, Clone)]
pub struct State {
    prune_input: String,
    refresh_input: String,
    prune_error: Option<&'static str>,
    refresh_error: Option<&'static str>,
    indexing_start: Option<NaiveDate>,
    show_date_picker: bool,
}

/// Messages emitted directly by the form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    PruneFreqChanged(String),
    RefreshFreqChanged(String),
    OpenDatePicker,
    CancelDatePicker,
    IndexingStartPicked(Date),
    ClearIndexingStart,
}

/// Events propagated to the host on every committed change.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    PruneFreqChanged(i64),
    RefreshFreqChanged(i64),
    IndexingStartChanged(Option<NaiveDate>),
}

/// What a raw text field currently parses to.
enum ParsedFrequency {
    Value(i64),
    Empty,
    Invalid,
}

impl State {
    /// Seed the editing copy from the host's current values.
    pub fn new(settings: &ScheduleSettings) -> Self {
        Self {
            prune_input: settings.prune_freq_days.to_string(),
            refresh_input: settings.refresh_freq_mins.to_string(),
            prune_error: None,
            refresh_error: None,
            indexing_start: settings.indexing_start,
            show_date_picker: false,
        }
    }

    pub fn prune_error(&self) -> Option<&'static str> {
        self.prune_error
    }

    pub fn refresh_error(&self) -> Option<&'static str> {
        self.refresh_error
    }

    pub fn indexing_start(&self) -> Option<NaiveDate> {
        self.indexing_start
    }

    /// Update the form state and report the change to the host.
    ///
    /// Negative numbers show a validation message but are still passed
    /// through; the form is permissive and blocks nothing. Text that cannot
    /// become a number produces no event at all.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PruneFreqChanged(input) => {
                let (error, event) = match parse_frequency(&input) {
                    ParsedFrequency::Value(value) => (
                        (value < 0).then_some(MUST_BE_POSITIVE),
                        Event::PruneFreqChanged(value),
                    ),
                    ParsedFrequency::Empty => (None, Event::None),
                    ParsedFrequency::Invalid => (Some(MUST_BE_A_NUMBER), Event::None),
                };
                self.prune_input = input;
                self.prune_error = error;
                event
            }
            Message::RefreshFreqChanged(input) => {
                let (error, event) = match parse_frequency(&input) {
                    ParsedFrequency::Value(value) => (
                        (value < 0).then_some(MUST_BE_POSITIVE),
                        Event::RefreshFreqChanged(value),
                    ),
                    ParsedFrequency::Empty => (None, Event::None),
                    ParsedFrequency::Invalid => (Some(MUST_BE_A_NUMBER), Event::None),
                };
                self.refresh_input = input;
                self.refresh_error = error;
                event
            }
            Message::OpenDatePicker => {
                self.show_date_picker = true;
                Event::None
            }
            Message::CancelDatePicker => {
                self.show_date_picker = false;
                Event::None
            }
            Message::IndexingStartPicked(date) => {
                self.show_date_picker = false;
                let picked = NaiveDate::from(date);
                self.indexing_start = Some(picked);
                Event::IndexingStartChanged(Some(picked))
            }
            Message::ClearIndexingStart => {
                self.indexing_start = None;
                Event::IndexingStartChanged(None)
            }
        }
    }

    /// Render the form.
    pub fn view(&self) -> Element<'_, Message> {
        let title = text("Advanced Configuration").size(24);

        let prune_field = frequency_field(
            "Prune Frequency (days)",
            PRUNE_DESCRIPTION,
            &self.prune_input,
            self.prune_error,
            Message::PruneFreqChanged,
        );

        let refresh_field = frequency_field(
            "Refresh Frequency (minutes)",
            REFRESH_DESCRIPTION,
            &self.refresh_input,
            self.refresh_error,
            Message::RefreshFreqChanged,
        );

        let date_label = match self.indexing_start {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "No start date".to_string(),
        };

        let underlay = button(text(date_label).size(14))
            .padding(6)
            .on_press(Message::OpenDatePicker);

        let picker = date_picker(
            self.show_date_picker,
            self.indexing_start.map(Date::from).unwrap_or_else(Date::today),
            underlay,
            Message::CancelDatePicker,
            Message::IndexingStartPicked,
        );

        let mut date_row = row![picker].spacing(8);
        if self.indexing_start.is_some() {
            date_row = date_row.push(
                button(text("Clear").size(14))
                    .padding(6)
                    .on_press(Message::ClearIndexingStart),
            );
        }

        let date_field = column![
            text("Indexing Start Date").size(16),
            date_row,
            helper_text(INDEXING_START_DESCRIPTION),
        ]
        .spacing(6);

        column![title, prune_field, refresh_field, date_field]
            .spacing(24)
            .max_width(640)
            .into()
    }
}

/// A labeled numeric field with its description and optional inline error.
fn frequency_field<'a>(
    label: &'a str,
    description: &'a str,
    value: &'a str,
    error: Option<&'static str>,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input("0", value)
        .on_input(on_input)
        .padding(6)
        .width(Length::Fixed(120.0));

    let mut field = column![text(label).size(16), input, helper_text(description)].spacing(6);

    if let Some(message) = error {
        field = field.push(
            text(message)
                .size(14)
                .style(|_theme| iced::widget::text::Style {
                    color: Some(Color::from_rgb(0.9, 0.3, 0.3)),
                }),
        );
    }

    field.into()
}

fn helper_text(description: &str) -> Element<'_, Message> {
    text(description)
        .size(14)
        .style(|_theme| iced::widget::text::Style {
            color: Some(Color::from_rgb(0.6, 0.6, 0.6)),
        })
        .into()
}

fn parse_frequency(input: &str) -> ParsedFrequency {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return ParsedFrequency::Empty;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => ParsedFrequency::Value(value),
        Err(_) => ParsedFrequency::Invalid,
    }
}
