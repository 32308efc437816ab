// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo page.
//!
//! The page offers one trigger button per category and pickers for the
//! anchor and countdown. The toast is stacked above it while active.

use super::Message;
use crate::config::DURATION_PRESETS_MS;
use crate::lifecycle::{Category, Controller, Countdown, Position};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::feedback::toast;
use iced::widget::{button, pick_list, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};
use std::fmt;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub controller: &'a Controller,
    pub position: Position,
    pub countdown: Countdown,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .max_width(720.0)
        .push(hero())
        .push(triggers())
        .push(options(ctx.position, ctx.countdown));

    let page = Container::new(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut layers = Stack::new().push(page);
    if ctx.controller.is_active() {
        layers = layers.push(toast::view_overlay(ctx.controller.frame()).map(Message::Toast));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn hero<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new("Feedback Toast").size(typography::TITLE_LG))
        .push(
            Text::new(
                "Animated feedback notification with auto-dismiss, a synced progress \
                 bar, and keyboard dismissal with Escape.",
            )
            .size(typography::BODY),
        )
        .into()
}

fn triggers<'a>() -> Element<'a, Message> {
    let buttons = Category::ALL.into_iter().fold(
        Row::new().spacing(spacing::SM),
        |row, category| {
            row.push(
                button(text(label(category)).size(typography::BODY))
                    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::Show(category))
                    .style(move |theme: &Theme, status| trigger_style(theme, status, category)),
            )
        },
    );

    section(
        "Try it out",
        "Click any button to trigger a notification.",
        buttons.into(),
    )
}

fn options<'a>(position: Position, countdown: Countdown) -> Element<'a, Message> {
    let durations: Vec<Countdown> = DURATION_PRESETS_MS
        .into_iter()
        .map(|millis| Countdown::from_millis(millis as i64))
        .collect();

    let position_picker = labeled(
        "Position",
        pick_list(
            Position::ALL.map(PositionChoice),
            Some(PositionChoice(position)),
            |choice| Message::PositionSelected(choice.0),
        )
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::PICKER_WIDTH))
            .into(),
    );
    let duration_picker = labeled(
        "Duration",
        pick_list(durations, Some(countdown), Message::DurationSelected)
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::PICKER_WIDTH))
            .into(),
    );

    section(
        "Options",
        "Changing the duration while a notification is showing restarts it.",
        Row::new()
            .spacing(spacing::LG)
            .push(position_picker)
            .push(duration_picker)
            .into(),
    )
}

fn section<'a>(
    title: &'a str,
    description: &'a str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(Text::new(description).size(typography::BODY))
        .push(body)
        .into()
}

fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(control)
        .into()
}

/// Picker entry showing an anchor by its label rather than its config name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PositionChoice(Position);

impl fmt::Display for PositionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

/// Button caption for a category.
#[must_use]
pub fn label(category: Category) -> &'static str {
    match category {
        Category::Success => "Success",
        Category::Error => "Error",
        Category::Warning => "Warning",
        Category::Info => "Info",
    }
}

fn trigger_style(_theme: &Theme, status: button::Status, category: Category) -> button::Style {
    let accent = toast::accent(category);
    let background = match status {
        button::Status::Hovered => Color { a: 0.85, ..accent },
        button::Status::Pressed => Color { a: 0.7, ..accent },
        button::Status::Disabled => Color { a: 0.4, ..accent },
        button::Status::Active => accent,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}
