// SPDX-License-Identifier: MPL-2.0
//! Rendering of a feedback notification.
//!
//! The widget is a pure function of a [`Frame`]: the controller decides the
//! phase, this module decides what each phase looks like.
//!
//! - `Hidden`, `Mounted`: nothing (mounted is off-screen for one step)
//! - `CircleIn`, `Collapsing`: a circle holding the category icon
//! - `CircleOut`: the same circle, fading out
//! - `Expanded`, `Visible`: the card with message, close button and countdown bar

use super::icons;
use crate::lifecycle::{Category, Frame, Phase, Position};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Interactions emitted by the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Click anywhere on the surface.
    SurfaceClicked,
    /// Click on the close button.
    ClosePressed,
    /// Pointer entered (`true`) or left (`false`) the surface.
    Hovered(bool),
}

/// Accent color for a category.
#[must_use]
pub fn accent(category: Category) -> Color {
    match category {
        Category::Success => palette::SUCCESS_500,
        Category::Error => palette::ERROR_500,
        Category::Warning => palette::WARNING_500,
        Category::Info => palette::INFO_500,
    }
}

/// Window alignment for a screen anchor.
#[must_use]
pub fn alignment(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    let vertical = if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    };
    (horizontal, vertical)
}

/// Opacity of the shape in a given phase.
#[must_use]
pub fn shape_opacity(phase: Phase) -> f32 {
    match phase {
        Phase::Hidden | Phase::Mounted => opacity::TRANSPARENT,
        Phase::CircleOut => opacity::OVERLAY_MEDIUM,
        Phase::CircleIn | Phase::Expanded | Phase::Visible | Phase::Collapsing => opacity::OPAQUE,
    }
}

/// Renders the toast anchored inside a full-window layer.
pub fn view_overlay<'a>(frame: Frame<'a>) -> Element<'a, Message> {
    let (horizontal, vertical) = alignment(frame.position);

    Container::new(view(frame))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(horizontal)
        .align_y(vertical)
        .padding(sizing::TOAST_MARGIN)
        .into()
}

/// Renders the toast shape for the frame's phase.
pub fn view<'a>(frame: Frame<'a>) -> Element<'a, Message> {
    let shape = match frame.phase {
        Phase::Hidden | Phase::Mounted => return Space::new().into(),
        Phase::CircleIn | Phase::Collapsing | Phase::CircleOut => circle(frame),
        Phase::Expanded | Phase::Visible => card(frame),
    };

    mouse_area(shape)
        .on_press(Message::SurfaceClicked)
        .on_enter(Message::Hovered(true))
        .on_exit(Message::Hovered(false))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn circle<'a>(frame: Frame<'a>) -> Element<'a, Message> {
    let alpha = shape_opacity(frame.phase);
    let accent = Color {
        a: alpha,
        ..accent(frame.category)
    };

    Container::new(icons::category(frame.category, sizing::ICON_MD, accent))
        .width(Length::Fixed(sizing::TOAST_CIRCLE))
        .height(Length::Fixed(sizing::TOAST_CIRCLE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| surface_style(theme, accent, radius::FULL, alpha))
        .into()
}

fn card<'a>(frame: Frame<'a>) -> Element<'a, Message> {
    let accent = accent(frame.category);

    let close = button(icons::cross(sizing::ICON_SM, palette::GRAY_400))
        .on_press(Message::ClosePressed)
        .padding(spacing::XXS)
        .style(close_button_style);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::category(frame.category, sizing::ICON_MD, accent))
        .push(
            Container::new(text(frame.message).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(row)
        .push(progress_track(frame.progress, accent));

    Container::new(body)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| surface_style(theme, accent, radius::LG, opacity::SURFACE))
        .into()
}

/// Width in pixels of the filled part of the countdown bar.
#[must_use]
pub fn progress_width(progress: f32, track_width: f32) -> f32 {
    (progress.clamp(0.0, 100.0) / 100.0) * track_width
}

fn progress_track<'a>(progress: f32, accent: Color) -> Element<'a, Message> {
    let track_width = sizing::TOAST_WIDTH - 2.0 * spacing::SM;
    let fill = Container::new(Space::new())
        .width(Length::Fixed(progress_width(progress, track_width)))
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(accent)),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Container::new(fill)
        .width(Length::Fixed(track_width))
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn surface_style(theme: &Theme, accent: Color, corner: f32, alpha: f32) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..base })),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
