// SPDX-License-Identifier: MPL-2.0
//! Category icons and the close cross, as inline SVG.
//!
//! Handles are created once on first access and reused thereafter.

use crate::lifecycle::Category;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

const SUCCESS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/><polyline points="22 4 12 14.01 9 11.01"/></svg>"#;

const ERROR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="15" y1="9" x2="9" y2="15"/><line x1="9" y1="9" x2="15" y2="15"/></svg>"#;

const WARNING_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/></svg>"#;

const INFO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/></svg>"#;

const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;

macro_rules! cached_handle {
    ($source:expr) => {{
        static HANDLE: OnceLock<Handle> = OnceLock::new();
        HANDLE
            .get_or_init(|| Handle::from_memory($source.as_bytes()))
            .clone()
    }};
}

#[cfg(test)]
fn source(category: Category) -> &'static str {
    match category {
        Category::Success => SUCCESS_SVG,
        Category::Error => ERROR_SVG,
        Category::Warning => WARNING_SVG,
        Category::Info => INFO_SVG,
    }
}

fn handle(category: Category) -> Handle {
    match category {
        Category::Success => cached_handle!(SUCCESS_SVG),
        Category::Error => cached_handle!(ERROR_SVG),
        Category::Warning => cached_handle!(WARNING_SVG),
        Category::Info => cached_handle!(INFO_SVG),
    }
}

/// Category icon tinted with `color`, `size` pixels square.
pub fn category<'a>(category: Category, size: f32, color: Color) -> Svg<'a, Theme> {
    tinted(handle(category), size, color)
}

/// Close cross tinted with `color`.
pub fn cross<'a>(size: f32, color: Color) -> Svg<'a, Theme> {
    tinted(cached_handle!(CROSS_SVG), size, color)
}

fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
