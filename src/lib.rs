// SPDX-License-Identifier: MPL-2.0
//! `iced_feedback` is an animated feedback notification built with the Iced GUI framework.
//!
//! The [`lifecycle`] module holds a framework-agnostic controller that walks a
//! toast through its entrance, countdown and exit phases. The [`app`] and
//! [`ui`] modules wrap it in a small demo window.

#![doc(html_root_url = "https://docs.rs/iced_feedback/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
