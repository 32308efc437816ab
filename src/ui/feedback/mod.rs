// SPDX-License-Identifier: MPL-2.0
//! Visual layer of the feedback notification.
//!
//! # Components
//!
//! - [`toast`] - renders a [`Frame`](crate::lifecycle::Frame) for each phase
//! - [`icons`] - category icons and the close cross
//!
//! Category maps to icon and accent color, position maps to window alignment.
//! Timing lives entirely in [`crate::lifecycle`].

pub mod icons;
pub mod toast;

pub use toast::Message as ToastMessage;
