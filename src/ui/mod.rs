// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`feedback`] - The feedback toast and its icons
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod feedback;
pub mod theming;
