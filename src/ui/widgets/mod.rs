// SPDX-License-Identifier: MPL-2.0
pub mod loading_indicator;

pub use loading_indicator::LoadingIndicator;
