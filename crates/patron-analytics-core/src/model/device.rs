// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Device and runtime snapshot vocabulary for session context.

use serde::{Deserialize, Serialize};

/// Physical orientation of the device at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
	FaceDown,
	FaceUp,
	LandscapeLeft,
	LandscapeRight,
	Portrait,
	PortraitUpsideDown,
	Unknown,
}

impl Orientation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Orientation::FaceDown => "Face Down",
			Orientation::FaceUp => "Face Up",
			Orientation::LandscapeLeft => "Landscape Left",
			Orientation::LandscapeRight => "Landscape Right",
			Orientation::Portrait => "Portrait",
			Orientation::PortraitUpsideDown => "Portrait Upside Down",
			Orientation::Unknown => "Unknown",
		}
	}
}

/// The interface class of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceIdiom {
	Phone,
	Tablet,
	Tv,
	Unspecified,
}

impl DeviceIdiom {
	/// Reported as `session_device_format`.
	pub fn device_format(&self) -> &'static str {
		match self {
			DeviceIdiom::Phone => "phone",
			DeviceIdiom::Tablet => "tablet",
			DeviceIdiom::Tv => "tv",
			DeviceIdiom::Unspecified => "unspecified",
		}
	}

	/// Reported as `session_client_platform`.
	pub fn client_platform(&self) -> &'static str {
		match self {
			DeviceIdiom::Phone | DeviceIdiom::Tablet => "ios",
			DeviceIdiom::Tv => "tvos",
			DeviceIdiom::Unspecified => "unspecified",
		}
	}
}

/// Network reachability at event time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Connectivity {
	pub wifi: bool,
	/// Current radio access technology, when on cellular.
	pub cellular_technology: Option<String>,
}

/// The user's preferred dynamic-type size.
///
/// One process-wide value, cached by the tracker and refreshed through the
/// host's change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentSizeCategory {
	ExtraSmall,
	Small,
	Medium,
	Large,
	ExtraLarge,
	ExtraExtraLarge,
	ExtraExtraExtraLarge,
	AccessibilityMedium,
	AccessibilityLarge,
	AccessibilityExtraLarge,
	AccessibilityExtraExtraLarge,
	AccessibilityExtraExtraExtraLarge,
}

impl ContentSizeCategory {
	pub fn as_str(&self) -> &'static str {
		match self {
			ContentSizeCategory::ExtraSmall => "XS",
			ContentSizeCategory::Small => "S",
			ContentSizeCategory::Medium => "M",
			ContentSizeCategory::Large => "L",
			ContentSizeCategory::ExtraLarge => "XL",
			ContentSizeCategory::ExtraExtraLarge => "XXL",
			ContentSizeCategory::ExtraExtraExtraLarge => "XXXL",
			ContentSizeCategory::AccessibilityMedium => "AX1",
			ContentSizeCategory::AccessibilityLarge => "AX2",
			ContentSizeCategory::AccessibilityExtraLarge => "AX3",
			ContentSizeCategory::AccessibilityExtraExtraLarge => "AX4",
			ContentSizeCategory::AccessibilityExtraExtraExtraLarge => "AX5",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn idiom_platform_projection() {
		assert_eq!(DeviceIdiom::Phone.client_platform(), "ios");
		assert_eq!(DeviceIdiom::Tablet.client_platform(), "ios");
		assert_eq!(DeviceIdiom::Tv.client_platform(), "tvos");
		assert_eq!(DeviceIdiom::Tablet.device_format(), "tablet");
	}

	#[test]
	fn orientation_labels_are_title_cased() {
		assert_eq!(Orientation::PortraitUpsideDown.as_str(), "Portrait Upside Down");
		assert_eq!(Orientation::FaceUp.as_str(), "Face Up");
	}
}
