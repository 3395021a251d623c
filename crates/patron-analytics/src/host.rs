// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host context traits: the device, screen, bundle, and runtime state the
//! session provider reads on every event.
//!
//! The host app injects these at tracker construction. Nothing here is read
//! from process globals, so tests and multi-instance hosts stay deterministic.

use chrono::{DateTime, Utc};

use patron_analytics_core::{Connectivity, DeviceIdiom, Orientation};

/// The physical device the app is running on.
pub trait DeviceInfo: Send + Sync {
	/// Hardware model identifier, e.g. "iPhone14,2".
	fn model(&self) -> String;
	fn manufacturer(&self) -> String;
	/// OS name, e.g. "iOS".
	fn os(&self) -> String;
	fn os_version(&self) -> String;
	fn orientation(&self) -> Orientation;
	fn idiom(&self) -> DeviceIdiom;
}

/// The main screen.
pub trait ScreenInfo: Send + Sync {
	/// Width in points at event time.
	fn width(&self) -> u32;
}

/// The app bundle's version identity.
pub trait BundleInfo: Send + Sync {
	fn build_number(&self) -> Option<String>;
	fn release_version(&self) -> Option<String>;
}

/// Runtime state that changes between events.
pub trait HostEnvironment: Send + Sync {
	/// BCP 47 tag of the display language, e.g. "en".
	fn display_language(&self) -> String;
	fn is_voiceover_running(&self) -> bool;
	fn connectivity(&self) -> Connectivity;
	fn user_agent(&self) -> String;
	fn now(&self) -> DateTime<Utc>;
	/// Whether a native payment card is provisioned.
	fn native_pay_capable(&self) -> bool;
	/// Whether the hardware supports native payments at all.
	fn native_pay_device(&self) -> bool;
}

/// A [`DeviceInfo`] backed by plain values.
#[derive(Debug, Clone)]
pub struct StaticDevice {
	pub model: String,
	pub manufacturer: String,
	pub os: String,
	pub os_version: String,
	pub orientation: Orientation,
	pub idiom: DeviceIdiom,
}

impl Default for StaticDevice {
	fn default() -> Self {
		Self {
			model: "iPhone14,2".to_string(),
			manufacturer: "Apple".to_string(),
			os: "iOS".to_string(),
			os_version: "17.0".to_string(),
			orientation: Orientation::Portrait,
			idiom: DeviceIdiom::Phone,
		}
	}
}

impl DeviceInfo for StaticDevice {
	fn model(&self) -> String {
		self.model.clone()
	}

	fn manufacturer(&self) -> String {
		self.manufacturer.clone()
	}

	fn os(&self) -> String {
		self.os.clone()
	}

	fn os_version(&self) -> String {
		self.os_version.clone()
	}

	fn orientation(&self) -> Orientation {
		self.orientation
	}

	fn idiom(&self) -> DeviceIdiom {
		self.idiom
	}
}

/// A [`ScreenInfo`] backed by a plain value.
#[derive(Debug, Clone, Copy)]
pub struct StaticScreen {
	pub width: u32,
}

impl Default for StaticScreen {
	fn default() -> Self {
		Self { width: 390 }
	}
}

impl ScreenInfo for StaticScreen {
	fn width(&self) -> u32 {
		self.width
	}
}

/// A [`BundleInfo`] backed by plain values.
#[derive(Debug, Clone, Default)]
pub struct StaticBundle {
	pub build_number: Option<String>,
	pub release_version: Option<String>,
}

impl BundleInfo for StaticBundle {
	fn build_number(&self) -> Option<String> {
		self.build_number.clone()
	}

	fn release_version(&self) -> Option<String> {
		self.release_version.clone()
	}
}

/// A [`HostEnvironment`] backed by plain values.
///
/// `now` pins the clock when set; otherwise the wall clock is used.
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
	pub display_language: String,
	pub is_voiceover_running: bool,
	pub connectivity: Connectivity,
	pub user_agent: String,
	pub now: Option<DateTime<Utc>>,
	pub native_pay_capable: bool,
	pub native_pay_device: bool,
}

impl Default for StaticEnvironment {
	fn default() -> Self {
		Self {
			display_language: "en".to_string(),
			is_voiceover_running: false,
			connectivity: Connectivity {
				wifi: true,
				cellular_technology: None,
			},
			user_agent: "Patron/1.0".to_string(),
			now: None,
			native_pay_capable: false,
			native_pay_device: true,
		}
	}
}

impl HostEnvironment for StaticEnvironment {
	fn display_language(&self) -> String {
		self.display_language.clone()
	}

	fn is_voiceover_running(&self) -> bool {
		self.is_voiceover_running
	}

	fn connectivity(&self) -> Connectivity {
		self.connectivity.clone()
	}

	fn user_agent(&self) -> String {
		self.user_agent.clone()
	}

	fn now(&self) -> DateTime<Utc> {
		self.now.unwrap_or_else(Utc::now)
	}

	fn native_pay_capable(&self) -> bool {
		self.native_pay_capable
	}

	fn native_pay_device(&self) -> bool {
		self.native_pay_device
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn static_environment_pins_clock_when_set() {
		let pinned = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
		let env = StaticEnvironment {
			now: Some(pinned),
			..Default::default()
		};
		assert_eq!(env.now(), pinned);
	}

	#[test]
	fn static_device_defaults_are_a_phone() {
		let device = StaticDevice::default();
		assert_eq!(device.idiom(), DeviceIdiom::Phone);
		assert_eq!(device.manufacturer(), "Apple");
	}
}
