// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote configuration supplied by the host at runtime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Feature flags, experiment assignments, and geo hints fetched from the
/// server, settable on the tracker at any time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
	/// Flag key to enabled state. Only keys prefixed `ios_` with value
	/// `true` are reported in session context.
	pub features: BTreeMap<String, bool>,
	/// Experiment name to assigned variant.
	pub experiments: BTreeMap<String, String>,
	/// ISO 3166-1 alpha-2 code geolocated server-side; the user-country
	/// fallback when no user is logged in.
	pub country_code: Option<String>,
}

impl RemoteConfig {
	/// Enabled mobile feature flags, sorted by key.
	pub fn enabled_features(&self) -> Vec<String> {
		self.features
			.iter()
			.filter(|(key, enabled)| key.starts_with("ios_") && **enabled)
			.map(|(key, _)| key.clone())
			.collect()
	}

	/// Experiment assignments rendered `name[variant]`, sorted by name.
	pub fn experiment_variants(&self) -> Vec<String> {
		self.experiments
			.iter()
			.map(|(name, variant)| format!("{name}[{variant}]"))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn enabled_features_filters_and_sorts() {
		let config = RemoteConfig {
			features: BTreeMap::from([
				("ios_native_checkout".to_string(), true),
				("ios_live_streams".to_string(), true),
				("ios_dark_mode".to_string(), false),
				("android_native_checkout".to_string(), true),
			]),
			..Default::default()
		};

		assert_eq!(
			config.enabled_features(),
			vec!["ios_live_streams", "ios_native_checkout"]
		);
	}

	#[test]
	fn experiment_variants_are_rendered() {
		let config = RemoteConfig {
			experiments: BTreeMap::from([
				("project_page_v2".to_string(), "treatment".to_string()),
				("onboarding".to_string(), "control".to_string()),
			]),
			..Default::default()
		};

		assert_eq!(
			config.experiment_variants(),
			vec!["onboarding[control]", "project_page_v2[treatment]"]
		);
	}
}
