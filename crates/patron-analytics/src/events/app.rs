// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application lifecycle and root-level UI events.

use std::collections::BTreeMap;

use patron_analytics_core::{
	deprecated_props, props, DataLakeEvent, EmptyState, Properties, ShortcutItem, TabBarItemLabel,
	UserActivity,
};

use crate::tracker::Tracker;

impl Tracker {
	/// Call when the activities screen is shown.
	pub fn track_activities(&self, count: u32) {
		self.track(
			DataLakeEvent::ActivityFeedViewed.as_str(),
			Properties::new().insert("activities_count", count),
		);
	}

	/// Call when the app launches or enters the foreground.
	pub fn track_app_open(&self, badge_count: i64) {
		let props = Properties::new().insert("badge_count", badge_count);

		self.track("App Open", props.merge(deprecated_props()));
		self.track("Opened App", Properties::new());
	}

	/// Call when the app enters the background.
	pub fn track_app_close(&self) {
		self.track("App Close", deprecated_props());
		self.track("Closed App", Properties::new());
	}

	pub fn track_memory_warning(&self) {
		self.track("App Memory Warning", Properties::new());
	}

	pub fn track_crashed_app(&self) {
		self.track("Crashed App", Properties::new());
	}

	pub fn track_notification_opened(&self) {
		let props = Properties::new().insert("notification_type", "push");

		self.track("Notification Opened", props.clone().merge(deprecated_props()));
		self.track("Opened Notification", props);
	}

	pub fn track_opened_app_banner(&self, query_params: &BTreeMap<String, String>) {
		let mut props = Properties::new();
		for (key, value) in query_params {
			props = props.insert(key.clone(), value.clone());
		}

		self.track("Smart App Banner Opened", props.clone().merge(deprecated_props()));
		self.track("Opened App Banner", props);
	}

	/// Call when the platform hands over a deep-link continuation.
	pub fn track_user_activity(&self, activity: &UserActivity) {
		let props = props::user_activity_properties(activity);

		self.track("Continue User Activity", props.clone().merge(deprecated_props()));
		self.track("Opened Deep Link", props);
	}

	pub fn track_tab_bar_clicked(&self, label: TabBarItemLabel) {
		self.track(
			DataLakeEvent::TabBarClicked.as_str(),
			Properties::new().insert("tab_bar_label", label.as_str()),
		);
	}

	pub fn track_performed_shortcut(&self, shortcut: ShortcutItem, available: &[ShortcutItem]) {
		let context = available
			.iter()
			.map(|item| item.as_str())
			.collect::<Vec<_>>()
			.join(",");

		self.track(
			"Performed Shortcut",
			Properties::new()
				.insert("type", shortcut.as_str())
				.insert("context", context),
		);
	}

	pub fn track_empty_state_button_tapped(&self, empty_state: EmptyState) {
		self.track(
			"Tapped Empty State Button",
			Properties::new().insert("type", empty_state.as_str()),
		);
	}
}
