// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event pair type and the data-lake allow-list.

use crate::properties::Properties;

/// Marker property attached to events kept alive under their legacy name
/// during the event-vocabulary migration.
pub const DEPRECATED_KEY: &str = "DEPRECATED";

/// Returns the marker bag merged into every deprecated-name event.
pub fn deprecated_props() -> Properties {
	Properties::new().insert(DEPRECATED_KEY, true)
}

/// An immutable (name, properties) pair, created fresh per tracking call.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	pub name: String,
	pub properties: Properties,
}

impl Event {
	pub fn new(name: impl Into<String>, properties: Properties) -> Self {
		Self {
			name: name.into(),
			properties,
		}
	}

	/// Returns true if this event carries the deprecated marker.
	pub fn is_deprecated(&self) -> bool {
		matches!(
			self.properties.get(DEPRECATED_KEY),
			Some(serde_json::Value::Bool(true))
		)
	}
}

/// The closed set of event names mirrored to the data-lake sink.
///
/// Static for the process lifetime; every other event goes to the primary
/// sink only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataLakeEvent {
	ExplorePageViewed,
	ExploreSortClicked,
	ActivityFeedViewed,
	EditorialCardClicked,
	CollectionViewed,
	FilterClicked,
	TabBarClicked,
	SearchPageViewed,
	SearchResultsLoaded,
	ProjectSwiped,
	ProjectPageViewed,
}

impl DataLakeEvent {
	const ALL: [DataLakeEvent; 11] = [
		DataLakeEvent::ExplorePageViewed,
		DataLakeEvent::ExploreSortClicked,
		DataLakeEvent::ActivityFeedViewed,
		DataLakeEvent::EditorialCardClicked,
		DataLakeEvent::CollectionViewed,
		DataLakeEvent::FilterClicked,
		DataLakeEvent::TabBarClicked,
		DataLakeEvent::SearchPageViewed,
		DataLakeEvent::SearchResultsLoaded,
		DataLakeEvent::ProjectSwiped,
		DataLakeEvent::ProjectPageViewed,
	];

	/// Returns the event name as sent to the sinks.
	pub fn as_str(&self) -> &'static str {
		match self {
			DataLakeEvent::ExplorePageViewed => "Explore Page Viewed",
			DataLakeEvent::ExploreSortClicked => "Explore Sort Clicked",
			DataLakeEvent::ActivityFeedViewed => "Activity Feed Viewed",
			DataLakeEvent::EditorialCardClicked => "Editorial Card Clicked",
			DataLakeEvent::CollectionViewed => "Collection Viewed",
			DataLakeEvent::FilterClicked => "Filter Clicked",
			DataLakeEvent::TabBarClicked => "Tab Bar Clicked",
			DataLakeEvent::SearchPageViewed => "Search Page Viewed",
			DataLakeEvent::SearchResultsLoaded => "Search Results Loaded",
			DataLakeEvent::ProjectSwiped => "Project Swiped",
			DataLakeEvent::ProjectPageViewed => "Project Page Viewed",
		}
	}

	/// All allow-listed event names.
	pub fn all() -> impl Iterator<Item = &'static str> {
		Self::ALL.iter().map(DataLakeEvent::as_str)
	}

	/// Returns true if `name` is eligible for data-lake dispatch.
	pub fn is_allow_listed(name: &str) -> bool {
		Self::all().any(|candidate| candidate == name)
	}
}

impl std::fmt::Display for DataLakeEvent {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn allow_list_has_eleven_entries() {
		assert_eq!(DataLakeEvent::all().count(), 11);
	}

	#[test]
	fn allow_list_membership() {
		assert!(DataLakeEvent::is_allow_listed("Project Page Viewed"));
		assert!(DataLakeEvent::is_allow_listed("Tab Bar Clicked"));
		assert!(!DataLakeEvent::is_allow_listed("Logged In"));
		assert!(!DataLakeEvent::is_allow_listed(""));
	}

	#[test]
	fn deprecated_marker_is_detectable() {
		let legacy = Event::new("App Open", deprecated_props());
		let current = Event::new("Opened App", Properties::new());

		assert!(legacy.is_deprecated());
		assert!(!current.is_deprecated());
	}
}
