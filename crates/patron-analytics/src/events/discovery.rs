// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Discovery and search events. Every event in this family is on the
//! data-lake allow-list.

use patron_analytics_core::{props, DataLakeEvent, DiscoveryParams, Properties, RefTag, Sort};

use crate::tracker::Tracker;

impl Tracker {
	/// Call when a discovery page is viewed and the first page is loaded.
	pub fn track_discovery(&self, params: &DiscoveryParams) {
		self.track(
			DataLakeEvent::ExplorePageViewed.as_str(),
			props::discovery_properties(params),
		);
	}

	/// Call when a filter is selected from the explore modal.
	pub fn track_discovery_modal_selected_filter(&self, params: &DiscoveryParams) {
		self.track(
			DataLakeEvent::FilterClicked.as_str(),
			props::discovery_properties(params),
		);
	}

	/// Call when the user swipes between sorts or selects a sort.
	pub fn track_discovery_selected_sort(&self, next_sort: Sort, params: &DiscoveryParams) {
		let props = props::discovery_properties(params)
			.merge(Properties::new().insert("discover_sort", next_sort.as_str()));

		self.track(DataLakeEvent::ExploreSortClicked.as_str(), props);
	}

	/// Call when the user taps the editorial header at the top of discovery.
	pub fn track_editorial_header_tapped(&self, ref_tag: &RefTag) {
		self.track_with_ref(
			DataLakeEvent::EditorialCardClicked.as_str(),
			Properties::new(),
			Some(ref_tag.tag().as_str()),
			None,
		);
	}

	/// Call when a curated collection is viewed.
	pub fn track_collection_viewed(&self, params: &DiscoveryParams) {
		self.track(
			DataLakeEvent::CollectionViewed.as_str(),
			props::discovery_properties(params),
		);
	}

	/// Call once when the search view is initially shown.
	pub fn track_project_search_view(&self) {
		self.track(DataLakeEvent::SearchPageViewed.as_str(), Properties::new());
	}

	/// Call when projects have been obtained from a search.
	pub fn track_search_results(
		&self,
		query: &str,
		params: &DiscoveryParams,
		ref_tag: &RefTag,
		has_results: bool,
	) {
		let props = props::discovery_properties(params).merge(
			Properties::new()
				.insert("discover_ref_tag", ref_tag.tag())
				.insert("search_term", query)
				.insert("has_results", has_results),
		);

		self.track(DataLakeEvent::SearchResultsLoaded.as_str(), props);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::capture_tracker;
	use serde_json::Value;

	#[test]
	fn discovery_family_routes_to_lake() {
		let (primary, lake, tracker) = capture_tracker();

		tracker.track_discovery(&DiscoveryParams::default());
		tracker.track_discovery_modal_selected_filter(&DiscoveryParams::default());
		tracker.track_project_search_view();

		assert_eq!(
			primary.event_names(),
			vec!["Explore Page Viewed", "Filter Clicked", "Search Page Viewed"]
		);
		assert_eq!(primary.event_names(), lake.event_names());
	}

	#[test]
	fn selected_sort_overrides_discover_sort() {
		let (primary, _, tracker) = capture_tracker();

		let params = DiscoveryParams {
			sort: Some(Sort::Magic),
			..Default::default()
		};
		tracker.track_discovery_selected_sort(Sort::Newest, &params);

		let props = &primary.events()[0].properties;
		assert_eq!(
			props.get("discover_sort"),
			Some(&Value::String("newest".to_string()))
		);
	}

	#[test]
	fn editorial_header_injects_ref_tag() {
		let (primary, lake, tracker) = capture_tracker();

		tracker.track_editorial_header_tapped(&RefTag::Custom("ios_featured".to_string()));

		assert_eq!(lake.event_names(), vec!["Editorial Card Clicked"]);
		assert_eq!(
			primary.events()[0].properties.get("session_ref_tag"),
			Some(&Value::String("ios_featured".to_string()))
		);
	}

	#[test]
	fn search_results_carry_term_and_results_flag() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_search_results(
			"solar",
			&DiscoveryParams {
				query: Some("solar".to_string()),
				..Default::default()
			},
			&RefTag::Search,
			true,
		);

		let props = &primary.events()[0].properties;
		assert_eq!(props.get("search_term"), Some(&Value::String("solar".to_string())));
		assert_eq!(props.get("has_results"), Some(&Value::Bool(true)));
		assert_eq!(
			props.get("discover_ref_tag"),
			Some(&Value::String("search".to_string()))
		);
		assert_eq!(props.get("discover_everything"), Some(&Value::Bool(false)));
	}
}
