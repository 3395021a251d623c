// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Discovery search parameters.

use serde::{Deserialize, Serialize};

use crate::model::project::Category;

/// The filter and sort state of a discovery search.
///
/// Every filter is optional; a params value with nothing set means "show me
/// everything", which the discovery provider reports as `everything = true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryParams {
	pub recommended: Option<bool>,
	pub social: Option<bool>,
	pub staff_picks: Option<bool>,
	pub starred: Option<bool>,
	pub tag_id: Option<i64>,
	pub category: Option<Category>,
	pub sort: Option<Sort>,
	pub query: Option<String>,
}

impl DiscoveryParams {
	/// True iff no filter, sort, or query is set.
	pub fn is_everything(&self) -> bool {
		self.recommended.is_none()
			&& self.social.is_none()
			&& self.staff_picks.is_none()
			&& self.starred.is_none()
			&& self.tag_id.is_none()
			&& self.category.is_none()
			&& self.sort.is_none()
			&& self.query.is_none()
	}
}

/// Sort order of discovery results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sort {
	Magic,
	Popular,
	Newest,
	EndingSoon,
	MostFunded,
}

impl Sort {
	pub fn as_str(&self) -> &'static str {
		match self {
			Sort::Magic => "magic",
			Sort::Popular => "popularity",
			Sort::Newest => "newest",
			Sort::EndingSoon => "end_date",
			Sort::MostFunded => "most_funded",
		}
	}

	/// Suffix appended to derived ref tags; the default sort adds nothing.
	pub fn ref_tag_suffix(&self) -> &'static str {
		match self {
			Sort::Magic => "",
			Sort::Popular => "_popular",
			Sort::Newest => "_newest",
			Sort::EndingSoon => "_ending_soon",
			Sort::MostFunded => "_most_funded",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_params_are_everything() {
		assert!(DiscoveryParams::default().is_everything());
	}

	#[test]
	fn any_filter_clears_everything() {
		let staff_picks = DiscoveryParams {
			staff_picks: Some(true),
			..Default::default()
		};
		assert!(!staff_picks.is_everything());

		let sorted = DiscoveryParams {
			sort: Some(Sort::Newest),
			..Default::default()
		};
		assert!(!sorted.is_everything());

		let searched = DiscoveryParams {
			query: Some("solar".to_string()),
			..Default::default()
		};
		assert!(!searched.is_everything());
	}

	#[test]
	fn sort_labels() {
		assert_eq!(Sort::Popular.as_str(), "popularity");
		assert_eq!(Sort::EndingSoon.as_str(), "end_date");
		assert_eq!(Sort::Magic.ref_tag_suffix(), "");
		assert_eq!(Sort::MostFunded.ref_tag_suffix(), "_most_funded");
	}
}
