// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Ref tags identifying the navigation path that led to an event.

use crate::model::discovery::{DiscoveryParams, Sort};

/// An opaque attribution tag injected into session context.
///
/// Tags are derived from the surface the user came through; discovery-derived
/// tags pick up a suffix for any non-default sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTag {
	Activity,
	Category,
	CategoryWithSort(Sort),
	Discovery,
	DiscoveryWithSort(Sort),
	Push,
	Recommended,
	RecommendedWithSort(Sort),
	Search,
	Social,
	StaffPicks,
	Starred,
	Thanks,
	Update,
	/// A server- or campaign-supplied tag outside the fixed set.
	Custom(String),
}

impl RefTag {
	/// The wire form of the tag.
	pub fn tag(&self) -> String {
		match self {
			RefTag::Activity => "activity".to_string(),
			RefTag::Category => "category".to_string(),
			RefTag::CategoryWithSort(sort) => format!("category{}", sort.ref_tag_suffix()),
			RefTag::Discovery => "discovery".to_string(),
			RefTag::DiscoveryWithSort(sort) => format!("discovery{}", sort.ref_tag_suffix()),
			RefTag::Push => "push".to_string(),
			RefTag::Recommended => "recommended".to_string(),
			RefTag::RecommendedWithSort(sort) => format!("recommended{}", sort.ref_tag_suffix()),
			RefTag::Search => "search".to_string(),
			RefTag::Social => "social".to_string(),
			RefTag::StaffPicks => "staff_picks".to_string(),
			RefTag::Starred => "starred".to_string(),
			RefTag::Thanks => "thanks".to_string(),
			RefTag::Update => "update".to_string(),
			RefTag::Custom(tag) => tag.clone(),
		}
	}

	/// Derives the tag a discovery search attributes its results to.
	///
	/// Filters are checked most-specific first; an unfiltered search is
	/// plain discovery.
	pub fn from_params(params: &DiscoveryParams) -> RefTag {
		if params.starred == Some(true) {
			RefTag::Starred
		} else if params.social == Some(true) {
			RefTag::Social
		} else if params.recommended == Some(true) {
			match params.sort {
				Some(sort) => RefTag::RecommendedWithSort(sort),
				None => RefTag::Recommended,
			}
		} else if params.staff_picks == Some(true) {
			RefTag::StaffPicks
		} else if params.category.is_some() {
			match params.sort {
				Some(sort) => RefTag::CategoryWithSort(sort),
				None => RefTag::Category,
			}
		} else if params.query.is_some() {
			RefTag::Search
		} else {
			match params.sort {
				Some(sort) => RefTag::DiscoveryWithSort(sort),
				None => RefTag::Discovery,
			}
		}
	}
}

impl std::fmt::Display for RefTag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.tag())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::project::Category;

	#[test]
	fn sorted_tags_pick_up_suffix() {
		assert_eq!(RefTag::CategoryWithSort(Sort::Newest).tag(), "category_newest");
		assert_eq!(RefTag::CategoryWithSort(Sort::Magic).tag(), "category");
		assert_eq!(
			RefTag::DiscoveryWithSort(Sort::EndingSoon).tag(),
			"discovery_ending_soon"
		);
	}

	#[test]
	fn from_params_unfiltered_is_discovery() {
		assert_eq!(
			RefTag::from_params(&DiscoveryParams::default()),
			RefTag::Discovery
		);
	}

	#[test]
	fn from_params_prefers_most_specific_filter() {
		let params = DiscoveryParams {
			starred: Some(true),
			category: Some(Category::root(1, "Games")),
			..Default::default()
		};
		assert_eq!(RefTag::from_params(&params), RefTag::Starred);

		let params = DiscoveryParams {
			category: Some(Category::root(1, "Games")),
			sort: Some(Sort::Popular),
			..Default::default()
		};
		assert_eq!(
			RefTag::from_params(&params),
			RefTag::CategoryWithSort(Sort::Popular)
		);
	}

	#[test]
	fn from_params_query_is_search() {
		let params = DiscoveryParams {
			query: Some("solar".to_string()),
			..Default::default()
		};
		assert_eq!(RefTag::from_params(&params), RefTag::Search);
	}

	#[test]
	fn custom_tag_passes_through() {
		assert_eq!(
			RefTag::Custom("ios_editorial_spotlight".to_string()).tag(),
			"ios_editorial_spotlight"
		);
	}
}
