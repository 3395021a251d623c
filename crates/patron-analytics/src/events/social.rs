// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Share-sheet and find-friends events.
//!
//! The legacy share names are context-specific: the thanks screen maps to
//! the checkout family, an update share to the update family, and anything
//! else to the project family.

use patron_analytics_core::{
	deprecated_props, props, FriendsSource, Properties, ShareActivityType, ShareContext,
};

use crate::tracker::Tracker;

impl Tracker {
	/// Call when the share sheet is shown.
	pub fn track_showed_share_sheet(&self, share_context: &ShareContext<'_>) {
		let props = self.share_properties(share_context, None);

		self.track("Showed Share Sheet", props.clone());

		let deprecated_name = if share_context.is_thanks() {
			"Checkout Show Share Sheet"
		} else if share_context.update().is_some() {
			"Update Show Share Sheet"
		} else {
			"Project Show Share Sheet"
		};
		self.track(deprecated_name, props.merge(deprecated_props()));
	}

	/// Call when the share sheet is canceled.
	pub fn track_canceled_share_sheet(&self, share_context: &ShareContext<'_>) {
		let props = self.share_properties(share_context, None);

		self.track("Canceled Share Sheet", props.clone());

		let deprecated_name = if share_context.is_thanks() {
			"Checkout Cancel Share Sheet"
		} else if share_context.update().is_some() {
			"Update Cancel Share Sheet"
		} else {
			"Project Cancel Share Sheet"
		};
		self.track(deprecated_name, props.merge(deprecated_props()));
	}

	/// Call when an actual share dialog is shown, not merely the sheet.
	pub fn track_showed_share(
		&self,
		share_context: &ShareContext<'_>,
		share_activity_type: Option<&ShareActivityType>,
	) {
		let props = self.share_properties(share_context, share_activity_type);

		self.track("Showed Share", props.clone());

		let deprecated_name = if share_context.is_thanks() {
			"Checkout Show Share"
		} else if share_context.update().is_some() {
			"Update Show Share"
		} else {
			"Project Show Share"
		};
		self.track(deprecated_name, props.merge(deprecated_props()));
	}

	/// Call when an actual share dialog is canceled.
	pub fn track_canceled_share(
		&self,
		share_context: &ShareContext<'_>,
		share_activity_type: Option<&ShareActivityType>,
	) {
		let props = self.share_properties(share_context, share_activity_type);

		self.track("Canceled Share", props.clone());

		let deprecated_name = if share_context.is_thanks() {
			"Checkout Cancel Share"
		} else if share_context.update().is_some() {
			"Update Cancel Share"
		} else {
			"Project Cancel Share"
		};
		self.track(deprecated_name, props.merge(deprecated_props()));
	}

	/// Call when a share is successfully performed.
	pub fn track_shared(
		&self,
		share_context: &ShareContext<'_>,
		share_activity_type: Option<&ShareActivityType>,
	) {
		let props = self.share_properties(share_context, share_activity_type);

		self.track("Shared", props.clone());

		let deprecated_name = if share_context.is_thanks() {
			"Checkout Share"
		} else if share_context.update().is_some() {
			"Update Share"
		} else {
			"Project Share"
		};
		self.track(deprecated_name, props.merge(deprecated_props()));
	}

	pub fn track_close_facebook_connect(&self, source: FriendsSource) {
		self.track(
			"Close Facebook Connect",
			Properties::new().insert("source", source.as_str()),
		);
	}

	pub fn track_close_find_friends(&self, source: FriendsSource) {
		self.track(
			"Close Find Friends",
			Properties::new().insert("source", source.as_str()),
		);
	}

	pub fn track_decline_friend_follow_all(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track(
			"Facebook Friend Decline Follow All",
			props.clone().merge(deprecated_props()),
		);
		self.track("Declined Follow All Facebook Friends", props);
	}

	pub fn track_facebook_connect(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track("Facebook Connect", props.clone().merge(deprecated_props()));
		self.track("Connected Facebook", props);
	}

	pub fn track_facebook_connect_error(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track("Facebook Connect Error", props.clone().merge(deprecated_props()));
		self.track("Errored Facebook Connect", props);
	}

	pub fn track_find_friends_view(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track("Find Friends View", props.clone().merge(deprecated_props()));
		self.track("Viewed Find Friends", props);
	}

	pub fn track_friend_follow(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track("Facebook Friend Follow", props.clone().merge(deprecated_props()));
		self.track("Followed Facebook Friend", props);
	}

	pub fn track_friend_follow_all(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track(
			"Facebook Friend Follow All",
			props.clone().merge(deprecated_props()),
		);
		self.track("Followed All Facebook Friends", props);
	}

	pub fn track_friend_unfollow(&self, source: FriendsSource) {
		let props = Properties::new().insert("source", source.as_str());

		self.track("Facebook Friend Unfollow", props.clone().merge(deprecated_props()));
		self.track("Unfollowed Facebook Friend", props);
	}

	pub fn track_loaded_more_friends(&self, source: FriendsSource, page_count: u32) {
		self.track(
			"Loaded More Friends",
			Properties::new()
				.insert("source", source.as_str())
				.insert("page_count", page_count),
		);
	}

	fn share_properties(
		&self,
		share_context: &ShareContext<'_>,
		share_activity_type: Option<&ShareActivityType>,
	) -> Properties {
		props::share_properties(
			share_context,
			self.logged_in_user().as_ref(),
			share_activity_type,
			self.environment_now(),
		)
	}
}
