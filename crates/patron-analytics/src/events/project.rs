// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project page, save, video, and pledge-info events.

use patron_analytics_core::{
	deprecated_props, props, DataLakeEvent, ExternalLinkContext, Project, Properties, RefTag,
	SaveContext, Update, UpdateContext, DEPRECATED_KEY,
};

use crate::tracker::Tracker;

impl Tracker {
	/// Call when a project page is viewed.
	///
	/// `ref_tag` is the tag the project was opened with; `cookie_ref_tag` is
	/// the stored tag credited for the referral.
	pub fn track_project_viewed(
		&self,
		project: &Project,
		ref_tag: Option<&RefTag>,
		cookie_ref_tag: Option<&RefTag>,
	) {
		self.track_with_ref(
			DataLakeEvent::ProjectPageViewed.as_str(),
			self.project_properties(project),
			ref_tag.map(|tag| tag.tag()).as_deref(),
			cookie_ref_tag.map(|tag| tag.tag()).as_deref(),
		);
	}

	/// Call when the project page is swiped to the next project.
	pub fn track_swiped_project(&self, project: &Project, ref_tag: Option<&RefTag>) {
		self.track_with_ref(
			DataLakeEvent::ProjectSwiped.as_str(),
			self.project_properties(project),
			ref_tag.map(|tag| tag.tag()).as_deref(),
			None,
		);
	}

	/// Call when the user stars or unstars a project.
	///
	/// Emits nothing until the personalization relation has been fetched.
	pub fn track_project_save(&self, project: &Project, context: SaveContext) {
		let Some(is_starred) = project.personalization.is_starred else {
			return;
		};

		let props = self
			.project_properties(project)
			.insert("context", context.as_str());

		// Deprecated pair retained through the vocabulary migration.
		self.track(
			if is_starred { "Project Star" } else { "Project Unstar" },
			props.clone().merge(deprecated_props()),
		);
		self.track(
			if is_starred { "Starred Project" } else { "Unstarred Project" },
			props.clone().merge(deprecated_props()),
		);

		self.track(
			if is_starred { "Saved Project" } else { "Unsaved Project" },
			props,
		);
	}

	pub fn track_opened_external_link(&self, project: &Project, context: ExternalLinkContext) {
		self.track(
			"Opened External Link",
			self
				.project_properties(project)
				.insert("context", context.as_str()),
		);
	}

	/// Call when an update is viewed.
	pub fn track_viewed_update(&self, project: &Project, update: &Update, context: UpdateContext) {
		let props = self
			.project_properties(project)
			.merge(props::update_properties(update))
			.insert("context", context.as_str());

		self.track("Update View", props.clone().merge(deprecated_props()));
		self.track("Viewed Update", props);
	}

	// The deprecated video names predate project context and carry the
	// marker alone.

	pub fn track_video_start(&self, project: &Project) {
		self.track("Project Video Start", deprecated_props());
		self.track("Started Project Video", self.project_properties(project));
	}

	pub fn track_video_paused(&self, project: &Project) {
		self.track("Project Video Pause", deprecated_props());
		self.track("Paused Project Video", self.project_properties(project));
	}

	pub fn track_video_resume(&self, project: &Project) {
		self.track("Project Video Resume", deprecated_props());
		self.track("Resumed Project Video", self.project_properties(project));
	}

	pub fn track_video_completed(&self, project: &Project) {
		self.track("Project Video Complete", deprecated_props());
		self.track("Completed Project Video", self.project_properties(project));
	}

	/// Call when the backing info screen is shown.
	pub fn track_viewed_pledge(&self, project: &Project) {
		self.track("Viewed Pledge Info", self.project_properties(project));

		self.track(
			"Modal Dialog View",
			Properties::new()
				.insert("modal_class", "backer_info")
				.insert(DEPRECATED_KEY, true),
		);
	}

	pub fn track_triggered_app_store_rating_dialog(&self, project: &Project) {
		self.track(
			"Triggered App Store Rating Dialog",
			self.project_properties(project),
		);
	}

	pub fn track_checkout_finish_jump_to_discovery(&self, project: &Project) {
		self.track(
			"Checkout Finished Discover More",
			self.project_properties(project),
		);
	}

	pub fn track_checkout_finish_jump_to_project(&self, project: &Project) {
		self.track(
			"Checkout Finished Discover Open Project",
			self.project_properties(project),
		);
	}
}
