// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Creator dashboard, project activity, and update-draft events.

use patron_analytics_core::{deprecated_props, AttachmentSource, Project, Properties};

use crate::tracker::Tracker;

impl Tracker {
	pub fn track_dashboard_closed_project_switcher(&self, project: &Project) {
		self.track("Closed Project Switcher", self.project_properties(project));
	}

	pub fn track_dashboard_see_all_rewards(&self, project: &Project) {
		self.track("Showed All Rewards", self.project_properties(project));
	}

	pub fn track_dashboard_see_more_referrers(&self, project: &Project) {
		self.track("Showed All Referrers", self.project_properties(project));
	}

	pub fn track_dashboard_show_project_switcher(&self, project: &Project) {
		self.track("Showed Project Switcher", self.project_properties(project));
	}

	pub fn track_dashboard_switch_project(&self, project: &Project) {
		let props = self.project_properties(project);

		self.track("Switched Projects", props.clone());
		self.track("Creator Project Navigate", props.merge(deprecated_props()));
	}

	pub fn track_dashboard_view(&self, project: &Project) {
		let props = self.project_properties(project);

		self.track("Viewed Project Dashboard", props.clone());
		self.track("Dashboard View", props.merge(deprecated_props()));
	}

	pub fn track_viewed_project_activity(&self, project: &Project) {
		let props = self.project_properties(project);

		self.track("Viewed Project Activity", props.clone());
		self.track("Creator Activity View", props.merge(deprecated_props()));
	}

	pub fn track_loaded_newer_project_activity(&self, project: &Project) {
		let props = self.project_properties(project);

		self.track("Loaded Newer Project Activity", props.clone());
		self.track("Creator Activity View Load Newer", props.merge(deprecated_props()));
	}

	pub fn track_loaded_older_project_activity(&self, project: &Project, page: u32) {
		let props = self.project_properties(project).insert("page_count", page);

		self.track("Loaded Older Project Activity", props.clone());
		self.track("Creator Activity View Load Older", props.merge(deprecated_props()));
	}

	pub fn track_viewed_update_draft(&self, project: &Project) {
		self.track("Viewed Draft", self.update_draft_properties(project));
	}

	pub fn track_closed_update_draft(&self, project: &Project) {
		self.track("Closed Draft", self.update_draft_properties(project));
	}

	pub fn track_edited_update_draft_title(&self, project: &Project) {
		self.track("Edited Title", self.update_draft_properties(project));
	}

	pub fn track_edited_update_draft_body(&self, project: &Project) {
		self.track("Edited Body", self.update_draft_properties(project));
	}

	pub fn track_started_add_update_draft_attachment(&self, project: &Project) {
		self.track("Started Add Attachment", self.update_draft_properties(project));
	}

	pub fn track_completed_add_update_draft_attachment(
		&self,
		project: &Project,
		source: AttachmentSource,
	) {
		self.track(
			"Completed Add Attachment",
			self
				.update_draft_properties(project)
				.insert("type", source.as_str()),
		);
	}

	pub fn track_canceled_add_update_draft_attachment(&self, project: &Project) {
		self.track("Canceled Add Attachment", self.update_draft_properties(project));
	}

	pub fn track_failed_add_update_draft_attachment(&self, project: &Project) {
		self.track("Failed Add Attachment", self.update_draft_properties(project));
	}

	pub fn track_started_remove_update_draft_attachment(&self, project: &Project) {
		self.track("Started Remove Attachment", self.update_draft_properties(project));
	}

	pub fn track_canceled_remove_update_draft_attachment(&self, project: &Project) {
		self.track("Canceled Remove Attachment", self.update_draft_properties(project));
	}

	pub fn track_completed_remove_update_draft_attachment(&self, project: &Project) {
		self.track("Completed Remove Attachment", self.update_draft_properties(project));
	}

	pub fn track_failed_remove_update_draft_attachment(&self, project: &Project) {
		self.track("Failed Remove Attachment", self.update_draft_properties(project));
	}

	pub fn track_changed_update_draft_visibility(&self, project: &Project, is_public: bool) {
		self.track(
			"Changed Visibility",
			self
				.project_properties(project)
				.insert("type", if is_public { "public" } else { "backers_only" }),
		);
	}

	pub fn track_previewed_update(&self, project: &Project) {
		let props = self.update_draft_properties(project);

		self.track("Previewed Update", props.clone());
		self.track("Update Preview", props.merge(deprecated_props()));
	}

	pub fn track_triggered_publish_confirmation_modal(&self, project: &Project) {
		self.track(
			"Triggered Publish Confirmation Modal",
			self.update_draft_properties(project),
		);
	}

	pub fn track_canceled_publish_update(&self, project: &Project) {
		self.track(
			"Canceled Publish",
			self
				.update_draft_properties(project)
				.merge(Properties::new().insert("context", "modal")),
		);
	}

	pub fn track_confirmed_publish_update(&self, project: &Project) {
		self.track(
			"Confirmed Publish",
			self
				.update_draft_properties(project)
				.merge(Properties::new().insert("context", "modal")),
		);
	}

	pub fn track_published_update(&self, project: &Project, is_public: bool) {
		let props = self
			.update_draft_properties(project)
			.insert("type", if is_public { "public" } else { "backers_only" });

		self.track("Published Update", props.clone());
		self.track("Update Published", props.merge(deprecated_props()));
	}

	fn update_draft_properties(&self, project: &Project) -> Properties {
		self
			.project_properties(project)
			.insert("context", "update_draft")
	}
}
