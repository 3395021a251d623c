// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Messaging events. The project is optional here: the inbox exists outside
//! any project, in which case the project contribution is an empty bag.

use patron_analytics_core::{
	deprecated_props, Mailbox, MessageDialogContext, Project, Properties, RefTag,
};

use crate::tracker::Tracker;

impl Tracker {
	pub fn track_message_threads_view(
		&self,
		mailbox: Mailbox,
		project: Option<&Project>,
		ref_tag: &RefTag,
	) {
		let props = self
			.optional_project_properties(project)
			.insert("ref_tag", ref_tag.tag());

		let event = match mailbox {
			Mailbox::Inbox => "Viewed Message Inbox",
			Mailbox::Sent => "Viewed Sent Messages",
		};
		self.track(event, props.clone());

		let legacy = props.merge(deprecated_props());
		self.track(
			"Message Threads View",
			legacy.clone().insert("mailbox", mailbox.as_str()),
		);
		self.track("Message Inbox View", legacy);
	}

	pub fn track_viewed_message_search(&self, project: Option<&Project>) {
		self.track(
			"Viewed Message Search",
			self.optional_project_properties(project),
		);
	}

	pub fn track_viewed_message_search_results(
		&self,
		term: &str,
		project: Option<&Project>,
		has_results: bool,
	) {
		let props = self
			.optional_project_properties(project)
			.insert("term", term);
		let legacy = props.clone().merge(deprecated_props());

		self.track("Message Threads Search", legacy.clone());
		self.track("Message Inbox Search", legacy);

		self.track(
			"Viewed Message Search Results",
			props.insert("has_results", has_results),
		);
	}

	pub fn track_cleared_message_search_term(&self, project: Option<&Project>) {
		self.track(
			"Cleared Message Search Term",
			self.optional_project_properties(project),
		);
	}

	pub fn track_message_thread_view(&self, project: &Project) {
		let props = self.project_properties(project);

		self.track("Message Thread View", props.clone().merge(deprecated_props()));
		self.track("Viewed Message Thread", props);
	}

	pub fn track_viewed_message_editor(&self, project: &Project, context: MessageDialogContext) {
		self.track(
			"Viewed Message Editor",
			self
				.project_properties(project)
				.insert("message_type", "single")
				.insert("context", context.as_str()),
		);
	}

	/// Call when a message is sent about a project.
	pub fn track_message_sent(&self, project: &Project, context: MessageDialogContext) {
		let props = self
			.project_properties(project)
			.insert("message_type", "single")
			.insert("context", context.as_str());

		self.track("Message Sent", props.clone().merge(deprecated_props()));
		self.track("Sent Message", props);
	}

	fn optional_project_properties(&self, project: Option<&Project>) -> Properties {
		match project {
			Some(project) => self.project_properties(project),
			None => Properties::new(),
		}
	}
}
