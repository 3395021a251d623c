// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Comment reading and authoring events.

use patron_analytics_core::{
	deprecated_props, props, Comment, CommentDialogContext, CommentDialogType, CommentsContext,
	Project, Properties, Update,
};

use crate::tracker::Tracker;

impl Tracker {
	pub fn track_load_newer_comments(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentsContext,
	) {
		let props = self.comments_properties(project, update, context);

		let deprecated_name = match context {
			CommentsContext::Project => "Project Comment Load New",
			CommentsContext::Update => "Update Comment Load New",
		};
		self.track(deprecated_name, props.clone().merge(deprecated_props()));

		self.track("Loaded Newer Comments", props);
	}

	pub fn track_load_older_comments(
		&self,
		project: &Project,
		update: Option<&Update>,
		page: u32,
		context: CommentsContext,
	) {
		let props = self
			.comments_properties(project, update, context)
			.insert("page_count", page);

		let deprecated_name = match context {
			CommentsContext::Project => "Project Comment Load Older",
			CommentsContext::Update => "Update Comment Load Older",
		};
		self.track(deprecated_name, props.clone().merge(deprecated_props()));

		self.track("Loaded Older Comments", props);
	}

	pub fn track_opened_comment_editor(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentDialogContext,
	) {
		self.track(
			"Opened Comment Editor",
			self.comment_editor_properties(project, update, context),
		);
	}

	pub fn track_canceled_comment_editor(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentDialogContext,
	) {
		self.track(
			"Canceled Comment Editor",
			self.comment_editor_properties(project, update, context),
		);
	}

	pub fn track_posted_comment(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentDialogContext,
	) {
		self.track(
			"Posted Comment",
			self.comment_editor_properties(project, update, context),
		);
	}

	/// Legacy project-comment creation event; superseded by
	/// [`Tracker::track_posted_comment`].
	pub fn track_project_comment_create(&self, comment: &Comment, project: &Project) {
		let props = self
			.project_properties(project)
			.merge(props::comment_properties(comment))
			.merge(deprecated_props());

		self.track("Project Comment Create", props);
	}

	/// Legacy update-comment creation event; superseded by
	/// [`Tracker::track_posted_comment`].
	pub fn track_update_comment_create(
		&self,
		comment: &Comment,
		update: &Update,
		project: &Project,
	) {
		let props = self
			.project_properties(project)
			.merge(props::update_properties(update))
			.merge(props::comment_properties(comment))
			.merge(deprecated_props());

		self.track("Update Comment Create", props);
	}

	pub fn track_comments_view(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentsContext,
	) {
		let props = self.comments_properties(project, update, context);

		let deprecated_name = match context {
			CommentsContext::Project => "Project Comment View",
			CommentsContext::Update => "Update Comment View",
		};
		self.track(deprecated_name, props.clone().merge(deprecated_props()));

		self.track("Viewed Comments", props);
	}

	fn comments_properties(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentsContext,
	) -> Properties {
		let mut props = self.project_properties(project);
		if let Some(update) = update {
			props = props.merge(props::update_properties(update));
		}
		props.insert("context", context.as_str())
	}

	fn comment_editor_properties(
		&self,
		project: &Project,
		update: Option<&Update>,
		context: CommentDialogContext,
	) -> Properties {
		let dialog_type = match update {
			Some(_) => CommentDialogType::Update,
			None => CommentDialogType::Project,
		};

		let mut props = self.project_properties(project);
		if let Some(update) = update {
			props = props.merge(props::update_properties(update));
		}
		props
			.insert("context", context.as_str())
			.insert("type", dialog_type.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{capture_tracker, project, update};
	use serde_json::Value;

	#[test]
	fn comments_view_project_context_pairs() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_comments_view(&project(), None, CommentsContext::Project);

		let events = primary.events();
		assert_eq!(primary.event_names(), vec!["Project Comment View", "Viewed Comments"]);
		assert!(events[0].is_deprecated());
		assert_eq!(
			events[1].properties.get("context"),
			Some(&Value::String("project".to_string()))
		);
		assert!(!events[1].properties.contains_key("update_sequence"));
	}

	#[test]
	fn comments_view_update_context_merges_update() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_comments_view(&project(), Some(&update()), CommentsContext::Update);

		let events = primary.events();
		assert_eq!(primary.event_names(), vec!["Update Comment View", "Viewed Comments"]);
		assert_eq!(
			events[1].properties.get("update_sequence"),
			Some(&Value::Number(2.into()))
		);
	}

	#[test]
	fn load_older_comments_carries_page_count() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_load_older_comments(&project(), None, 3, CommentsContext::Project);

		let events = primary.events();
		assert_eq!(
			primary.event_names(),
			vec!["Project Comment Load Older", "Loaded Older Comments"]
		);
		for event in &events {
			assert_eq!(
				event.properties.get("page_count"),
				Some(&Value::Number(3.into()))
			);
		}
	}

	#[test]
	fn editor_type_follows_update_presence() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_opened_comment_editor(&project(), None, CommentDialogContext::ProjectComments);
		tracker.track_opened_comment_editor(
			&project(),
			Some(&update()),
			CommentDialogContext::UpdateComments,
		);

		let events = primary.events();
		assert_eq!(
			events[0].properties.get("type"),
			Some(&Value::String("project".to_string()))
		);
		assert_eq!(
			events[1].properties.get("type"),
			Some(&Value::String("update".to_string()))
		);
	}

	#[test]
	fn legacy_comment_create_is_deprecated_with_body_length() {
		let (primary, _, tracker) = capture_tracker();

		let comment = Comment {
			body: "Take my money".to_string(),
		};
		tracker.track_project_comment_create(&comment, &project());

		let events = primary.events();
		assert_eq!(primary.event_names(), vec!["Project Comment Create"]);
		assert!(events[0].is_deprecated());
		assert_eq!(
			events[0].properties.get("comment_body_length"),
			Some(&Value::Number(13.into()))
		);
	}
}
