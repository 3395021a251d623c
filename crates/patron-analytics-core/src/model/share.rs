// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The surfaces from which sharing can happen.

use crate::model::project::Project;
use crate::model::update::Update;

/// Where a share interaction originated, with the entity being shared.
///
/// Borrowed from the call site; share events are composed synchronously so
/// no ownership transfer is needed.
#[derive(Debug, Clone, Copy)]
pub enum ShareContext<'a> {
	CreatorDashboard(&'a Project),
	Discovery(&'a Project),
	Project(&'a Project),
	Thanks(&'a Project),
	Update(&'a Project, &'a Update),
}

impl<'a> ShareContext<'a> {
	/// The project being shared, whatever the surface.
	pub fn project(&self) -> &'a Project {
		match self {
			ShareContext::CreatorDashboard(project)
			| ShareContext::Discovery(project)
			| ShareContext::Project(project)
			| ShareContext::Thanks(project)
			| ShareContext::Update(project, _) => project,
		}
	}

	/// The update being shared, when the surface is an update.
	pub fn update(&self) -> Option<&'a Update> {
		match self {
			ShareContext::Update(_, update) => Some(update),
			_ => None,
		}
	}

	/// True when sharing from the post-pledge thanks screen, which routes
	/// the legacy checkout share events.
	pub fn is_thanks(&self) -> bool {
		matches!(self, ShareContext::Thanks(_))
	}

	/// The `context` property value.
	pub fn as_str(&self) -> &'static str {
		match self {
			ShareContext::CreatorDashboard(_) => "creator_dashboard",
			ShareContext::Discovery(_) => "discovery",
			ShareContext::Project(_) => "project",
			ShareContext::Thanks(_) => "thanks",
			ShareContext::Update(_, _) => "update",
		}
	}
}

/// A deep-link continuation handed over by the platform.
#[derive(Debug, Clone, Default)]
pub struct UserActivity {
	pub activity_type: String,
	pub title: Option<String>,
	pub webpage_url: Option<String>,
	pub keywords: Vec<String>,
}
