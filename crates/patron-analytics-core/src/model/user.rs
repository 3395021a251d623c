// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authenticated-user snapshot consumed by the user context provider.

use serde::{Deserialize, Serialize};

use crate::model::project::Location;

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for UserId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(s.parse()?))
	}
}

/// A point-in-time snapshot of the logged-in user.
///
/// Every field past the id is optional; the user provider degrades each
/// absent field to an explicit null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub name: Option<String>,
	pub is_admin: Option<bool>,
	pub facebook_connected: Option<bool>,
	pub location: Option<Location>,
	pub stats: UserStats,
}

/// Aggregate counts shown on a user's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
	pub backed_projects_count: Option<u32>,
	pub starred_projects_count: Option<u32>,
	pub created_projects_count: Option<u32>,
}
