// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project snapshot types consumed by the project context provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserId;

/// Unique identifier for a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

impl std::fmt::Display for ProjectId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for ProjectId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self(s.parse()?))
	}
}

/// A point-in-time snapshot of a project, as supplied by the host app.
///
/// Only the fields the analytics layer reports are carried; the host's full
/// project aggregate stays on the host side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
	pub id: ProjectId,
	pub name: String,
	pub state: ProjectState,
	pub country: Country,
	pub category: Category,
	pub location: Location,
	pub creator_id: UserId,
	pub stats: ProjectStats,
	pub dates: ProjectDates,
	pub personalization: ProjectPersonalization,
	pub has_video: bool,
	pub prelaunch_activated: Option<bool>,
	pub rewards_count: u32,
}

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
	Canceled,
	Failed,
	Live,
	Purged,
	Started,
	Submitted,
	Successful,
	Suspended,
}

impl ProjectState {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProjectState::Canceled => "canceled",
			ProjectState::Failed => "failed",
			ProjectState::Live => "live",
			ProjectState::Purged => "purged",
			ProjectState::Started => "started",
			ProjectState::Submitted => "submitted",
			ProjectState::Successful => "successful",
			ProjectState::Suspended => "suspended",
		}
	}
}

/// The country a project was launched in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
	/// ISO 3166-1 alpha-2 code, e.g. "US".
	pub country_code: String,
	/// ISO 4217 code of the project's currency, e.g. "USD".
	pub currency_code: String,
}

/// A category node; subcategories carry their parent inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
	pub id: i64,
	pub name: String,
	pub parent: Option<Box<Category>>,
}

impl Category {
	pub fn root(id: i64, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			parent: None,
		}
	}

	pub fn child(id: i64, name: impl Into<String>, parent: Category) -> Self {
		Self {
			id,
			name: name.into(),
			parent: Some(Box::new(parent)),
		}
	}
}

/// A named location, with its country code when known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
	pub name: String,
	pub country: Option<String>,
}

/// Funding statistics for a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStats {
	pub backers_count: u32,
	pub comments_count: Option<u32>,
	pub goal: f64,
	pub goal_usd: f64,
	pub pledged: f64,
	pub pledged_usd: f64,
	pub static_usd_rate: f64,
	pub updates_count: u32,
}

impl ProjectStats {
	/// Fraction of the goal raised so far; zero for a zero goal.
	pub fn funding_progress(&self) -> f64 {
		if self.goal == 0.0 {
			0.0
		} else {
			self.pledged / self.goal
		}
	}
}

/// Launch and deadline timestamps with the derived durations reported on
/// every project event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDates {
	pub launched_at: DateTime<Utc>,
	pub deadline: DateTime<Utc>,
}

impl ProjectDates {
	/// Whole hours until the deadline, clamped at zero after it passes.
	pub fn hours_remaining(&self, now: DateTime<Utc>) -> i64 {
		(self.deadline - now).num_hours().max(0)
	}

	/// Campaign length in whole days.
	pub fn duration(&self) -> i64 {
		(self.deadline - self.launched_at).num_days()
	}
}

/// The viewer's relationship to a project.
///
/// Fields are `None` when the relationship has not been fetched, which is
/// distinct from an explicit false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPersonalization {
	pub is_starred: Option<bool>,
	pub is_backing: Option<bool>,
}

/// An existing pledge on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backing {
	pub amount: f64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn funding_progress_handles_zero_goal() {
		let stats = ProjectStats {
			backers_count: 0,
			comments_count: None,
			goal: 0.0,
			goal_usd: 0.0,
			pledged: 10.0,
			pledged_usd: 10.0,
			static_usd_rate: 1.0,
			updates_count: 0,
		};
		assert_eq!(stats.funding_progress(), 0.0);
	}

	#[test]
	fn hours_remaining_clamps_at_zero() {
		let dates = ProjectDates {
			launched_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
			deadline: Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap(),
		};

		let before = Utc.with_ymd_and_hms(2025, 1, 30, 0, 0, 0).unwrap();
		assert_eq!(dates.hours_remaining(before), 24);

		let after = Utc.with_ymd_and_hms(2025, 2, 15, 0, 0, 0).unwrap();
		assert_eq!(dates.hours_remaining(after), 0);
	}

	#[test]
	fn duration_in_days() {
		let dates = ProjectDates {
			launched_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
			deadline: Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap(),
		};
		assert_eq!(dates.duration(), 30);
	}

	#[test]
	fn project_id_round_trip() {
		let id: ProjectId = "1234".parse().unwrap();
		assert_eq!(id, ProjectId(1234));
		assert_eq!(id.to_string(), "1234");
	}
}
