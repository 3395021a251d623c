// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project-update snapshot consumed by the update context provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A creator update posted to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
	/// 1-based position in the project's update stream.
	pub sequence: u32,
	pub comments_count: Option<u32>,
	pub likes_count: Option<u32>,
	/// Whether the viewer has liked this update.
	pub has_liked: Option<bool>,
	pub published_at: Option<DateTime<Utc>>,
}

/// A comment on a project or update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
	pub body: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn update_serde_round_trip() {
		let update = Update {
			sequence: 4,
			comments_count: Some(12),
			likes_count: None,
			has_liked: Some(true),
			published_at: None,
		};

		let json = serde_json::to_string(&update).unwrap();
		let parsed: Update = serde_json::from_str(&json).unwrap();
		assert_eq!(parsed.sequence, 4);
		assert_eq!(parsed.comments_count, Some(12));
		assert_eq!(parsed.likes_count, None);
	}
}
