// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared fixtures for the event-catalogue tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use patron_analytics_core::{
	Category, Country, Location, Project, ProjectDates, ProjectId, ProjectPersonalization,
	ProjectState, ProjectStats, Reward, Shipping, ShippingPreference, Update, User, UserId,
	UserStats,
};

use crate::host::{StaticBundle, StaticDevice, StaticEnvironment, StaticScreen};
use crate::sink::CaptureSink;
use crate::tracker::Tracker;

/// A tracker with capture sinks on both slots and a pinned clock.
pub fn capture_tracker() -> (Arc<CaptureSink>, Arc<CaptureSink>, Tracker) {
	let primary = Arc::new(CaptureSink::new());
	let lake = Arc::new(CaptureSink::new());

	let tracker = Tracker::builder()
		.event_sink(primary.clone())
		.lake_sink(lake.clone())
		.distinct_id("install-test")
		.device(Arc::new(StaticDevice::default()))
		.screen(Arc::new(StaticScreen::default()))
		.bundle(Arc::new(StaticBundle::default()))
		.environment(Arc::new(StaticEnvironment {
			now: Some(Utc.with_ymd_and_hms(2025, 3, 16, 0, 0, 0).unwrap()),
			..Default::default()
		}))
		.build()
		.expect("test tracker should build");

	(primary, lake, tracker)
}

pub fn project() -> Project {
	Project {
		id: ProjectId(42),
		name: "Cosmic Salad".to_string(),
		state: ProjectState::Live,
		country: Country {
			country_code: "US".to_string(),
			currency_code: "USD".to_string(),
		},
		category: Category::child(12, "Tabletop Games", Category::root(3, "Games")),
		location: Location {
			name: "Brooklyn, NY".to_string(),
			country: Some("US".to_string()),
		},
		creator_id: UserId(17),
		stats: ProjectStats {
			backers_count: 150,
			comments_count: Some(12),
			goal: 1_000.0,
			goal_usd: 1_000.0,
			pledged: 500.0,
			pledged_usd: 500.0,
			static_usd_rate: 1.0,
			updates_count: 3,
		},
		dates: ProjectDates {
			launched_at: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
			deadline: Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap(),
		},
		personalization: ProjectPersonalization::default(),
		has_video: true,
		prelaunch_activated: Some(false),
		rewards_count: 4,
	}
}

pub fn user(id: i64) -> User {
	User {
		id: UserId(id),
		name: Some("blob".to_string()),
		is_admin: Some(false),
		facebook_connected: Some(false),
		location: None,
		stats: UserStats::default(),
	}
}

pub fn reward() -> Reward {
	Reward {
		id: 9,
		minimum: 25.0,
		limit: Some(100),
		shipping: Shipping {
			enabled: true,
			preference: Some(ShippingPreference::Unrestricted),
		},
		items_count: 2,
	}
}

pub fn update() -> Update {
	Update {
		sequence: 2,
		comments_count: Some(1),
		likes_count: Some(8),
		has_liked: Some(false),
		published_at: Some(Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()),
	}
}
