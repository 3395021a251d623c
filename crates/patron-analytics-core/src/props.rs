// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Context providers: pure functions mapping domain snapshots to prefixed
//! property bags.
//!
//! Every provider emits its full key set on every call; an absent input
//! becomes an explicit null value, never an omitted key, so the schema seen
//! by the sinks is stable.

use chrono::{DateTime, Utc};

use crate::context::ShareActivityType;
use crate::model::config::RemoteConfig;
use crate::model::discovery::DiscoveryParams;
use crate::model::project::{Category, Project};
use crate::model::reward::Reward;
use crate::model::share::{ShareContext, UserActivity};
use crate::model::update::{Comment, Update};
use crate::model::user::User;
use crate::properties::Properties;
use crate::ref_tag::RefTag;

/// Properties of the project an event concerns, prefixed `project_`.
///
/// Includes the viewer-relation keys (`project_user_has_watched`,
/// `project_user_is_backer`, `project_user_is_project_creator`) derived from
/// the logged-in user.
pub fn project_properties(
	project: &Project,
	logged_in_user: Option<&User>,
	now: DateTime<Utc>,
) -> Properties {
	let props = Properties::new()
		.insert("backers_count", project.stats.backers_count)
		.insert("subcategory", project.category.name.clone())
		.insert("country", project.country.country_code.clone())
		.insert("comments_count", project.stats.comments_count.unwrap_or(0))
		.insert("currency", project.country.currency_code.clone())
		.insert("creator_uid", project.creator_id.0)
		.insert("deadline", project.dates.deadline.timestamp())
		.insert("goal", project.stats.goal)
		.insert("launched_at", project.dates.launched_at.timestamp())
		.insert("location", project.location.name.clone())
		.insert("name", project.name.clone())
		.insert("pid", project.id.0)
		.insert_opt(
			"category",
			project.category.parent.as_ref().map(|parent| parent.name.clone()),
		)
		.insert("percent_raised", project.stats.funding_progress())
		.insert("state", project.state.as_str())
		.insert("static_usd_rate", project.stats.static_usd_rate)
		.insert("current_pledge_amount", project.stats.pledged)
		.insert("current_pledge_amount_usd", project.stats.pledged_usd)
		.insert("goal_usd", project.stats.goal_usd)
		.insert("has_video", project.has_video)
		.insert("updates_count", project.stats.updates_count)
		.insert_opt("prelaunch_activated", project.prelaunch_activated)
		.insert("rewards_count", project.rewards_count)
		.insert("hours_remaining", project.dates.hours_remaining(now))
		.insert("duration", project.dates.duration());

	let viewer = Properties::new()
		.insert_opt("has_watched", project.personalization.is_starred)
		.insert_opt("is_backer", project.personalization.is_backing)
		.insert(
			"is_project_creator",
			logged_in_user.is_some_and(|user| user.id == project.creator_id),
		)
		.prefixed("user_");

	props.merge(viewer).prefixed("project_")
}

/// Properties of the logged-in user, prefixed `user_`.
///
/// With no user, every field is null except `user_country`, which falls back
/// to the remote config's geolocated country code.
pub fn user_properties(user: Option<&User>, config: Option<&RemoteConfig>) -> Properties {
	let country = user
		.and_then(|u| u.location.as_ref())
		.and_then(|location| location.country.clone())
		.or_else(|| config.and_then(|c| c.country_code.clone()));

	Properties::new()
		.insert_opt("is_admin", user.and_then(|u| u.is_admin))
		.insert_opt(
			"backed_projects_count",
			user.and_then(|u| u.stats.backed_projects_count),
		)
		.insert_opt("country", country)
		.insert_opt("facebook_account", user.and_then(|u| u.facebook_connected))
		.insert_opt(
			"watched_projects_count",
			user.and_then(|u| u.stats.starred_projects_count),
		)
		.insert_opt(
			"launched_projects_count",
			user.and_then(|u| u.stats.created_projects_count),
		)
		.insert_opt("uid", user.map(|u| u.id.0))
		.prefixed("user_")
}

/// Properties of the reward being pledged for, prefixed `backer_reward_`.
///
/// The "no reward" sentinel contributes nothing.
pub fn reward_properties(reward: &Reward) -> Properties {
	if reward.is_no_reward() {
		return Properties::new();
	}

	Properties::new()
		.insert("id", reward.id)
		.insert("is_limited_quantity", reward.limit.is_none())
		.insert("minimum", reward.minimum)
		.insert("shipping_enabled", reward.shipping.enabled)
		.insert_opt(
			"shipping_preference",
			reward.shipping.preference.map(|preference| preference.as_str()),
		)
		.insert("has_items", reward.items_count > 0)
		.prefixed("backer_reward_")
}

/// Properties of a creator update, prefixed `update_`.
pub fn update_properties(update: &Update) -> Properties {
	Properties::new()
		.insert_opt("comments_count", update.comments_count)
		.insert_opt("user_has_liked", update.has_liked)
		.insert_opt("likes_count", update.likes_count)
		.insert_opt(
			"published_at",
			update.published_at.map(|published| published.timestamp()),
		)
		.insert("sequence", update.sequence)
		.prefixed("update_")
}

/// Properties of a comment, prefixed `comment_`.
pub fn comment_properties(comment: &Comment) -> Properties {
	Properties::new()
		.insert("body_length", comment.body.chars().count() as u64)
		.prefixed("comment_")
}

/// Id and name of a category node under the given prefix; nulls when absent.
pub fn category_properties(category: Option<&Category>, prefix: &str) -> Properties {
	Properties::new()
		.insert_opt("id", category.map(|c| c.id))
		.insert_opt("name", category.map(|c| c.name.clone()))
		.prefixed(prefix)
}

/// Properties of a discovery search, prefixed `discover_`.
///
/// `discover_everything` is true iff no filter field is set; the selected
/// category reports under `subcategory_` with its parent under `category_`.
pub fn discovery_properties(params: &DiscoveryParams) -> Properties {
	let category = params.category.as_ref();
	let parent = category.and_then(|c| c.parent.as_deref());

	Properties::new()
		.insert_opt("recommended", params.recommended)
		.insert_opt("social", params.social)
		.insert_opt("pwl", params.staff_picks)
		.insert_opt("watched", params.starred)
		.insert_opt("tag", params.tag_id)
		.merge(category_properties(category, "subcategory_"))
		.merge(category_properties(parent, "category_"))
		.insert("everything", params.is_everything())
		.insert_opt("sort", params.sort.map(|sort| sort.as_str()))
		.insert("ref_tag", RefTag::from_params(params).tag())
		.insert_opt("search_term", params.query.clone())
		.prefixed("discover_")
}

/// Properties of a share interaction: the share surface's `context`
/// discriminator, the platform activity, and the shared entity's bags.
pub fn share_properties(
	share_context: &ShareContext<'_>,
	logged_in_user: Option<&User>,
	share_activity_type: Option<&ShareActivityType>,
	now: DateTime<Utc>,
) -> Properties {
	let mut props = Properties::new()
		.insert_opt(
			"share_activity_type",
			share_activity_type.map(|activity| activity.raw().to_string()),
		)
		.insert_opt(
			"share_type",
			share_activity_type.map(|activity| activity.share_type().to_string()),
		)
		.merge(project_properties(share_context.project(), logged_in_user, now));

	if let Some(update) = share_context.update() {
		props = props.merge(update_properties(update));
	}

	props.insert("context", share_context.as_str())
}

/// Properties of a deep-link continuation, unprefixed.
pub fn user_activity_properties(activity: &UserActivity) -> Properties {
	Properties::new()
		.insert("user_activity_type", activity.activity_type.clone())
		.insert_opt("user_activity_title", activity.title.clone())
		.insert_opt("user_activity_webpage_url", activity.webpage_url.clone())
		.insert("user_activity_keywords", activity.keywords.clone())
}
