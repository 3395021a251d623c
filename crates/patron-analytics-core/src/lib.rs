// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Patron mobile product analytics.
//!
//! This crate carries the pure half of the analytics layer: the flat
//! property bag, the closed tracking vocabularies, domain snapshots, and the
//! context providers that turn a snapshot into a prefixed bag. It performs
//! no I/O; dispatch lives in the `patron-analytics` SDK crate.
//!
//! # Example
//!
//! ```
//! use patron_analytics_core::{discovery_properties, DiscoveryParams, Sort};
//!
//! let params = DiscoveryParams {
//!     staff_picks: Some(true),
//!     sort: Some(Sort::Popular),
//!     ..Default::default()
//! };
//!
//! let props = discovery_properties(&params);
//! assert_eq!(props.get("discover_everything").unwrap(), false);
//! ```

pub mod context;
pub mod error;
pub mod event;
pub mod model;
pub mod properties;
pub mod props;
pub mod ref_tag;

pub use context::{
	AttachmentSource, AuthType, CheckoutContext, CheckoutPageContext, CommentDialogContext,
	CommentDialogType, CommentsContext, CreatePasswordEvent, Currency, EmptyState,
	ExternalLinkContext, FriendsSource,
	HelpContext, HelpType, LoginIntent, Mailbox, ManagePledgeMenuCta, MessageDialogContext,
	Newsletter, NewsletterContext, PaymentMethod, PledgeContext, PledgeStateCta,
	ProfileProjectsType, RewardPledgeButton, RewardPledgeError, SaveContext, ShareActivityType,
	ShortcutItem, TabBarItemLabel, UpdateContext,
};
pub use error::{AnalyticsError, Result};
pub use event::{deprecated_props, DataLakeEvent, Event, DEPRECATED_KEY};
pub use model::{
	Backing, Category, Comment, Connectivity, ContentSizeCategory, Country, DeviceIdiom,
	DiscoveryParams, Location, Orientation, Project, ProjectDates, ProjectId,
	ProjectPersonalization, ProjectState, ProjectStats, RemoteConfig, Reward, ShareContext,
	Shipping, ShippingPreference, Sort, Update, User, UserActivity, UserId, UserStats,
};
pub use properties::Properties;
pub use props::{
	category_properties, comment_properties, discovery_properties, project_properties,
	reward_properties, share_properties, update_properties, user_activity_properties,
	user_properties,
};
pub use ref_tag::RefTag;
