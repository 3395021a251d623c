// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Event-tagging SDK for Patron mobile product analytics.
//!
//! This crate turns in-app user actions into structured analytics events:
//! each `track_*` call gathers session, user, and domain context into one
//! flat property bag and dispatches it to the primary tracking sink — and,
//! for a fixed allow-list of event names, to the data-lake sink as well.
//!
//! Dispatch is synchronous on the caller's thread and fire-and-forget:
//! transport, batching, and retries belong to the sink implementations.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use patron_analytics::{
//!     CaptureSink, StaticBundle, StaticDevice, StaticEnvironment, StaticScreen, Tracker,
//! };
//! use patron_analytics::AuthType;
//!
//! let sink = Arc::new(CaptureSink::new());
//! let tracker = Tracker::builder()
//!     .event_sink(sink.clone())
//!     .device(Arc::new(StaticDevice::default()))
//!     .screen(Arc::new(StaticScreen::default()))
//!     .bundle(Arc::new(StaticBundle::default()))
//!     .environment(Arc::new(StaticEnvironment::default()))
//!     .build()?;
//!
//! tracker.track_login_success(AuthType::Email);
//! assert_eq!(sink.event_names(), vec!["Login", "Logged In"]);
//! # Ok::<(), patron_analytics::AnalyticsError>(())
//! ```

mod events;
mod host;
mod sink;
#[cfg(test)]
mod testing;
mod text_size;
mod tracker;

pub use host::{
	BundleInfo, DeviceInfo, HostEnvironment, ScreenInfo, StaticBundle, StaticDevice,
	StaticEnvironment, StaticScreen,
};
pub use sink::{CaptureSink, LogSink, NoOpSink, SharedSink, TrackingSink};
pub use text_size::{
	ContentSizeCallback, ContentSizeNotifier, ContentSizeObserver, ContentSizeSource,
	FixedContentSize, SubscriptionToken,
};
pub use tracker::{EventCallback, Tracker, TrackerBuilder};

// Re-export core types for convenience
pub use patron_analytics_core::{
	deprecated_props, discovery_properties, project_properties, reward_properties,
	share_properties, update_properties, user_properties, AnalyticsError, AttachmentSource,
	AuthType, Backing, Category, CheckoutContext, CheckoutPageContext, Comment,
	CommentDialogContext, CommentDialogType, CommentsContext, Connectivity, ContentSizeCategory,
	Country, CreatePasswordEvent, Currency, DataLakeEvent, DeviceIdiom, DiscoveryParams,
	EmptyState, Event, ExternalLinkContext, FriendsSource, HelpContext, HelpType, Location,
	LoginIntent, Mailbox, ManagePledgeMenuCta, MessageDialogContext, Newsletter,
	NewsletterContext, Orientation, PaymentMethod, PledgeContext, PledgeStateCta,
	ProfileProjectsType, Project, ProjectDates, ProjectId, ProjectPersonalization, ProjectState,
	ProjectStats, Properties, RefTag, RemoteConfig, Result, Reward, RewardPledgeButton,
	RewardPledgeError, SaveContext, ShareActivityType, ShareContext, Shipping,
	ShippingPreference, ShortcutItem, Sort, TabBarItemLabel, Update, UpdateContext, User,
	UserActivity, UserId, UserStats, DEPRECATED_KEY,
};
