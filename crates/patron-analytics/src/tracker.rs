// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The event tracker: composes context bags and dispatches to the sinks.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;
use uuid::Uuid;

use patron_analytics_core::{
	props, AnalyticsError, DataLakeEvent, Properties, RemoteConfig, Result, User,
};

use crate::host::{BundleInfo, DeviceInfo, HostEnvironment, ScreenInfo};
use crate::sink::{NoOpSink, SharedSink};
use crate::text_size::{ContentSizeObserver, ContentSizeSource, FixedContentSize};

/// Observer callback invoked synchronously before the sinks, primarily for
/// test verification.
pub type EventCallback = Box<dyn Fn(&str, &Properties) + Send + Sync>;

/// Composes session, user, and caller context into one bag per event and
/// routes it to the primary sink — and, for allow-listed names, the
/// data-lake sink.
///
/// Tracking is synchronous on the caller's thread. The logged-in user,
/// remote config, and callback are read far more often than written and may
/// be updated from other threads, so they sit behind `RwLock`s.
pub struct Tracker {
	event_sink: SharedSink,
	lake_sink: SharedSink,
	distinct_id: String,
	device: Arc<dyn DeviceInfo>,
	screen: Arc<dyn ScreenInfo>,
	bundle: Arc<dyn BundleInfo>,
	environment: Arc<dyn HostEnvironment>,
	content_size: ContentSizeObserver,
	config: RwLock<Option<RemoteConfig>>,
	logged_in_user: RwLock<Option<User>>,
	event_callback: RwLock<Option<EventCallback>>,
}

impl Tracker {
	pub fn builder() -> TrackerBuilder {
		TrackerBuilder::default()
	}

	/// The stable per-install distinct identifier.
	pub fn distinct_id(&self) -> &str {
		&self.distinct_id
	}

	/// The current logged-in user snapshot.
	pub fn logged_in_user(&self) -> Option<User> {
		self
			.logged_in_user
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Replaces the logged-in user snapshot.
	pub fn set_logged_in_user(&self, user: Option<User>) {
		*self
			.logged_in_user
			.write()
			.unwrap_or_else(PoisonError::into_inner) = user;
	}

	/// The current remote config snapshot.
	pub fn config(&self) -> Option<RemoteConfig> {
		self.config.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Replaces the remote config snapshot.
	pub fn set_config(&self, config: Option<RemoteConfig>) {
		*self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
	}

	/// Installs the observer callback invoked before each dispatch.
	pub fn set_event_callback<F>(&self, callback: F)
	where
		F: Fn(&str, &Properties) + Send + Sync + 'static,
	{
		*self
			.event_callback
			.write()
			.unwrap_or_else(PoisonError::into_inner) = Some(Box::new(callback));
	}

	/// Removes the observer callback.
	pub fn clear_event_callback(&self) {
		*self
			.event_callback
			.write()
			.unwrap_or_else(PoisonError::into_inner) = None;
	}

	/// Tracks an event with caller-supplied properties.
	pub fn track(&self, event: &str, properties: Properties) {
		self.track_with_ref(event, properties, None, None);
	}

	/// Tracks an event, injecting ref-tag attribution into session context.
	pub fn track_with_ref(
		&self,
		event: &str,
		properties: Properties,
		ref_tag: Option<&str>,
		referrer_credit: Option<&str>,
	) {
		let user = self.logged_in_user();
		let config = self.config();

		// Caller-supplied keys win over user context, which wins over session.
		let props = self
			.session_properties(config.as_ref(), user.is_some(), ref_tag, referrer_credit)
			.merge(props::user_properties(user.as_ref(), config.as_ref()))
			.merge(properties);

		if let Some(callback) = self
			.event_callback
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.as_ref()
		{
			callback(event, &props);
		}

		debug!(event = %event, "dispatching analytics event");
		self.event_sink.track(event, &props);

		if DataLakeEvent::is_allow_listed(event) {
			self.lake_sink.track(event, &props);
		}
	}

	/// The `session_`-prefixed bag recomputed on every event.
	fn session_properties(
		&self,
		config: Option<&RemoteConfig>,
		user_logged_in: bool,
		ref_tag: Option<&str>,
		referrer_credit: Option<&str>,
	) -> Properties {
		let connectivity = self.environment.connectivity();

		Properties::new()
			.insert("apple_pay_capable", self.environment.native_pay_capable())
			.insert("apple_pay_device", self.environment.native_pay_device())
			.insert_opt("cellular_connection", connectivity.cellular_technology)
			.insert("client_type", "native")
			.insert_opt(
				"current_variants",
				config.map(RemoteConfig::experiment_variants),
			)
			.insert("display_language", self.environment.display_language())
			.insert("device_format", self.device.idiom().device_format())
			.insert("device_manufacturer", self.device.manufacturer())
			.insert("device_model", self.device.model())
			.insert("device_orientation", self.device.orientation().as_str())
			.insert("device_distinct_id", self.distinct_id.clone())
			.insert_opt("enabled_features", config.map(RemoteConfig::enabled_features))
			.insert(
				"is_voiceover_running",
				self.environment.is_voiceover_running(),
			)
			.insert("mp_lib", "patron_ios")
			.insert("os", self.device.os())
			.insert("os_version", self.device.os_version())
			.insert("time", self.environment.now().timestamp())
			.insert_opt("app_build_number", self.bundle.build_number())
			.insert_opt("app_release_version", self.bundle.release_version())
			.insert("screen_width", self.screen.width())
			.insert("user_agent", self.environment.user_agent())
			.insert("user_logged_in", user_logged_in)
			.insert("wifi_connection", connectivity.wifi)
			.insert("client_platform", self.device.idiom().client_platform())
			.insert_opt(
				"preferred_content_size_category",
				self.content_size.current().map(|category| category.as_str()),
			)
			.insert_opt("ref_tag", ref_tag)
			.insert_opt("referrer_credit", referrer_credit)
			.prefixed("session_")
	}

	pub(crate) fn environment_now(&self) -> chrono::DateTime<chrono::Utc> {
		self.environment.now()
	}

	/// Project context with the current viewer relation mixed in.
	pub(crate) fn project_properties(
		&self,
		project: &patron_analytics_core::Project,
	) -> Properties {
		props::project_properties(
			project,
			self.logged_in_user().as_ref(),
			self.environment.now(),
		)
	}
}

impl std::fmt::Debug for Tracker {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Tracker")
			.field("distinct_id", &self.distinct_id)
			.finish_non_exhaustive()
	}
}

/// Builder for [`Tracker`].
///
/// Sinks default to [`NoOpSink`] and the distinct id to a fresh UUID; the
/// host context traits have no sensible defaults and must be provided.
#[derive(Default)]
pub struct TrackerBuilder {
	event_sink: Option<SharedSink>,
	lake_sink: Option<SharedSink>,
	distinct_id: Option<String>,
	device: Option<Arc<dyn DeviceInfo>>,
	screen: Option<Arc<dyn ScreenInfo>>,
	bundle: Option<Arc<dyn BundleInfo>>,
	environment: Option<Arc<dyn HostEnvironment>>,
	content_size_source: Option<Arc<dyn ContentSizeSource>>,
	config: Option<RemoteConfig>,
	logged_in_user: Option<User>,
}

impl TrackerBuilder {
	/// The primary sink; receives every event.
	pub fn event_sink(mut self, sink: SharedSink) -> Self {
		self.event_sink = Some(sink);
		self
	}

	/// The data-lake sink; receives allow-listed events only.
	pub fn lake_sink(mut self, sink: SharedSink) -> Self {
		self.lake_sink = Some(sink);
		self
	}

	pub fn distinct_id(mut self, distinct_id: impl Into<String>) -> Self {
		self.distinct_id = Some(distinct_id.into());
		self
	}

	pub fn device(mut self, device: Arc<dyn DeviceInfo>) -> Self {
		self.device = Some(device);
		self
	}

	pub fn screen(mut self, screen: Arc<dyn ScreenInfo>) -> Self {
		self.screen = Some(screen);
		self
	}

	pub fn bundle(mut self, bundle: Arc<dyn BundleInfo>) -> Self {
		self.bundle = Some(bundle);
		self
	}

	pub fn environment(mut self, environment: Arc<dyn HostEnvironment>) -> Self {
		self.environment = Some(environment);
		self
	}

	pub fn content_size_source(mut self, source: Arc<dyn ContentSizeSource>) -> Self {
		self.content_size_source = Some(source);
		self
	}

	pub fn config(mut self, config: RemoteConfig) -> Self {
		self.config = Some(config);
		self
	}

	pub fn logged_in_user(mut self, user: User) -> Self {
		self.logged_in_user = Some(user);
		self
	}

	/// Validates the host context and constructs the tracker.
	///
	/// Construction subscribes the content-size observer; dropping the
	/// tracker unsubscribes it.
	pub fn build(self) -> Result<Tracker> {
		let device = self
			.device
			.ok_or(AnalyticsError::MissingHostContext("device"))?;
		let screen = self
			.screen
			.ok_or(AnalyticsError::MissingHostContext("screen"))?;
		let bundle = self
			.bundle
			.ok_or(AnalyticsError::MissingHostContext("bundle"))?;
		let environment = self
			.environment
			.ok_or(AnalyticsError::MissingHostContext("environment"))?;

		let content_size_source = self
			.content_size_source
			.unwrap_or_else(|| Arc::new(FixedContentSize::default()));

		Ok(Tracker {
			event_sink: self.event_sink.unwrap_or_else(|| Arc::new(NoOpSink)),
			lake_sink: self.lake_sink.unwrap_or_else(|| Arc::new(NoOpSink)),
			distinct_id: self
				.distinct_id
				.unwrap_or_else(|| Uuid::new_v4().to_string()),
			device,
			screen,
			bundle,
			environment,
			content_size: ContentSizeObserver::new(content_size_source),
			config: RwLock::new(self.config),
			logged_in_user: RwLock::new(self.logged_in_user),
			event_callback: RwLock::new(None),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::{StaticBundle, StaticDevice, StaticEnvironment, StaticScreen};
	use crate::sink::CaptureSink;
	use crate::text_size::ContentSizeNotifier;
	use chrono::{TimeZone, Utc};
	use patron_analytics_core::{ContentSizeCategory, Location, UserId, UserStats};
	use serde_json::Value;
	use std::collections::BTreeMap;
	use std::sync::atomic::{AtomicUsize, Ordering};

	fn test_user() -> User {
		User {
			id: UserId(7),
			name: Some("blob".to_string()),
			is_admin: Some(false),
			facebook_connected: Some(false),
			location: Some(Location {
				name: "Sydney".to_string(),
				country: Some("AU".to_string()),
			}),
			stats: UserStats {
				backed_projects_count: Some(3),
				starred_projects_count: None,
				created_projects_count: None,
			},
		}
	}

	fn test_tracker() -> (Arc<CaptureSink>, Arc<CaptureSink>, Tracker) {
		let primary = Arc::new(CaptureSink::new());
		let lake = Arc::new(CaptureSink::new());
		let environment = StaticEnvironment {
			now: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
			..Default::default()
		};

		let tracker = Tracker::builder()
			.event_sink(primary.clone())
			.lake_sink(lake.clone())
			.distinct_id("install-1234")
			.device(Arc::new(StaticDevice::default()))
			.screen(Arc::new(StaticScreen::default()))
			.bundle(Arc::new(StaticBundle {
				build_number: Some("1771".to_string()),
				release_version: Some("3.12.0".to_string()),
			}))
			.environment(Arc::new(environment))
			.build()
			.expect("tracker should build");

		(primary, lake, tracker)
	}

	#[test]
	fn build_without_device_fails() {
		let err = Tracker::builder()
			.screen(Arc::new(StaticScreen::default()))
			.bundle(Arc::new(StaticBundle::default()))
			.environment(Arc::new(StaticEnvironment::default()))
			.build()
			.unwrap_err();

		assert!(matches!(err, AnalyticsError::MissingHostContext("device")));
	}

	#[test]
	fn non_allow_listed_event_hits_primary_only() {
		let (primary, lake, tracker) = test_tracker();

		tracker.track("Viewed Login", Properties::new());

		assert_eq!(primary.len(), 1);
		assert_eq!(lake.len(), 0);
		assert_eq!(primary.event_names(), vec!["Viewed Login"]);
	}

	#[test]
	fn allow_listed_event_hits_both_sinks_with_identical_payloads() {
		let (primary, lake, tracker) = test_tracker();

		tracker.track("Project Page Viewed", Properties::new());

		assert_eq!(primary.len(), 1);
		assert_eq!(lake.len(), 1);
		assert_eq!(primary.events()[0], lake.events()[0]);
	}

	#[test]
	fn caller_properties_win_merge_collisions() {
		let (primary, _, tracker) = test_tracker();

		tracker.track(
			"Collision Check",
			Properties::new().insert("session_client_type", "override"),
		);

		let event = &primary.events()[0];
		assert_eq!(
			event.properties.get("session_client_type"),
			Some(&Value::String("override".to_string()))
		);
	}

	#[test]
	fn session_properties_are_present_and_prefixed() {
		let (primary, _, tracker) = test_tracker();

		tracker.track("Anything", Properties::new());

		let props = &primary.events()[0].properties;
		assert_eq!(
			props.get("session_client_type"),
			Some(&Value::String("native".to_string()))
		);
		assert_eq!(
			props.get("session_device_format"),
			Some(&Value::String("phone".to_string()))
		);
		assert_eq!(
			props.get("session_device_distinct_id"),
			Some(&Value::String("install-1234".to_string()))
		);
		assert_eq!(
			props.get("session_mp_lib"),
			Some(&Value::String("patron_ios".to_string()))
		);
		assert_eq!(
			props.get("session_app_build_number"),
			Some(&Value::String("1771".to_string()))
		);
		assert_eq!(props.get("session_user_logged_in"), Some(&Value::Bool(false)));
		assert_eq!(props.get("session_wifi_connection"), Some(&Value::Bool(true)));
		// No config installed: variant and feature lists are null, not absent.
		assert_eq!(props.get("session_current_variants"), Some(&Value::Null));
		assert_eq!(props.get("session_enabled_features"), Some(&Value::Null));
		assert_eq!(props.get("session_ref_tag"), Some(&Value::Null));
		assert_eq!(props.get("session_referrer_credit"), Some(&Value::Null));
	}

	#[test]
	fn ref_tags_are_injected_into_session_context() {
		let (primary, _, tracker) = test_tracker();

		tracker.track_with_ref(
			"Anything",
			Properties::new(),
			Some("discovery_newest"),
			Some("category"),
		);

		let props = &primary.events()[0].properties;
		assert_eq!(
			props.get("session_ref_tag"),
			Some(&Value::String("discovery_newest".to_string()))
		);
		assert_eq!(
			props.get("session_referrer_credit"),
			Some(&Value::String("category".to_string()))
		);
	}

	#[test]
	fn user_context_reflects_login_state() {
		let (primary, _, tracker) = test_tracker();

		tracker.track("Before Login", Properties::new());
		tracker.set_logged_in_user(Some(test_user()));
		tracker.track("After Login", Properties::new());

		let events = primary.events();
		assert_eq!(events[0].properties.get("user_uid"), Some(&Value::Null));
		assert_eq!(
			events[0].properties.get("session_user_logged_in"),
			Some(&Value::Bool(false))
		);
		assert_eq!(
			events[1].properties.get("user_uid"),
			Some(&Value::Number(7.into()))
		);
		assert_eq!(
			events[1].properties.get("session_user_logged_in"),
			Some(&Value::Bool(true))
		);
	}

	#[test]
	fn config_contributes_features_variants_and_country() {
		let (primary, _, tracker) = test_tracker();

		tracker.set_config(Some(RemoteConfig {
			features: BTreeMap::from([
				("ios_native_checkout".to_string(), true),
				("ios_dark_mode".to_string(), false),
			]),
			experiments: BTreeMap::from([("onboarding".to_string(), "control".to_string())]),
			country_code: Some("NZ".to_string()),
		}));

		tracker.track("Anything", Properties::new());

		let props = &primary.events()[0].properties;
		assert_eq!(
			props.get("session_enabled_features"),
			Some(&serde_json::json!(["ios_native_checkout"]))
		);
		assert_eq!(
			props.get("session_current_variants"),
			Some(&serde_json::json!(["onboarding[control]"]))
		);
		assert_eq!(props.get("user_country"), Some(&Value::String("NZ".to_string())));
	}

	#[test]
	fn event_callback_fires_before_sinks_with_final_bag() {
		let (_, _, tracker) = test_tracker();
		let calls = Arc::new(AtomicUsize::new(0));

		let seen = calls.clone();
		tracker.set_event_callback(move |event, props| {
			assert_eq!(event, "Viewed Settings");
			assert!(props.contains_key("session_client_type"));
			seen.fetch_add(1, Ordering::SeqCst);
		});

		tracker.track("Viewed Settings", Properties::new());
		assert_eq!(calls.load(Ordering::SeqCst), 1);

		tracker.clear_event_callback();
		tracker.track("Viewed Settings", Properties::new());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn content_size_changes_flow_into_session_context() {
		let primary = Arc::new(CaptureSink::new());
		let notifier = Arc::new(ContentSizeNotifier::new(Some(ContentSizeCategory::Large)));

		let tracker = Tracker::builder()
			.event_sink(primary.clone())
			.device(Arc::new(StaticDevice::default()))
			.screen(Arc::new(StaticScreen::default()))
			.bundle(Arc::new(StaticBundle::default()))
			.environment(Arc::new(StaticEnvironment::default()))
			.content_size_source(notifier.clone())
			.build()
			.expect("tracker should build");

		tracker.track("First", Properties::new());
		notifier.notify(ContentSizeCategory::AccessibilityLarge);
		tracker.track("Second", Properties::new());

		let events = primary.events();
		assert_eq!(
			events[0]
				.properties
				.get("session_preferred_content_size_category"),
			Some(&Value::String("L".to_string()))
		);
		assert_eq!(
			events[1]
				.properties
				.get("session_preferred_content_size_category"),
			Some(&Value::String("AX2".to_string()))
		);

		drop(tracker);
		assert_eq!(notifier.subscriber_count(), 0);
	}

	#[test]
	fn default_distinct_id_is_generated() {
		let tracker = Tracker::builder()
			.device(Arc::new(StaticDevice::default()))
			.screen(Arc::new(StaticScreen::default()))
			.bundle(Arc::new(StaticBundle::default()))
			.environment(Arc::new(StaticEnvironment::default()))
			.build()
			.expect("tracker should build");

		assert!(!tracker.distinct_id().is_empty());
	}
}
