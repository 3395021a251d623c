// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Login, signup, password-reset, and two-factor events.
//!
//! Nearly every operation here still emits its legacy name next to the
//! current one; the legacy names carry only the deprecated marker.

use patron_analytics_core::{deprecated_props, AuthType, LoginIntent, Properties, DEPRECATED_KEY};

use crate::tracker::Tracker;

impl Tracker {
	/// Call when the login/signup tout is shown.
	pub fn track_login_tout(&self, intent: LoginIntent) {
		self.track(
			"Application Login or Signup",
			Properties::new()
				.insert("intent", intent.as_str())
				.insert("context", intent.as_str())
				.insert(DEPRECATED_KEY, true),
		);

		self.track(
			"Viewed Login Signup",
			Properties::new()
				.insert("intent", intent.as_str())
				.insert("context", intent.as_str()),
		);
	}

	pub fn track_login_form_view(&self) {
		self.track("User Login", deprecated_props());
		self.track("Viewed Login", Properties::new());
	}

	pub fn track_login_success(&self, auth_type: AuthType) {
		self.track("Login", deprecated_props());
		self.track(
			"Logged In",
			Properties::new().insert("auth_type", auth_type.as_str()),
		);
	}

	pub fn track_login_error(&self, auth_type: AuthType) {
		self.track("Errored User Login", deprecated_props());
		self.track(
			"Errored Login",
			Properties::new().insert("auth_type", auth_type.as_str()),
		);
	}

	pub fn track_reset_password(&self) {
		self.track("Forgot Password View", deprecated_props());
		self.track("Viewed Forgot Password", Properties::new());
	}

	pub fn track_reset_password_success(&self) {
		self.track("Forgot Password Requested", deprecated_props());
		self.track("Requested Password Reset", Properties::new());
	}

	pub fn track_reset_password_error(&self) {
		self.track("Forgot Password Errored", deprecated_props());
		self.track("Errored Forgot Password", Properties::new());
	}

	pub fn track_facebook_confirmation(&self) {
		self.track("Facebook Confirm", deprecated_props());
		self.track("Viewed Facebook Signup", Properties::new());
	}

	pub fn track_tfa(&self) {
		self.track("Two-factor Authentication Confirm View", deprecated_props());
		self.track("Viewed Two-Factor Confirmation", Properties::new());
	}

	pub fn track_tfa_resend_code(&self) {
		self.track("Two-factor Authentication Resend Code", deprecated_props());
		self.track("Resent Two-Factor Code", Properties::new());
	}

	/// Call when an error is returned after attempting signup.
	pub fn track_signup_error(&self, auth_type: AuthType) {
		self.track("Errored User Signup", deprecated_props());
		self.track(
			"Errored Signup",
			Properties::new().insert("auth_type", auth_type.as_str()),
		);
	}

	/// Call when the user has successfully signed up for a new account.
	pub fn track_signup_success(&self, auth_type: AuthType) {
		self.track("New User", deprecated_props());
		self.track(
			"Signed Up",
			Properties::new().insert("auth_type", auth_type.as_str()),
		);
	}

	/// Call once when the signup view loads.
	pub fn track_signup_view(&self) {
		self.track("User Signup", deprecated_props());
		self.track("Viewed Signup", Properties::new());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::capture_tracker;
	use serde_json::Value;

	#[test]
	fn login_success_emits_exactly_two_events() {
		let (primary, lake, tracker) = capture_tracker();

		tracker.track_login_success(AuthType::Email);

		let events = primary.events();
		assert_eq!(events.len(), 2);
		assert!(lake.is_empty());

		assert_eq!(events[0].name, "Login");
		assert!(events[0].is_deprecated());
		assert!(!events[0].properties.contains_key("auth_type"));

		assert_eq!(events[1].name, "Logged In");
		assert!(!events[1].is_deprecated());
		assert_eq!(
			events[1].properties.get("auth_type"),
			Some(&Value::String("Email".to_string()))
		);
	}

	#[test]
	fn signup_success_facebook() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_signup_success(AuthType::Facebook);

		let events = primary.events();
		assert_eq!(primary.event_names(), vec!["New User", "Signed Up"]);
		assert_eq!(
			events[1].properties.get("auth_type"),
			Some(&Value::String("Facebook".to_string()))
		);
	}

	#[test]
	fn login_tout_carries_intent_twice() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_login_tout(LoginIntent::BackProject);

		let events = primary.events();
		assert_eq!(
			primary.event_names(),
			vec!["Application Login or Signup", "Viewed Login Signup"]
		);
		for event in &events {
			assert_eq!(
				event.properties.get("intent"),
				Some(&Value::String("back_project".to_string()))
			);
			assert_eq!(
				event.properties.get("context"),
				Some(&Value::String("back_project".to_string()))
			);
		}
		assert!(events[0].is_deprecated());
	}

	#[test]
	fn reset_password_flow_pairs() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_reset_password();
		tracker.track_reset_password_success();
		tracker.track_reset_password_error();

		assert_eq!(
			primary.event_names(),
			vec![
				"Forgot Password View",
				"Viewed Forgot Password",
				"Forgot Password Requested",
				"Requested Password Reset",
				"Forgot Password Errored",
				"Errored Forgot Password",
			]
		);
	}
}
