// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Settings, profile, account, and help events.

use patron_analytics_core::{
	deprecated_props, CreatePasswordEvent, Currency, HelpContext, HelpType, Newsletter,
	NewsletterContext, ProfileProjectsType, Project, Properties,
};

use crate::tracker::Tracker;

impl Tracker {
	pub fn track_profile_view(&self) {
		self.track("Profile View My", deprecated_props());
		self.track("Viewed Profile", Properties::new());
	}

	pub fn track_viewed_profile_tab(&self, projects_type: ProfileProjectsType) {
		self.track(
			"Viewed Profile Tab",
			Properties::new().insert("type", projects_type.as_str()),
		);
	}

	pub fn track_app_store_rating_open(&self) {
		self.track("App Store Rating Open", deprecated_props());
		self.track("Opened App Store Listing", Properties::new());
	}

	/// Legacy-only event; the recommendations toggle has no current name.
	pub fn track_recommendations_opt_in(&self) {
		self.track("Toggled recommendations", deprecated_props());
	}

	/// Legacy-only event; the following toggle has no current name.
	pub fn track_following_opt_in(&self) {
		self.track("Toggled following", deprecated_props());
	}

	pub fn track_cancel_logout_modal(&self) {
		self.track("Canceled Logout", Properties::new().insert("context", "modal"));
	}

	pub fn track_confirm_logout_modal(&self) {
		self.track("Confirmed Logout", Properties::new().insert("context", "modal"));
	}

	pub fn track_logout_modal(&self) {
		self.track("Triggered Logout Modal", Properties::new());
	}

	pub fn track_change_email_notification(&self, notification_type: &str, enabled: bool) {
		self.track(
			if enabled {
				"Enabled Email Notifications"
			} else {
				"Disabled Email Notifications"
			},
			Properties::new().insert("type", notification_type),
		);
	}

	pub fn track_account_view(&self) {
		self.track("Viewed Account", Properties::new());
	}

	pub fn track_create_password(&self, event: CreatePasswordEvent) {
		self.track(event.as_str(), Properties::new());
	}

	pub fn track_change_email_view(&self) {
		self.track("Viewed Change Email", Properties::new());
	}

	pub fn track_change_email(&self) {
		self.track("Changed Email", Properties::new());
	}

	pub fn track_change_password_view(&self) {
		self.track("Viewed Change Password", Properties::new());
	}

	pub fn track_change_password(&self) {
		self.track("Changed Password", Properties::new());
	}

	pub fn track_resent_verification_email(&self) {
		self.track("Resent Verification Email", Properties::new());
	}

	pub fn track_changed_currency(&self, currency: Currency) {
		self.track(
			"Selected Chosen Currency",
			Properties::new().insert("currency", currency.description_text()),
		);
	}

	/// Call when a newsletter preference is toggled.
	///
	/// The legacy twin depends on where the toggle lives: signup surfaces
	/// emit "Signup Newsletter Toggle", the thanks modal emits the old
	/// subscribe/unsubscribe pair, and settings emits no legacy event.
	pub fn track_change_newsletter(
		&self,
		newsletter: Newsletter,
		send_newsletter: bool,
		project: Option<&Project>,
		context: NewsletterContext,
	) {
		let props = match project {
			Some(project) => self.project_properties(project),
			None => Properties::new(),
		}
		.insert("context", context.as_str())
		.insert("type", newsletter.as_str());

		self.track(
			if send_newsletter {
				"Subscribed To Newsletter"
			} else {
				"Unsubscribed From Newsletter"
			},
			props.clone(),
		);

		match context {
			NewsletterContext::Signup | NewsletterContext::FacebookSignup => {
				self.track(
					"Signup Newsletter Toggle",
					Properties::new().insert("send_newsletters", send_newsletter),
				);
			}
			NewsletterContext::Thanks => {
				self.track(
					if send_newsletter {
						"Newsletter Subscribe"
					} else {
						"Newsletter Unsubscribe"
					},
					props,
				);
			}
			NewsletterContext::Settings => {}
		}
	}

	pub fn track_change_project_notification(&self, project_name: &str, project_id: i64) {
		self.track(
			"Changed Project Notifications",
			Properties::new()
				.insert("name", project_name)
				.insert("id", project_id),
		);
	}

	pub fn track_change_push_notification(&self, notification_type: &str, enabled: bool) {
		self.track(
			if enabled {
				"Enabled Push Notifications"
			} else {
				"Disabled Push Notifications"
			},
			Properties::new().insert("type", notification_type),
		);
	}

	pub fn track_push_permission_opt_in(&self) {
		self.track("Confirmed Push Opt-In", Properties::new());
	}

	pub fn track_push_permission_opt_out(&self) {
		self.track("Dismissed Push Opt-In", Properties::new());
	}

	pub fn track_settings_view(&self) {
		self.track("Settings View", deprecated_props());
		self.track("Viewed Settings", Properties::new());
	}

	pub fn track_canceled_contact_email(&self, context: HelpContext) {
		self.track(
			"Canceled Contact Email",
			Properties::new().insert("context", context.as_str()),
		);
	}

	pub fn track_canceled_help_menu(&self, context: HelpContext) {
		self.track(
			"Canceled Help Menu",
			Properties::new().insert("context", context.as_str()),
		);
	}

	/// Legacy-only event; the open has no current name.
	pub fn track_opened_contact_email(&self, _context: HelpContext) {
		self.track("Contact Email Open", deprecated_props());
	}

	pub fn track_selected_help_option(&self, context: HelpContext, help_type: HelpType) {
		self.track(
			"Selected Help Option",
			Properties::new()
				.insert("context", context.as_str())
				.insert("type", help_type.as_str()),
		);
	}

	pub fn track_sent_contact_email(&self, context: HelpContext) {
		self.track(
			"Sent Contact Email",
			Properties::new().insert("context", context.as_str()),
		);

		self.track("Contact Email Sent", deprecated_props());
	}

	pub fn track_showed_help_menu(&self, context: HelpContext) {
		self.track(
			"Showed Help Menu",
			Properties::new().insert("context", context.as_str()),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{capture_tracker, project};
	use serde_json::Value;

	#[test]
	fn settings_view_pairs_with_legacy_name() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_settings_view();

		let events = primary.events();
		assert_eq!(primary.event_names(), vec!["Settings View", "Viewed Settings"]);
		assert!(events[0].is_deprecated());
		assert!(!events[1].is_deprecated());
	}

	#[test]
	fn email_notification_events_follow_toggle() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_change_email_notification("backings", true);
		tracker.track_change_email_notification("backings", false);

		assert_eq!(
			primary.event_names(),
			vec!["Enabled Email Notifications", "Disabled Email Notifications"]
		);
	}

	#[test]
	fn newsletter_from_signup_emits_legacy_toggle() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_change_newsletter(
			Newsletter::Weekly,
			true,
			None,
			NewsletterContext::Signup,
		);

		let events = primary.events();
		assert_eq!(
			primary.event_names(),
			vec!["Subscribed To Newsletter", "Signup Newsletter Toggle"]
		);
		assert_eq!(
			events[1].properties.get("send_newsletters"),
			Some(&Value::Bool(true))
		);
	}

	#[test]
	fn newsletter_from_thanks_emits_legacy_pair_name() {
		let (primary, _, tracker) = capture_tracker();

		let project = project();
		tracker.track_change_newsletter(
			Newsletter::Games,
			false,
			Some(&project),
			NewsletterContext::Thanks,
		);

		assert_eq!(
			primary.event_names(),
			vec!["Unsubscribed From Newsletter", "Newsletter Unsubscribe"]
		);
		for event in primary.events() {
			assert_eq!(
				event.properties.get("type"),
				Some(&Value::String("games".to_string()))
			);
		}
	}

	#[test]
	fn newsletter_from_settings_has_no_legacy_twin() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_change_newsletter(
			Newsletter::Happening,
			true,
			None,
			NewsletterContext::Settings,
		);

		assert_eq!(primary.event_names(), vec!["Subscribed To Newsletter"]);
	}

	#[test]
	fn create_password_events_use_enum_names() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_create_password(CreatePasswordEvent::Viewed);
		tracker.track_create_password(CreatePasswordEvent::PasswordCreated);

		assert_eq!(
			primary.event_names(),
			vec!["Viewed Create Password", "Created Password"]
		);
	}

	#[test]
	fn changed_currency_reports_description() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_changed_currency(Currency::Nzd);

		assert_eq!(
			primary.events()[0].properties.get("currency"),
			Some(&Value::String("New Zealand Dollar (NZD)".to_string()))
		);
	}

	#[test]
	fn help_family_carries_context() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_showed_help_menu(HelpContext::LoginTout);
		tracker.track_selected_help_option(HelpContext::LoginTout, HelpType::HowItWorks);
		tracker.track_sent_contact_email(HelpContext::Settings);

		let events = primary.events();
		assert_eq!(
			primary.event_names(),
			vec![
				"Showed Help Menu",
				"Selected Help Option",
				"Sent Contact Email",
				"Contact Email Sent",
			]
		);
		assert_eq!(
			events[1].properties.get("type"),
			Some(&Value::String("how_it_works".to_string()))
		);
		assert!(events[3].is_deprecated());
	}

	#[test]
	fn legacy_only_toggles_stay_deprecated() {
		let (primary, _, tracker) = capture_tracker();

		tracker.track_recommendations_opt_in();
		tracker.track_following_opt_in();

		for event in primary.events() {
			assert!(event.is_deprecated());
		}
	}
}
