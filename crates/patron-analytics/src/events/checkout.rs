// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Checkout, reward, native-pay, and payment-method events.

use patron_analytics_core::{
	deprecated_props, props, Backing, CheckoutContext, CheckoutPageContext, ManagePledgeMenuCta,
	PaymentMethod, PledgeContext, PledgeStateCta, Project, Properties, Reward, RewardPledgeButton,
	RewardPledgeError,
};

use crate::tracker::Tracker;

impl Tracker {
	/// Call when the project page's pledge call-to-action is clicked; the
	/// event name follows the button's state.
	pub fn track_pledge_cta_button_clicked(
		&self,
		state: PledgeStateCta,
		project: &Project,
		screen: CheckoutContext,
	) {
		let props = self
			.project_properties(project)
			.insert("screen", screen.as_str());

		let event = match state {
			PledgeStateCta::Fix => "Fix Pledge Button Clicked",
			PledgeStateCta::Pledge => "Back this Project Button Clicked",
			PledgeStateCta::Manage => "Manage Pledge Button Clicked",
			PledgeStateCta::SeeRewards => "See Rewards Button Clicked",
			PledgeStateCta::ViewBacking => "View Your Pledge Button Clicked",
			PledgeStateCta::ViewRewards => "View Rewards Button Clicked",
			PledgeStateCta::ViewYourRewards => "View Your Rewards Button Clicked",
		};

		self.track(event, props);
	}

	pub fn track_cancel_pledge_button_clicked(&self, project: &Project, backing: &Backing) {
		self.track(
			"Cancel Pledge Button Clicked",
			self
				.project_properties(project)
				.insert("pledge_total", backing.amount),
		);
	}

	pub fn track_update_payment_method_button(&self, project: &Project, pledge_amount: f64) {
		self.track(
			"Update Payment Method Button Clicked",
			self
				.project_properties(project)
				.insert("pledge_total", pledge_amount),
		);
	}

	pub fn track_update_pledge_button_clicked(&self, project: &Project, pledge_amount: f64) {
		self.track(
			"Update Pledge Button Clicked",
			self
				.project_properties(project)
				.insert("pledge_total", pledge_amount),
		);
	}

	pub fn track_manage_pledge_option_clicked(&self, project: &Project, cta: ManagePledgeMenuCta) {
		self.track(
			"Manage Pledge Option Clicked",
			self.project_properties(project).insert("cta", cta.as_str()),
		);
	}

	pub fn track_select_reward_button_clicked(
		&self,
		project: &Project,
		reward: Option<&Reward>,
		backing: Option<&Backing>,
		screen: CheckoutContext,
	) {
		let props = self
			.project_properties(project)
			.insert("screen", screen.as_str())
			.insert_opt("backer_reward_minimum", reward.map(|r| r.minimum))
			.insert_opt("pledge_total", backing.map(|b| b.amount));

		self.track("Select Reward Button Clicked", props);
	}

	pub fn track_pledge_screen_viewed(&self, project: &Project) {
		self.track("Pledge Screen Viewed", self.project_properties(project));
	}

	pub fn track_pledge_button_clicked(&self, project: &Project, pledge_amount: f64) {
		self.track(
			"Pledge Button Clicked",
			self
				.project_properties(project)
				.insert("pledge_total", pledge_amount),
		);
	}

	pub fn track_add_new_card_button_clicked(&self, project: &Project) {
		self.track("Add New Card Button Clicked", self.project_properties(project));
	}

	pub fn track_checkout_cancel(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Checkout Cancel", props.clone().merge(deprecated_props()));
		self.track("Canceled Checkout", props);
	}

	pub fn track_clicked_reward_pledge_button(
		&self,
		project: &Project,
		reward: &Reward,
		button: RewardPledgeButton,
		page_context: CheckoutPageContext,
		pledge_context: PledgeContext,
	) {
		let props = self
			.reward_pledge_properties(project, reward, pledge_context)
			.insert("type", button.as_str())
			.insert("context", page_context.as_str());

		self.track("Clicked Reward Pledge Button", props);
	}

	pub fn track_errored_reward_pledge_button_click(
		&self,
		project: &Project,
		reward: &Reward,
		error_text: &str,
		error: RewardPledgeError,
		payment_method: Option<PaymentMethod>,
		page_context: CheckoutPageContext,
		pledge_context: PledgeContext,
	) {
		let props = self
			.reward_pledge_properties(project, reward, pledge_context)
			.insert("error_text", error_text)
			.insert("type", error.as_str())
			.insert("context", page_context.as_str())
			.insert_opt("payment_method", payment_method.map(|method| method.as_str()));

		self.track("Errored Reward Pledge Button Click", props);
	}

	pub fn track_changed_pledge_amount(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Checkout Amount Changed", props.clone().merge(deprecated_props()));
		self.track("Changed Pledge Amount", props);
	}

	pub fn track_selected_shipping_destination(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Checkout Location Changed", props.clone().merge(deprecated_props()));
		self.track("Selected Shipping Destination", props);
	}

	pub fn track_selected_reward(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Reward Checkout", props.clone().merge(deprecated_props()));
		self.track("Selected Reward", props);
	}

	pub fn track_closed_reward(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		self.track(
			"Closed Reward",
			self.reward_pledge_properties(project, reward, pledge_context),
		);
	}

	pub fn track_expanded_reward_description(
		&self,
		reward: &Reward,
		project: &Project,
		pledge_context: PledgeContext,
	) {
		self.track(
			"Expanded Reward Description",
			self.reward_pledge_properties(project, reward, pledge_context),
		);
	}

	pub fn track_expanded_unavailable_reward(
		&self,
		reward: &Reward,
		project: &Project,
		pledge_context: PledgeContext,
	) {
		self.track(
			"Expanded Unavailable Reward",
			self.reward_pledge_properties(project, reward, pledge_context),
		);
	}

	pub fn track_show_apple_pay_sheet(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Apple Pay Show Sheet", props.clone().merge(deprecated_props()));
		self.track("Showed Apple Pay Sheet", props);
	}

	pub fn track_apple_pay_authorized_payment(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Apple Pay Authorized", props.clone().merge(deprecated_props()));
		self.track("Authorized Apple Pay", props);
	}

	pub fn track_stripe_token_created_for_apple_pay(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track(
			"Apple Pay Stripe Token Created",
			props.clone().merge(deprecated_props()),
		);
		self.track("Created Apple Pay Stripe Token", props);
	}

	pub fn track_stripe_token_errored_for_apple_pay(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track(
			"Apple Pay Stripe Token Errored",
			props.clone().merge(deprecated_props()),
		);
		self.track("Errored Apple Pay Stripe Token", props);
	}

	/// The completion event never got a replacement name; only the legacy
	/// event is emitted.
	pub fn track_apple_pay_finished(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Apple Pay Finished", props.merge(deprecated_props()));
	}

	pub fn track_apple_pay_sheet_canceled(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) {
		let props = self.reward_pledge_properties(project, reward, pledge_context);

		self.track("Apple Pay Canceled", props.clone().merge(deprecated_props()));
		self.track("Canceled Apple Pay", props);
	}

	pub fn track_viewed_payment_methods(&self) {
		self.track("Viewed Payment Methods", Properties::new());
	}

	pub fn track_viewed_add_new_card(&self) {
		self.track("Viewed Add New Card", Properties::new());
	}

	pub fn track_deleted_payment_method(&self) {
		self.track("Deleted Payment Method", Properties::new());
	}

	pub fn track_delete_payment_method_error(&self) {
		self.track("Errored Delete Payment Method", Properties::new());
	}

	pub fn track_saved_payment_method(&self) {
		self.track("Saved Payment Method", Properties::new());
	}

	pub fn track_failed_payment_method_creation(&self) {
		self.track("Failed Payment Method Creation", Properties::new());
	}

	/// Project, reward, and pledge-flow context shared by the reward
	/// checkout family.
	fn reward_pledge_properties(
		&self,
		project: &Project,
		reward: &Reward,
		pledge_context: PledgeContext,
	) -> Properties {
		self
			.project_properties(project)
			.merge(props::reward_properties(reward))
			.insert("pledge_context", pledge_context.as_str())
	}
}
