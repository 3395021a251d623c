// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Closed vocabularies discriminating where and how a tracked action happened.
//!
//! Every enum carries its canonical label through an exhaustive `as_str`
//! projection, so adding a variant fails to compile until it is labeled.
//! Label strings are consumed by downstream dashboards and must not change.

use crate::error::AnalyticsError;

/// The authentication method behind a login or signup event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
	Email,
	Facebook,
}

impl AuthType {
	pub fn as_str(&self) -> &'static str {
		match self {
			AuthType::Email => "Email",
			AuthType::Facebook => "Facebook",
		}
	}
}

impl std::fmt::Display for AuthType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for AuthType {
	type Err = AnalyticsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"Email" => Ok(AuthType::Email),
			"Facebook" => Ok(AuthType::Facebook),
			_ => Err(AnalyticsError::UnknownLabel(s.to_string())),
		}
	}
}

/// The place from which an external link was opened.
///
/// - `ProjectCreator`: the creator profile, reached from the project page.
/// - `ProjectDescription`: the project description page.
/// - `ProjectUpdate` / `ProjectUpdates`: a single update or the updates index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLinkContext {
	ProjectCreator,
	ProjectDescription,
	ProjectUpdate,
	ProjectUpdates,
}

impl ExternalLinkContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			ExternalLinkContext::ProjectCreator => "project_creator",
			ExternalLinkContext::ProjectDescription => "project_description",
			ExternalLinkContext::ProjectUpdate => "project_update",
			ExternalLinkContext::ProjectUpdates => "project_updates",
		}
	}
}

/// The place from which the message dialog was presented.
///
/// - `BackerModal`: the backing view, reached via "View pledge".
/// - `CreatorActivity`: the creator's activity feed.
/// - `Messages`: the messages inbox.
/// - `ProjectMessages`: the inbox filtered to one of a creator's projects.
/// - `ProjectPage`: the project page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDialogContext {
	BackerModal,
	CreatorActivity,
	Messages,
	ProjectMessages,
	ProjectPage,
}

impl MessageDialogContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			MessageDialogContext::BackerModal => "backer_modal",
			MessageDialogContext::CreatorActivity => "creator_activity",
			MessageDialogContext::Messages => "messages",
			MessageDialogContext::ProjectMessages => "project_messages",
			MessageDialogContext::ProjectPage => "project_page",
		}
	}
}

/// The place from which the comment editor was presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDialogContext {
	ProjectActivity,
	ProjectComments,
	UpdateComments,
}

impl CommentDialogContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			CommentDialogContext::ProjectActivity => "project_activity",
			CommentDialogContext::ProjectComments => "project_comments",
			CommentDialogContext::UpdateComments => "update_comments",
		}
	}
}

/// Whether a comment dialog targets a project or an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentDialogType {
	Project,
	Update,
}

impl CommentDialogType {
	pub fn as_str(&self) -> &'static str {
		match self {
			CommentDialogType::Project => "project",
			CommentDialogType::Update => "update",
		}
	}
}

/// Whether a comments screen belongs to a project or an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentsContext {
	Project,
	Update,
}

impl CommentsContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			CommentsContext::Project => "project",
			CommentsContext::Update => "update",
		}
	}
}

/// The surface from which a project was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveContext {
	Discovery,
	Project,
}

impl SaveContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			SaveContext::Discovery => "discovery",
			SaveContext::Project => "project",
		}
	}
}

/// The surface from which a newsletter toggle was flipped.
///
/// - `FacebookSignup`: the Facebook confirmation signup screen.
/// - `Settings`: the settings screen.
/// - `Signup`: the signup screen.
/// - `Thanks`: the thanks page modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterContext {
	FacebookSignup,
	Settings,
	Signup,
	Thanks,
}

impl NewsletterContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			NewsletterContext::FacebookSignup => "facebook_signup",
			NewsletterContext::Settings => "settings",
			NewsletterContext::Signup => "signup",
			NewsletterContext::Thanks => "thanks",
		}
	}
}

/// The flow a pledge is part of.
///
/// - `ChangeReward`: switching the current reward to a different one.
/// - `ManageReward`: changing details of the reward currently backed.
/// - `NewPledge`: pledging without an existing backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PledgeContext {
	ChangeReward,
	ManageReward,
	NewPledge,
}

impl PledgeContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			PledgeContext::ChangeReward => "change_reward",
			PledgeContext::ManageReward => "manage_reward",
			PledgeContext::NewPledge => "new_pledge",
		}
	}
}

/// The menu option chosen on the manage-pledge screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagePledgeMenuCta {
	CancelPledge,
	ChangePaymentMethod,
	ChooseAnotherReward,
	ContactCreator,
	UpdatePledge,
	ViewRewards,
}

impl ManagePledgeMenuCta {
	pub fn as_str(&self) -> &'static str {
		match self {
			ManagePledgeMenuCta::CancelPledge => "cancel_pledge",
			ManagePledgeMenuCta::ChangePaymentMethod => "change_payment_method",
			ManagePledgeMenuCta::ChooseAnotherReward => "choose_another_reward",
			ManagePledgeMenuCta::ContactCreator => "contact_creator",
			ManagePledgeMenuCta::UpdatePledge => "update_pledge",
			ManagePledgeMenuCta::ViewRewards => "view_rewards",
		}
	}
}

/// The button clicked on the reward pledge screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardPledgeButton {
	ApplePay,
	Cancel,
	ChangePaymentMethod,
	PaymentMethods,
	UpdatePledge,
}

impl RewardPledgeButton {
	pub fn as_str(&self) -> &'static str {
		match self {
			RewardPledgeButton::ApplePay => "apple_pay",
			RewardPledgeButton::Cancel => "cancel",
			RewardPledgeButton::ChangePaymentMethod => "change_payment_method",
			RewardPledgeButton::PaymentMethods => "payment_methods",
			RewardPledgeButton::UpdatePledge => "update_pledge",
		}
	}
}

/// The validation error hit when clicking a reward pledge button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardPledgeError {
	MaximumAmount,
	MinimumAmount,
}

impl RewardPledgeError {
	pub fn as_str(&self) -> &'static str {
		match self {
			RewardPledgeError::MaximumAmount => "MAXIMUM_AMOUNT",
			RewardPledgeError::MinimumAmount => "MINIMUM_AMOUNT",
		}
	}
}

/// The payment instrument used for a pledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
	ApplePay,
}

impl PaymentMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			PaymentMethod::ApplePay => "apple_pay",
		}
	}
}

/// The page on which a checkout event occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPageContext {
	PaymentsPage,
	ProjectPage,
	RewardSelection,
}

impl CheckoutPageContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			CheckoutPageContext::PaymentsPage => "Payments Page",
			CheckoutPageContext::ProjectPage => "Project Page",
			CheckoutPageContext::RewardSelection => "Reward Selection",
		}
	}
}

/// The screen from which a pledge call-to-action was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutContext {
	BackThisPage,
	ProjectPage,
}

impl CheckoutContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			CheckoutContext::BackThisPage => "Back this page",
			CheckoutContext::ProjectPage => "Project page",
		}
	}
}

/// The state of the pledge call-to-action button on the project page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PledgeStateCta {
	Fix,
	Pledge,
	Manage,
	SeeRewards,
	ViewBacking,
	ViewRewards,
	ViewYourRewards,
}

/// The place from which an update was presented.
///
/// - `Activity`: the activity feed.
/// - `ActivitySample`: the activity sample in discovery.
/// - `CreatorActivity`: the creator's activity feed.
/// - `DeepLink`: a deep link, including push notifications.
/// - `DraftPreview`: the update draft editor.
/// - `Updates`: the updates index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateContext {
	Activity,
	ActivitySample,
	CreatorActivity,
	DeepLink,
	DraftPreview,
	Updates,
}

impl UpdateContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			UpdateContext::Activity => "activity",
			UpdateContext::ActivitySample => "activity_sample",
			UpdateContext::CreatorActivity => "creator_activity",
			UpdateContext::DeepLink => "deep_link",
			UpdateContext::DraftPreview => "draft_preview",
			UpdateContext::Updates => "updates",
		}
	}
}

/// The root tab bar item that was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabBarItemLabel {
	Discovery,
	Activity,
	Search,
	Dashboard,
	Profile,
}

impl TabBarItemLabel {
	pub fn as_str(&self) -> &'static str {
		match self {
			TabBarItemLabel::Discovery => "discovery",
			TabBarItemLabel::Activity => "activity",
			TabBarItemLabel::Search => "search",
			TabBarItemLabel::Dashboard => "dashboard",
			TabBarItemLabel::Profile => "profile",
		}
	}
}

impl std::str::FromStr for TabBarItemLabel {
	type Err = AnalyticsError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"discovery" => Ok(TabBarItemLabel::Discovery),
			"activity" => Ok(TabBarItemLabel::Activity),
			"search" => Ok(TabBarItemLabel::Search),
			"dashboard" => Ok(TabBarItemLabel::Dashboard),
			"profile" => Ok(TabBarItemLabel::Profile),
			_ => Err(AnalyticsError::UnknownLabel(s.to_string())),
		}
	}
}

/// The messages mailbox being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mailbox {
	Inbox,
	Sent,
}

impl Mailbox {
	pub fn as_str(&self) -> &'static str {
		match self {
			Mailbox::Inbox => "inbox",
			Mailbox::Sent => "sent",
		}
	}
}

/// The intent that brought the user to the login/signup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginIntent {
	Activity,
	BackProject,
	DiscoveryOnboarding,
	Generic,
	LoginTab,
	MessageCreator,
	StarProject,
}

impl LoginIntent {
	pub fn as_str(&self) -> &'static str {
		match self {
			LoginIntent::Activity => "activity",
			LoginIntent::BackProject => "back_project",
			LoginIntent::DiscoveryOnboarding => "discovery_onboarding",
			LoginIntent::Generic => "generic",
			LoginIntent::LoginTab => "login_tab",
			LoginIntent::MessageCreator => "message_creator",
			LoginIntent::StarProject => "star_project",
		}
	}
}

/// The profile tab being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileProjectsType {
	Backed,
	Saved,
}

impl ProfileProjectsType {
	pub fn as_str(&self) -> &'static str {
		match self {
			ProfileProjectsType::Backed => "backed",
			ProfileProjectsType::Saved => "saved",
		}
	}
}

/// An editorial newsletter the user can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newsletter {
	Alumni,
	Arts,
	Films,
	Games,
	Happening,
	Invent,
	Music,
	Promo,
	Publishing,
	Weekly,
}

impl Newsletter {
	pub fn as_str(&self) -> &'static str {
		match self {
			Newsletter::Alumni => "alumni",
			Newsletter::Arts => "arts",
			Newsletter::Films => "films",
			Newsletter::Games => "games",
			Newsletter::Happening => "happening",
			Newsletter::Invent => "invent",
			Newsletter::Music => "music",
			Newsletter::Promo => "promo",
			Newsletter::Publishing => "publishing",
			Newsletter::Weekly => "weekly",
		}
	}
}

/// Where an update-draft attachment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentSource {
	Camera,
	CameraRoll,
}

impl AttachmentSource {
	pub fn as_str(&self) -> &'static str {
		match self {
			AttachmentSource::Camera => "camera",
			AttachmentSource::CameraRoll => "camera_roll",
		}
	}
}

/// The empty-state screen whose button was tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
	Activity,
	Recommendations,
	SocialDisabled,
	SocialNoPledges,
	Starred,
}

impl EmptyState {
	pub fn as_str(&self) -> &'static str {
		match self {
			EmptyState::Activity => "activity",
			EmptyState::Recommendations => "recommendations",
			EmptyState::SocialDisabled => "social_disabled",
			EmptyState::SocialNoPledges => "social_no_pledges",
			EmptyState::Starred => "starred",
		}
	}
}

/// The surface from which the help menu was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpContext {
	LoginTout,
	Settings,
	Signup,
}

impl HelpContext {
	pub fn as_str(&self) -> &'static str {
		match self {
			HelpContext::LoginTout => "login_tout",
			HelpContext::Settings => "settings",
			HelpContext::Signup => "signup",
		}
	}
}

/// The help document or action the user selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpType {
	Contact,
	Cookie,
	Faq,
	HowItWorks,
	Privacy,
	Terms,
}

impl HelpType {
	pub fn as_str(&self) -> &'static str {
		match self {
			HelpType::Contact => "contact",
			HelpType::Cookie => "cookie",
			HelpType::Faq => "faq",
			HelpType::HowItWorks => "how_it_works",
			HelpType::Privacy => "privacy",
			HelpType::Terms => "terms",
		}
	}
}

/// The surface from which the find-friends flow was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendsSource {
	Activity,
	Discovery,
	FindFriends,
	Settings,
}

impl FriendsSource {
	pub fn as_str(&self) -> &'static str {
		match self {
			FriendsSource::Activity => "activity",
			FriendsSource::Discovery => "discovery",
			FriendsSource::FindFriends => "find-friends",
			FriendsSource::Settings => "settings",
		}
	}
}

/// A home-screen quick action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutItem {
	CreatorDashboard,
	ProjectOfTheDay,
	ProjectsILaunched,
	RecommendedForYou,
	Search,
}

impl ShortcutItem {
	pub fn as_str(&self) -> &'static str {
		match self {
			ShortcutItem::CreatorDashboard => "creator_dashboard",
			ShortcutItem::ProjectOfTheDay => "project_of_the_day",
			ShortcutItem::ProjectsILaunched => "projects_i_launched",
			ShortcutItem::RecommendedForYou => "recommended_for_you",
			ShortcutItem::Search => "search",
		}
	}
}

/// The share activity the platform share dialog resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareActivityType {
	Facebook,
	Message,
	Mail,
	CopyToPasteboard,
	Twitter,
	Notes,
	Safari,
	/// A platform activity outside the known set, carried by its raw id.
	Other(String),
}

impl ShareActivityType {
	/// The platform activity identifier.
	pub fn raw(&self) -> &str {
		match self {
			ShareActivityType::Facebook => "com.apple.UIKit.activity.PostToFacebook",
			ShareActivityType::Message => "com.apple.UIKit.activity.Message",
			ShareActivityType::Mail => "com.apple.UIKit.activity.Mail",
			ShareActivityType::CopyToPasteboard => "com.apple.UIKit.activity.CopyToPasteboard",
			ShareActivityType::Twitter => "com.apple.UIKit.activity.PostToTwitter",
			ShareActivityType::Notes => "com.apple.mobilenotes.SharingExtension",
			ShareActivityType::Safari => "com.apple.UIKit.activity.OpenInSafari",
			ShareActivityType::Other(raw) => raw,
		}
	}

	/// The short label reported as `share_type`.
	pub fn share_type(&self) -> &str {
		match self {
			ShareActivityType::Facebook => "facebook",
			ShareActivityType::Message => "message",
			ShareActivityType::Mail => "email",
			ShareActivityType::CopyToPasteboard => "copy link",
			ShareActivityType::Twitter => "twitter",
			ShareActivityType::Notes => "notes",
			ShareActivityType::Safari => "safari",
			ShareActivityType::Other(raw) => raw,
		}
	}
}

/// The create-password flow events, named directly by their event strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePasswordEvent {
	PasswordCreated,
	Viewed,
}

impl CreatePasswordEvent {
	pub fn as_str(&self) -> &'static str {
		match self {
			CreatePasswordEvent::PasswordCreated => "Created Password",
			CreatePasswordEvent::Viewed => "Viewed Create Password",
		}
	}
}

/// A user-selectable display currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
	Aud,
	Cad,
	Chf,
	Dkk,
	Eur,
	Gbp,
	Hkd,
	Jpy,
	Mxn,
	Nok,
	Nzd,
	Sek,
	Sgd,
	Usd,
}

impl Currency {
	/// ISO 4217 code.
	pub fn code(&self) -> &'static str {
		match self {
			Currency::Aud => "AUD",
			Currency::Cad => "CAD",
			Currency::Chf => "CHF",
			Currency::Dkk => "DKK",
			Currency::Eur => "EUR",
			Currency::Gbp => "GBP",
			Currency::Hkd => "HKD",
			Currency::Jpy => "JPY",
			Currency::Mxn => "MXN",
			Currency::Nok => "NOK",
			Currency::Nzd => "NZD",
			Currency::Sek => "SEK",
			Currency::Sgd => "SGD",
			Currency::Usd => "USD",
		}
	}

	/// Human-readable label reported with currency-selection events.
	pub fn description_text(&self) -> &'static str {
		match self {
			Currency::Aud => "Australian Dollar (AUD)",
			Currency::Cad => "Canadian Dollar (CAD)",
			Currency::Chf => "Swiss Franc (CHF)",
			Currency::Dkk => "Danish Krone (DKK)",
			Currency::Eur => "Euro (EUR)",
			Currency::Gbp => "Pound Sterling (GBP)",
			Currency::Hkd => "Hong Kong Dollar (HKD)",
			Currency::Jpy => "Japanese Yen (JPY)",
			Currency::Mxn => "Mexican Peso (MXN)",
			Currency::Nok => "Norwegian Krone (NOK)",
			Currency::Nzd => "New Zealand Dollar (NZD)",
			Currency::Sek => "Swedish Krona (SEK)",
			Currency::Sgd => "Singapore Dollar (SGD)",
			Currency::Usd => "US Dollar (USD)",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn auth_type_labels() {
		assert_eq!(AuthType::Email.as_str(), "Email");
		assert_eq!(AuthType::Facebook.as_str(), "Facebook");
	}

	#[test]
	fn auth_type_parse_round_trip() {
		for auth in [AuthType::Email, AuthType::Facebook] {
			assert_eq!(AuthType::from_str(auth.as_str()).unwrap(), auth);
		}
		assert!(AuthType::from_str("email").is_err());
	}

	#[test]
	fn tab_bar_parse_round_trip() {
		for tab in [
			TabBarItemLabel::Discovery,
			TabBarItemLabel::Activity,
			TabBarItemLabel::Search,
			TabBarItemLabel::Dashboard,
			TabBarItemLabel::Profile,
		] {
			assert_eq!(TabBarItemLabel::from_str(tab.as_str()).unwrap(), tab);
		}
	}

	#[test]
	fn checkout_labels_are_title_cased() {
		assert_eq!(CheckoutPageContext::PaymentsPage.as_str(), "Payments Page");
		assert_eq!(CheckoutContext::BackThisPage.as_str(), "Back this page");
	}

	#[test]
	fn reward_pledge_error_labels_are_screaming() {
		assert_eq!(RewardPledgeError::MaximumAmount.as_str(), "MAXIMUM_AMOUNT");
		assert_eq!(RewardPledgeError::MinimumAmount.as_str(), "MINIMUM_AMOUNT");
	}

	#[test]
	fn share_type_maps_known_activities() {
		assert_eq!(ShareActivityType::Mail.share_type(), "email");
		assert_eq!(ShareActivityType::CopyToPasteboard.share_type(), "copy link");

		let other = ShareActivityType::Other("com.example.share".to_string());
		assert_eq!(other.share_type(), "com.example.share");
		assert_eq!(other.raw(), "com.example.share");
	}

	#[test]
	fn currency_description_contains_code() {
		for currency in [Currency::Aud, Currency::Eur, Currency::Usd, Currency::Jpy] {
			assert!(currency.description_text().contains(currency.code()));
		}
	}
}
