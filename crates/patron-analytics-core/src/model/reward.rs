// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reward snapshot types consumed by the reward context provider.

use serde::{Deserialize, Serialize};

/// A reward tier on a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
	pub id: i64,
	/// Minimum pledge amount in the project's currency.
	pub minimum: f64,
	/// Remaining quantity cap; `None` means uncapped.
	pub limit: Option<u32>,
	pub shipping: Shipping,
	pub items_count: u32,
}

impl Reward {
	/// Sentinel id of the "pledge without a reward" tier.
	pub const NO_REWARD_ID: i64 = 0;

	/// The "no reward" pledge option.
	pub fn no_reward() -> Self {
		Self {
			id: Self::NO_REWARD_ID,
			minimum: 1.0,
			limit: None,
			shipping: Shipping {
				enabled: false,
				preference: None,
			},
			items_count: 0,
		}
	}

	/// Returns true for the "no reward" sentinel, which contributes an empty
	/// bag instead of reward properties.
	pub fn is_no_reward(&self) -> bool {
		self.id == Self::NO_REWARD_ID
	}
}

/// Shipping configuration for a reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipping {
	pub enabled: bool,
	pub preference: Option<ShippingPreference>,
}

/// Where a reward can ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingPreference {
	None,
	Restricted,
	Unrestricted,
}

impl ShippingPreference {
	pub fn as_str(&self) -> &'static str {
		match self {
			ShippingPreference::None => "none",
			ShippingPreference::Restricted => "restricted",
			ShippingPreference::Unrestricted => "unrestricted",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_reward_sentinel() {
		assert!(Reward::no_reward().is_no_reward());

		let reward = Reward {
			id: 99,
			minimum: 25.0,
			limit: Some(100),
			shipping: Shipping {
				enabled: true,
				preference: Some(ShippingPreference::Restricted),
			},
			items_count: 2,
		};
		assert!(!reward.is_no_reward());
	}

	#[test]
	fn shipping_preference_labels() {
		assert_eq!(ShippingPreference::None.as_str(), "none");
		assert_eq!(ShippingPreference::Restricted.as_str(), "restricted");
		assert_eq!(ShippingPreference::Unrestricted.as_str(), "unrestricted");
	}
}
