// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Domain snapshots supplied by the host app at tracking time.

pub mod config;
pub mod device;
pub mod discovery;
pub mod project;
pub mod reward;
pub mod share;
pub mod update;
pub mod user;

pub use config::RemoteConfig;
pub use device::{Connectivity, ContentSizeCategory, DeviceIdiom, Orientation};
pub use discovery::{DiscoveryParams, Sort};
pub use project::{
	Backing, Category, Country, Location, Project, ProjectDates, ProjectId,
	ProjectPersonalization, ProjectState, ProjectStats,
};
pub use reward::{Reward, Shipping, ShippingPreference};
pub use share::{ShareContext, UserActivity};
pub use update::{Comment, Update};
pub use user::{User, UserId, UserStats};
