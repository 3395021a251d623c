// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the analytics core.

use thiserror::Error;

/// Errors surfaced by analytics construction and parsing.
///
/// The tracking path itself is infallible: missing optional inputs degrade to
/// empty or null-valued property contributions instead of failing.
#[derive(Debug, Error)]
pub enum AnalyticsError {
	/// A vocabulary label could not be parsed into its closed enum.
	#[error("unknown tracking label: {0}")]
	UnknownLabel(String),

	/// A tracker was built without a required host context.
	#[error("missing host context: {0}")]
	MissingHostContext(&'static str),
}

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_label_display() {
		let err = AnalyticsError::UnknownLabel("warp".to_string());
		assert_eq!(err.to_string(), "unknown tracking label: warp");
	}

	#[test]
	fn missing_host_context_display() {
		let err = AnalyticsError::MissingHostContext("device");
		assert_eq!(err.to_string(), "missing host context: device");
	}
}
