// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tracking sinks: the downstream backends events are dispatched to.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use patron_analytics_core::{Event, Properties};

/// A downstream tracking backend.
///
/// Sinks are fire-and-forget: the tracker never waits on, retries, or
/// inspects delivery. Transport, batching, and persistence are entirely the
/// sink implementation's concern.
pub trait TrackingSink: Send + Sync {
	/// Records one event. Must not block the caller.
	fn track(&self, event: &str, properties: &Properties);
}

/// Type alias for a shared sink.
pub type SharedSink = Arc<dyn TrackingSink>;

/// A sink that discards every event.
///
/// The default for any sink slot left unconfigured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl TrackingSink for NoOpSink {
	fn track(&self, _event: &str, _properties: &Properties) {}
}

/// A sink that emits each event to the `tracing` subscriber at debug level.
///
/// Useful during bring-up to watch the event stream without a backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TrackingSink for LogSink {
	fn track(&self, event: &str, properties: &Properties) {
		debug!(
			event = %event,
			properties = %serde_json::Value::from(properties.clone()),
			"analytics event"
		);
	}
}

/// A sink that records events in memory, for assertions in host test suites.
#[derive(Debug, Default)]
pub struct CaptureSink {
	events: Mutex<Vec<Event>>,
}

impl CaptureSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// All events recorded so far, in dispatch order.
	pub fn events(&self) -> Vec<Event> {
		self
			.events
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// The recorded event names, in dispatch order.
	pub fn event_names(&self) -> Vec<String> {
		self.events().into_iter().map(|event| event.name).collect()
	}

	/// The number of events recorded.
	pub fn len(&self) -> usize {
		self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Drops all recorded events.
	pub fn clear(&self) {
		self
			.events
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clear();
	}
}

impl TrackingSink for CaptureSink {
	fn track(&self, event: &str, properties: &Properties) {
		self
			.events
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(Event::new(event, properties.clone()));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn capture_sink_records_in_order() {
		let sink = CaptureSink::new();
		sink.track("First", &Properties::new());
		sink.track("Second", &Properties::new().insert("n", 2));

		assert_eq!(sink.len(), 2);
		assert_eq!(sink.event_names(), vec!["First", "Second"]);

		let events = sink.events();
		assert_eq!(events[1].properties.get("n"), Some(&serde_json::json!(2)));
	}

	#[test]
	fn capture_sink_clear() {
		let sink = CaptureSink::new();
		sink.track("First", &Properties::new());
		sink.clear();
		assert!(sink.is_empty());
	}

	#[test]
	fn noop_sink_discards() {
		// Just exercises the impl; nothing observable.
		NoOpSink.track("Anything", &Properties::new());
	}
}
