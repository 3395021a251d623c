// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The process-wide preferred-content-size cache.
//!
//! The user's dynamic-type size is the one piece of session context that is
//! cached rather than recomputed per event: it changes rarely, and only
//! through a system notification. [`ContentSizeObserver`] owns the cached
//! cell, subscribes on construction, and unsubscribes on drop; the host
//! bridges its platform notification into a [`ContentSizeSource`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use patron_analytics_core::ContentSizeCategory;

/// Callback invoked with each new preferred content size.
pub type ContentSizeCallback = Box<dyn Fn(ContentSizeCategory) + Send + Sync>;

/// Opaque handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

/// A source of preferred-content-size change notifications.
pub trait ContentSizeSource: Send + Sync {
	/// The current value, when the platform can answer synchronously.
	fn current(&self) -> Option<ContentSizeCategory>;
	/// Registers a callback for future changes.
	fn subscribe(&self, callback: ContentSizeCallback) -> SubscriptionToken;
	/// Deregisters a previously returned token. Unknown tokens are ignored.
	fn unsubscribe(&self, token: SubscriptionToken);
}

/// A source with a fixed value and no change notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedContentSize(pub Option<ContentSizeCategory>);

impl ContentSizeSource for FixedContentSize {
	fn current(&self) -> Option<ContentSizeCategory> {
		self.0
	}

	fn subscribe(&self, _callback: ContentSizeCallback) -> SubscriptionToken {
		SubscriptionToken(0)
	}

	fn unsubscribe(&self, _token: SubscriptionToken) {}
}

/// A fan-out source the host drives from its platform notification.
///
/// Call [`ContentSizeNotifier::notify`] from the platform's change handler;
/// every live subscriber receives the new value.
#[derive(Default)]
pub struct ContentSizeNotifier {
	inner: Mutex<NotifierState>,
}

#[derive(Default)]
struct NotifierState {
	current: Option<ContentSizeCategory>,
	next_token: u64,
	subscribers: HashMap<u64, ContentSizeCallback>,
}

impl ContentSizeNotifier {
	pub fn new(initial: Option<ContentSizeCategory>) -> Self {
		Self {
			inner: Mutex::new(NotifierState {
				current: initial,
				next_token: 0,
				subscribers: HashMap::new(),
			}),
		}
	}

	/// Publishes a new value to every subscriber.
	pub fn notify(&self, category: ContentSizeCategory) {
		let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
		state.current = Some(category);
		// Callbacks run under the lock; subscribers must not re-enter the
		// notifier from inside a callback.
		for callback in state.subscribers.values() {
			callback(category);
		}
	}

	/// The number of live subscriptions.
	pub fn subscriber_count(&self) -> usize {
		self
			.inner
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.subscribers
			.len()
	}
}

impl ContentSizeSource for ContentSizeNotifier {
	fn current(&self) -> Option<ContentSizeCategory> {
		self.inner.lock().unwrap_or_else(PoisonError::into_inner).current
	}

	fn subscribe(&self, callback: ContentSizeCallback) -> SubscriptionToken {
		let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
		let token = state.next_token;
		state.next_token += 1;
		state.subscribers.insert(token, callback);
		SubscriptionToken(token)
	}

	fn unsubscribe(&self, token: SubscriptionToken) {
		self
			.inner
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.subscribers
			.remove(&token.0);
	}
}

/// Owns the cached preferred-content-size cell.
///
/// Construction seeds the cell from the source and subscribes for changes;
/// dropping the observer unsubscribes deterministically. Reads and
/// notification writes may happen on different threads, so the cell is
/// lock-guarded.
pub struct ContentSizeObserver {
	source: Arc<dyn ContentSizeSource>,
	token: SubscriptionToken,
	cell: Arc<RwLock<Option<ContentSizeCategory>>>,
}

impl ContentSizeObserver {
	pub fn new(source: Arc<dyn ContentSizeSource>) -> Self {
		let cell = Arc::new(RwLock::new(source.current()));
		let sink = Arc::clone(&cell);
		let token = source.subscribe(Box::new(move |category| {
			*sink.write().unwrap_or_else(PoisonError::into_inner) = Some(category);
		}));

		Self {
			source,
			token,
			cell,
		}
	}

	/// The most recently observed value, if any.
	pub fn current(&self) -> Option<ContentSizeCategory> {
		*self.cell.read().unwrap_or_else(PoisonError::into_inner)
	}
}

impl Drop for ContentSizeObserver {
	fn drop(&mut self) {
		self.source.unsubscribe(self.token);
	}
}

impl std::fmt::Debug for ContentSizeObserver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContentSizeObserver")
			.field("current", &self.current())
			.finish()
	}
}
