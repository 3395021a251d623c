// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The flat property bag attached to every tracked event.

use serde_json::{Map, Value};

/// A builder for one event's analytics payload.
///
/// Keys are flat strings, values are JSON scalars. An optional input that is
/// absent is recorded as an explicit `null` rather than omitted, so sinks can
/// distinguish "no value" from "key never emitted".
///
/// # Example
///
/// ```
/// use patron_analytics_core::Properties;
///
/// let props = Properties::new()
///     .insert("context", "project")
///     .insert("page_count", 3)
///     .insert_opt("search_term", None::<String>);
///
/// assert!(props.get("search_term").unwrap().is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
	inner: Map<String, Value>,
}

impl Properties {
	/// Creates a new empty bag.
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a key-value pair.
	///
	/// The value can be any type that converts into `serde_json::Value`,
	/// including strings, numbers and booleans.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Inserts a key whose value may be absent.
	///
	/// `None` is recorded as an explicit `Value::Null` so the key set of a
	/// provider stays stable regardless of input.
	pub fn insert_opt<K, V>(self, key: K, value: Option<V>) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		match value {
			Some(v) => self.insert(key, v),
			None => self.insert(key, Value::Null),
		}
	}

	/// Merges another bag into this one.
	///
	/// If both contain the same key, the value from `other` wins.
	pub fn merge(mut self, other: Properties) -> Self {
		for (k, v) in other.inner {
			self.inner.insert(k, v);
		}
		self
	}

	/// Returns a new bag with every key rewritten to `prefix + key`.
	///
	/// Values are preserved untouched.
	pub fn prefixed(self, prefix: &str) -> Self {
		let inner = self
			.inner
			.into_iter()
			.map(|(k, v)| (format!("{prefix}{k}"), v))
			.collect();
		Self { inner }
	}

	/// Returns true if the bag is empty.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the number of keys in the bag.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Gets a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Returns true if the bag contains `key`, even with a null value.
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Iterates over key-value pairs.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.inner.iter()
	}

	/// Converts the bag into a `serde_json::Value`.
	pub fn into_value(self) -> Value {
		Value::Object(self.inner)
	}
}

impl From<Properties> for Value {
	fn from(props: Properties) -> Self {
		props.into_value()
	}
}

impl From<Value> for Properties {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self { inner: map },
			_ => Self::new(),
		}
	}
}

impl From<Map<String, Value>> for Properties {
	fn from(map: Map<String, Value>) -> Self {
		Self { inner: map }
	}
}
