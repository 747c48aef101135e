// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flattened evaluation context.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::value::Value;

/// Context key holding the subject identity (the Kameleoon visitor code).
pub const TARGETING_KEY: &str = "targetingKey";

/// A flattened, one-level mapping from string keys to values.
///
/// Entries iterate in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationContext {
	fields: BTreeMap<String, Value>,
}

impl EvaluationContext {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the targeting key.
	pub fn with_targeting_key(self, key: impl Into<String>) -> Self {
		self.with_value(TARGETING_KEY, Value::String(key.into()))
	}

	/// Adds an entry to the context.
	pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(key, value);
		self
	}

	/// Inserts an entry, returning the previous value for the key if any.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.fields.insert(key.into(), value.into())
	}

	/// Returns the targeting key if it is present as a non-empty string.
	pub fn targeting_key(&self) -> Option<&str> {
		self.get_str(TARGETING_KEY)
	}

	/// Returns the value at `key` if it is a non-empty string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self
			.fields
			.get(key)
			.and_then(Value::as_str)
			.filter(|s| !s.is_empty())
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
		self.fields.iter()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl<'a> IntoIterator for &'a EvaluationContext {
	type Item = (&'a String, &'a Value);
	type IntoIter = btree_map::Iter<'a, String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EvaluationContext {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}
