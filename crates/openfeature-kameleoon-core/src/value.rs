// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dynamically typed values carried by evaluation contexts and flag variables.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A mapping of named fields, used for structured context entries and object flags.
pub type Record = BTreeMap<String, Value>;

/// A flag or context value.
///
/// Integers and floating-point numbers are distinct kinds: a variable holding
/// `10` does not satisfy a request whose default is `11.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	List(Vec<Value>),
	Struct(Record),
}

/// The runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	Bool,
	Int,
	Float,
	String,
	List,
	Struct,
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ValueKind::Bool => "bool",
			ValueKind::Int => "int",
			ValueKind::Float => "float",
			ValueKind::String => "string",
			ValueKind::List => "list",
			ValueKind::Struct => "struct",
		};
		f.write_str(name)
	}
}

impl Value {
	/// Returns the runtime type tag of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Bool(_) => ValueKind::Bool,
			Value::Int(_) => ValueKind::Int,
			Value::Float(_) => ValueKind::Float,
			Value::String(_) => ValueKind::String,
			Value::List(_) => ValueKind::List,
			Value::Struct(_) => ValueKind::Struct,
		}
	}

	/// Returns true if both values have the same runtime type.
	pub fn same_kind(&self, other: &Value) -> bool {
		self.kind() == other.kind()
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Int(i) => Some(*i),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Float(f) => Some(*f),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}

	pub fn as_struct(&self) -> Option<&Record> {
		match self {
			Value::Struct(record) => Some(record),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(values: Vec<T>) -> Self {
		Value::List(values.into_iter().map(Into::into).collect())
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Value::Struct(record)
	}
}

/// A Rust type that a flag can be evaluated as.
///
/// Typed evaluation entry points convert the caller's default into a [`Value`],
/// run the untyped resolver, and convert the outcome back.
pub trait FlagValue: Sized {
	fn into_value(self) -> Value;

	fn from_value(value: Value) -> Option<Self>;
}

impl FlagValue for bool {
	fn into_value(self) -> Value {
		Value::Bool(self)
	}

	fn from_value(value: Value) -> Option<Self> {
		value.as_bool()
	}
}

impl FlagValue for i64 {
	fn into_value(self) -> Value {
		Value::Int(self)
	}

	fn from_value(value: Value) -> Option<Self> {
		value.as_i64()
	}
}

impl FlagValue for f64 {
	fn into_value(self) -> Value {
		Value::Float(self)
	}

	fn from_value(value: Value) -> Option<Self> {
		value.as_f64()
	}
}

impl FlagValue for String {
	fn into_value(self) -> Value {
		Value::String(self)
	}

	fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::String(s) => Some(s),
			_ => None,
		}
	}
}

impl FlagValue for Value {
	fn into_value(self) -> Value {
		self
	}

	fn from_value(value: Value) -> Option<Self> {
		Some(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn int_and_float_are_different_kinds() {
		assert!(!Value::Int(10).same_kind(&Value::Float(10.0)));
		assert!(Value::Int(10).same_kind(&Value::Int(-3)));
	}

	#[test]
	fn kind_display_is_lowercase() {
		assert_eq!(ValueKind::Struct.to_string(), "struct");
		assert_eq!(Value::from("x").kind().to_string(), "string");
	}

	#[test]
	fn vec_conversion_builds_list() {
		let value = Value::from(vec!["a", "b"]);
		assert_eq!(
			value.as_list(),
			Some(&[Value::from("a"), Value::from("b")][..])
		);
	}

	#[test]
	fn flag_value_rejects_other_kinds() {
		assert_eq!(bool::from_value(Value::Int(1)), None);
		assert_eq!(i64::from_value(Value::Float(1.0)), None);
		assert_eq!(f64::from_value(Value::Int(1)), None);
		assert_eq!(String::from_value(Value::Bool(true)), None);
		assert_eq!(
			String::from_value(Value::from("on")),
			Some("on".to_string())
		);
	}

	#[test]
	fn deserializes_numbers_by_representation() {
		let int: Value = serde_json::from_str("10").unwrap();
		let float: Value = serde_json::from_str("10.5").unwrap();
		assert_eq!(int, Value::Int(10));
		assert_eq!(float, Value::Float(10.5));
	}

	#[test]
	fn deserializes_nested_objects() {
		let value: Value =
			serde_json::from_str(r#"{"goalId": 7, "tags": ["a", "b"], "enabled": true}"#).unwrap();

		let record = value.as_struct().unwrap();
		assert_eq!(record["goalId"], Value::Int(7));
		assert_eq!(record["tags"], Value::from(vec!["a", "b"]));
		assert_eq!(record["enabled"], Value::Bool(true));
	}
}
