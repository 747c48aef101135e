// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation of OpenFeature context entries into Kameleoon visitor data.
//!
//! Two context keys carry typed data:
//!
//! | Key | Fields | Produces |
//! |-----|--------|----------|
//! | `conversion` | `goalId`, `revenue` | [`Conversion`] |
//! | `customData` | `index`, `values` | [`CustomData`] |
//!
//! Each key holds either a single record or a list of records. Any other key
//! is ignored, as is any value under a recognised key that is not shaped as a
//! record.

use openfeature_kameleoon_core::{
	Conversion, CustomData, EvaluationContext, KameleoonData, Record, Value,
};

/// Context key for conversion records.
pub const CONVERSION: &str = "conversion";
/// Context key for custom data records.
pub const CUSTOM_DATA: &str = "customData";
/// Conversion field holding the goal id.
pub const GOAL_ID: &str = "goalId";
/// Conversion field holding the revenue.
pub const REVENUE: &str = "revenue";
/// Custom data field holding the slot index.
pub const INDEX: &str = "index";
/// Custom data field holding the slot values.
pub const VALUES: &str = "values";

/// Shape of a single context value.
#[derive(Debug, PartialEq)]
enum ContextEntry<'a> {
	Scalar,
	Record(&'a Record),
	Records(Vec<&'a Record>),
}

impl<'a> ContextEntry<'a> {
	fn classify(value: &'a Value) -> Self {
		match value {
			Value::Struct(record) => ContextEntry::Record(record),
			Value::List(items) => items
				.iter()
				.map(Value::as_struct)
				.collect::<Option<Vec<_>>>()
				.map_or(ContextEntry::Scalar, ContextEntry::Records),
			_ => ContextEntry::Scalar,
		}
	}

	fn records(self) -> Vec<&'a Record> {
		match self {
			ContextEntry::Scalar => Vec::new(),
			ContextEntry::Record(record) => vec![record],
			ContextEntry::Records(records) => records,
		}
	}
}

/// Typed data recognised in a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataTag {
	Conversion,
	CustomData,
}

impl DataTag {
	fn from_key(key: &str) -> Option<Self> {
		match key {
			CONVERSION => Some(DataTag::Conversion),
			CUSTOM_DATA => Some(DataTag::CustomData),
			_ => None,
		}
	}

	fn build(self, record: &Record) -> KameleoonData {
		match self {
			DataTag::Conversion => make_conversion(record).into(),
			DataTag::CustomData => make_custom_data(record).into(),
		}
	}
}

/// Converts the typed data entries of `context` into Kameleoon visitor data.
///
/// Records are emitted in context key order, and in list order within a key.
pub fn to_kameleoon(context: &EvaluationContext) -> Vec<KameleoonData> {
	context
		.iter()
		.filter_map(|(key, value)| DataTag::from_key(key).map(|tag| (tag, value)))
		.flat_map(|(tag, value)| {
			ContextEntry::classify(value)
				.records()
				.into_iter()
				.map(move |record| tag.build(record))
		})
		.collect()
}

fn make_conversion(record: &Record) -> Conversion {
	let goal_id = record.get(GOAL_ID).and_then(Value::as_i64).unwrap_or_default();
	let revenue = match record.get(REVENUE) {
		Some(Value::Float(revenue)) => *revenue,
		Some(Value::Int(revenue)) => *revenue as f64,
		_ => 0.0,
	};
	// Conversions from context are never flagged as unique.
	Conversion::with_revenue(goal_id, revenue, false)
}

fn make_custom_data(record: &Record) -> CustomData {
	let index = record.get(INDEX).and_then(Value::as_i64).unwrap_or_default();
	let values = match record.get(VALUES) {
		Some(Value::String(value)) => vec![value.clone()],
		Some(Value::List(items)) => items
			.iter()
			.map(|item| item.as_str().map(str::to_string))
			.collect::<Option<Vec<_>>>()
			.unwrap_or_default(),
		_ => Vec::new(),
	};
	CustomData::new(index, values)
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	fn conversion_ctx(goal_id: i64, revenue: Value) -> EvaluationContext {
		let mut record = Record::new();
		record.insert(GOAL_ID.to_string(), Value::Int(goal_id));
		record.insert(REVENUE.to_string(), revenue);
		EvaluationContext::new().with_value(CONVERSION, Value::Struct(record))
	}

	proptest! {
		#[test]
		fn integer_revenue_matches_float_revenue(goal_id: i64, revenue in -1_000_000i64..1_000_000) {
			let from_int = to_kameleoon(&conversion_ctx(goal_id, Value::Int(revenue)));
			let from_float = to_kameleoon(&conversion_ctx(goal_id, Value::Float(revenue as f64)));
			prop_assert_eq!(from_int, from_float);
		}

		#[test]
		fn scalar_only_contexts_yield_nothing(
			entries in prop::collection::btree_map("[a-z]{1,12}", any::<i64>(), 0..16),
		) {
			let ctx: EvaluationContext = entries.into_iter().collect();
			prop_assert!(to_kameleoon(&ctx).is_empty());
		}

		#[test]
		fn one_record_per_list_element(goal_ids in prop::collection::vec(any::<i64>(), 0..20)) {
			let records: Vec<Value> = goal_ids
				.iter()
				.map(|id| {
					let mut record = Record::new();
					record.insert(GOAL_ID.to_string(), Value::Int(*id));
					Value::Struct(record)
				})
				.collect();
			let ctx = EvaluationContext::new().with_value(CONVERSION, Value::List(records));

			let expected: Vec<KameleoonData> =
				goal_ids.iter().map(|id| Conversion::new(*id).into()).collect();
			prop_assert_eq!(to_kameleoon(&ctx), expected);
		}
	}
}
