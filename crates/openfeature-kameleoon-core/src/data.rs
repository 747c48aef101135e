// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Visitor data records submitted to Kameleoon.

/// A record attached to a visitor before a flag is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum KameleoonData {
	Conversion(Conversion),
	CustomData(CustomData),
}

/// A goal conversion, optionally carrying revenue.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
	pub goal_id: i64,
	pub revenue: f64,
	/// Whether the conversion may only be counted once per visitor.
	pub unique: bool,
}

impl Conversion {
	pub fn new(goal_id: i64) -> Self {
		Self::with_revenue(goal_id, 0.0, false)
	}

	pub fn with_revenue(goal_id: i64, revenue: f64, unique: bool) -> Self {
		Self {
			goal_id,
			revenue,
			unique,
		}
	}
}

/// Values for a custom data slot configured in Kameleoon.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomData {
	pub index: i64,
	pub values: Vec<String>,
}

impl CustomData {
	pub fn new(index: i64, values: Vec<String>) -> Self {
		Self { index, values }
	}
}

impl From<Conversion> for KameleoonData {
	fn from(conversion: Conversion) -> Self {
		KameleoonData::Conversion(conversion)
	}
}

impl From<CustomData> for KameleoonData {
	fn from(custom_data: CustomData) -> Self {
		KameleoonData::CustomData(custom_data)
	}
}
