// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Descriptive metadata reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
	pub name: String,
}

impl Metadata {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// Readiness of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
	NotReady,
	Ready,
}
