// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors reported by the Kameleoon backend client.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KameleoonError {
	#[error("site code is empty: {0}")]
	SiteCodeIsEmpty(String),

	#[error("visitor code is invalid: {0}")]
	VisitorCodeInvalid(String),

	#[error("feature not found: {0}")]
	FeatureNotFound(String),

	#[error("feature variation not found: {0}")]
	FeatureVariationNotFound(String),

	#[error("feature environment disabled: {0}")]
	FeatureEnvironmentDisabled(String),

	#[error("visitor not targeted: {0}")]
	VisitorNotTargeted(String),

	#[error("client not initialized: {0}")]
	NotInitialized(String),

	#[error("timed out: {0}")]
	Timeout(String),

	#[error("{0}")]
	Other(String),
}

pub type Result<T> = std::result::Result<T, KameleoonError>;
