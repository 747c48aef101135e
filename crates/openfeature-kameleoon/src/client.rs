// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Capability interfaces over the Kameleoon backend client.
//!
//! The provider never talks to Kameleoon directly. It is handed an
//! implementation of these traits, which owns the connection, the
//! configuration cache and any background refresh.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use openfeature_kameleoon_core::{KameleoonData, Result, Value};

use crate::config::ClientConfig;

/// Variables of a single feature variation, keyed by variable name.
pub type Variables = HashMap<String, Value>;

/// The operations the flag resolver needs from a Kameleoon client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KameleoonClient: Send + Sync {
	/// Attaches visitor data to `visitor_code`.
	async fn add_data(&self, visitor_code: &str, data: Vec<KameleoonData>) -> Result<()>;

	/// Returns the variation of `feature_key` assigned to `visitor_code`.
	///
	/// On error no variation is known, and the resolver reports an empty variant.
	async fn get_feature_variation_key(&self, visitor_code: &str, feature_key: &str)
		-> Result<String>;

	/// Returns the variables of a variation.
	async fn get_feature_variation_variables(
		&self,
		feature_key: &str,
		variation_key: &str,
	) -> Result<Variables>;
}

/// A client whose lifecycle the provider manages.
#[async_trait]
pub trait ManagedClient: KameleoonClient {
	/// Completes once the client has fetched its configuration.
	async fn wait_init(&self) -> Result<()>;
}

pub type SharedClient = Arc<dyn ManagedClient>;

/// Creates and caches one client per site code.
pub trait ClientFactory: Send + Sync {
	fn create(&self, site_code: &str, config: &ClientConfig) -> Result<SharedClient>;

	/// Drops the cached client for `site_code`.
	fn forget(&self, site_code: &str);
}
