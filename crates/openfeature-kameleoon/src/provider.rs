// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The Kameleoon provider exposed to the OpenFeature evaluation API.

use std::sync::Arc;
use std::time::Duration;

use openfeature_kameleoon_core::{
	EvaluationContext, FlagValue, KameleoonError, Metadata, ProviderState, ResolutionDetail,
	ResolutionError, Value,
};
use tracing::{info, warn};

use crate::client::{ClientFactory, SharedClient};
use crate::config::ClientConfig;
use crate::resolver::{KameleoonResolver, Resolver};

/// Name reported in provider metadata.
pub const PROVIDER_NAME: &str = "Kameleoon Provider";

/// Evaluates OpenFeature flags through a Kameleoon client.
pub struct KameleoonProvider {
	site_code: String,
	client: SharedClient,
	resolver: Arc<dyn Resolver>,
	factory: Option<Arc<dyn ClientFactory>>,
	init_timeout: Duration,
}

impl KameleoonProvider {
	/// Creates a provider whose client is obtained from `factory`.
	///
	/// Fails with a `PROVIDER_NOT_READY` error if the site code is empty or the
	/// factory cannot create a client.
	pub fn new(
		site_code: impl Into<String>,
		config: &ClientConfig,
		factory: Arc<dyn ClientFactory>,
	) -> Result<Self, ResolutionError> {
		let site_code = site_code.into();
		if site_code.is_empty() {
			let err =
				KameleoonError::SiteCodeIsEmpty("no site code given to the provider".to_string());
			return Err(ResolutionError::provider_not_ready(err.to_string()));
		}

		let client = factory
			.create(&site_code, config)
			.map_err(|e| ResolutionError::provider_not_ready(e.to_string()))?;

		let mut provider = Self::with_client(site_code, client);
		provider.factory = Some(factory);
		provider.init_timeout = config.default_timeout;
		Ok(provider)
	}

	/// Creates a provider around an existing client.
	pub fn with_client(site_code: impl Into<String>, client: SharedClient) -> Self {
		let resolver = Arc::new(KameleoonResolver::new(client.clone()));
		Self {
			site_code: site_code.into(),
			client,
			resolver,
			factory: None,
			init_timeout: ClientConfig::default().default_timeout,
		}
	}

	/// Replaces the resolver used for evaluations.
	pub fn with_resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
		self.resolver = resolver;
		self
	}

	pub fn metadata(&self) -> Metadata {
		Metadata::new(PROVIDER_NAME)
	}

	pub fn site_code(&self) -> &str {
		&self.site_code
	}

	/// Returns the underlying Kameleoon client.
	pub fn client(&self) -> SharedClient {
		self.client.clone()
	}

	pub async fn bool_evaluation(
		&self,
		flag_key: &str,
		default_value: bool,
		context: &EvaluationContext,
	) -> ResolutionDetail<bool> {
		self.evaluate(flag_key, default_value, context).await
	}

	pub async fn string_evaluation(
		&self,
		flag_key: &str,
		default_value: impl Into<String>,
		context: &EvaluationContext,
	) -> ResolutionDetail<String> {
		self.evaluate(flag_key, default_value.into(), context).await
	}

	pub async fn float_evaluation(
		&self,
		flag_key: &str,
		default_value: f64,
		context: &EvaluationContext,
	) -> ResolutionDetail<f64> {
		self.evaluate(flag_key, default_value, context).await
	}

	pub async fn int_evaluation(
		&self,
		flag_key: &str,
		default_value: i64,
		context: &EvaluationContext,
	) -> ResolutionDetail<i64> {
		self.evaluate(flag_key, default_value, context).await
	}

	pub async fn object_evaluation(
		&self,
		flag_key: &str,
		default_value: Value,
		context: &EvaluationContext,
	) -> ResolutionDetail<Value> {
		self.evaluate(flag_key, default_value, context).await
	}

	async fn evaluate<T: FlagValue + Clone>(
		&self,
		flag_key: &str,
		default_value: T,
		context: &EvaluationContext,
	) -> ResolutionDetail<T> {
		let resolution = self
			.resolver
			.resolve(flag_key, default_value.clone().into_value(), context)
			.await;
		let kind = resolution.value.kind();

		match T::from_value(resolution.value) {
			Some(value) => ResolutionDetail {
				value,
				error: resolution.error,
				variant: resolution.variant,
			},
			None => {
				warn!(
					flag_key = flag_key,
					variant = %resolution.variant,
					actual = %kind,
					"Resolved value cannot be converted to the requested type, using default"
				);
				let error = resolution.error.unwrap_or_else(|| {
					ResolutionError::general(format!(
						"resolved value of type {kind} cannot be converted"
					))
				});
				ResolutionDetail::failure(default_value, error, resolution.variant)
			}
		}
	}

	/// Waits for the client to become ready, bounded by the configured timeout.
	pub async fn init(&self, _context: &EvaluationContext) -> Result<(), KameleoonError> {
		let result = tokio::time::timeout(self.init_timeout, self.client.wait_init())
			.await
			.map_err(|_| {
				KameleoonError::Timeout(format!(
					"client initialization exceeded {:?}",
					self.init_timeout
				))
			})
			.and_then(|r| r);

		match &result {
			Ok(()) => info!(site_code = %self.site_code, "Kameleoon provider initialized"),
			Err(e) => warn!(
				site_code = %self.site_code,
				error = %e,
				"Kameleoon provider failed to initialize"
			),
		}
		result
	}

	/// Reports whether the client is ready to serve evaluations.
	pub async fn status(&self) -> ProviderState {
		match self.init(&EvaluationContext::default()).await {
			Ok(()) => ProviderState::Ready,
			Err(_) => ProviderState::NotReady,
		}
	}

	/// Releases the client held for this site code.
	pub fn shutdown(&self) {
		if let Some(factory) = &self.factory {
			factory.forget(&self.site_code);
		}
		info!(site_code = %self.site_code, "Kameleoon provider shut down");
	}
}
