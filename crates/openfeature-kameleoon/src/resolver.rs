// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Flag resolution against a Kameleoon client.

use std::sync::Arc;

use async_trait::async_trait;
use openfeature_kameleoon_core::{EvaluationContext, Resolution, ResolutionError, Value};
use tracing::{debug, warn};

use crate::client::{KameleoonClient, Variables};
use crate::translator;

/// Context key naming the variable to read from the assigned variation.
pub const VARIABLE_KEY: &str = "variableKey";

const TARGETING_KEY_MISSING_MESSAGE: &str =
	"The TargetingKey is required in context and cannot be omitted.";
const TYPE_MISMATCH_MESSAGE: &str =
	"The type of value received is different from the requested value.";

/// Resolves a flag to a value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Resolver: Send + Sync {
	/// Resolves `flag_key` for `context`.
	///
	/// Never fails outright: on error the returned value is `default_value`.
	async fn resolve(
		&self,
		flag_key: &str,
		default_value: Value,
		context: &EvaluationContext,
	) -> Resolution;
}

/// Resolver backed by a Kameleoon client.
pub struct KameleoonResolver<C: KameleoonClient + ?Sized> {
	client: Arc<C>,
}

impl<C: KameleoonClient + ?Sized> KameleoonResolver<C> {
	pub fn new(client: Arc<C>) -> Self {
		Self { client }
	}
}

#[async_trait]
impl<C: KameleoonClient + ?Sized> Resolver for KameleoonResolver<C> {
	async fn resolve(
		&self,
		flag_key: &str,
		default_value: Value,
		context: &EvaluationContext,
	) -> Resolution {
		let Some(visitor_code) = context.targeting_key() else {
			debug!(flag_key = flag_key, "Targeting key missing from context");
			return Resolution::failure(
				default_value,
				ResolutionError::targeting_key_missing(TARGETING_KEY_MISSING_MESSAGE),
				"",
			);
		};

		let data = translator::to_kameleoon(context);
		if let Err(e) = self.client.add_data(visitor_code, data).await {
			debug!(flag_key = flag_key, error = %e, "Kameleoon rejected visitor data");
			return Resolution::failure(
				default_value,
				ResolutionError::invalid_context(e.to_string()),
				"",
			);
		}

		let variant = match self
			.client
			.get_feature_variation_key(visitor_code, flag_key)
			.await
		{
			Ok(variant) => variant,
			Err(e) => {
				debug!(flag_key = flag_key, error = %e, "Variation lookup failed");
				return Resolution::failure(
					default_value,
					ResolutionError::flag_not_found(e.to_string()),
					"",
				);
			}
		};

		let variables = match self
			.client
			.get_feature_variation_variables(flag_key, &variant)
			.await
		{
			Ok(variables) => variables,
			Err(e) => {
				debug!(
					flag_key = flag_key,
					variant = %variant,
					error = %e,
					"Variable lookup failed"
				);
				return Resolution::failure(
					default_value,
					ResolutionError::flag_not_found(e.to_string()),
					variant,
				);
			}
		};

		let variable_key = select_variable_key(context, &variables);
		let Some(value) = variable_key.and_then(|key| variables.get(key)) else {
			let message = missing_variable_message(&variant, variable_key);
			debug!(flag_key = flag_key, variant = %variant, "{}", message);
			return Resolution::failure(
				default_value,
				ResolutionError::flag_not_found(message),
				variant,
			);
		};

		if !value.same_kind(&default_value) {
			warn!(
				flag_key = flag_key,
				variant = %variant,
				expected = %default_value.kind(),
				actual = %value.kind(),
				"Variable type differs from the requested type, using default"
			);
			return Resolution::failure(
				default_value,
				ResolutionError::type_mismatch(TYPE_MISMATCH_MESSAGE),
				variant,
			);
		}

		Resolution::success(value.clone(), variant)
	}
}

/// Picks the variable to read: the context's `variableKey` if set, otherwise
/// the lexicographically smallest variable name. An empty name selects nothing.
fn select_variable_key<'a>(
	context: &'a EvaluationContext,
	variables: &'a Variables,
) -> Option<&'a str> {
	context
		.get_str(VARIABLE_KEY)
		.or_else(|| variables.keys().min().map(String::as_str))
		.filter(|key| !key.is_empty())
}

fn missing_variable_message(variant: &str, variable_key: Option<&str>) -> String {
	match variable_key {
		None => format!("The variation '{variant}' has no variables"),
		Some(key) => {
			format!("The value for provided variable key '{key}' isn't found in variation '{variant}'")
		}
	}
}
