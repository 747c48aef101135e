// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OpenFeature provider for Kameleoon.
//!
//! This crate lets an OpenFeature-style evaluation API resolve flags through a
//! Kameleoon client. It translates context entries into Kameleoon visitor data,
//! looks up the visitor's variation and its variables, and maps the outcome
//! (including backend failures) into typed resolution details.
//!
//! # Features
//!
//! - **Context translation**: `conversion` and `customData` context entries are
//!   forwarded to Kameleoon as visitor data
//! - **Variable selection**: a `variableKey` context entry picks the variable;
//!   without one, the lexicographically smallest variable name is used
//! - **Type-safe evaluation**: boolean, string, integer, float and object flags
//! - **Injected client**: the provider only depends on the [`KameleoonClient`]
//!   capability, so any client implementation (or a test double) can be used
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use openfeature_kameleoon::{ClientConfig, EvaluationContext, KameleoonProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_file("kameleoon.toml")?.apply_env();
//!     config.validate()?;
//!
//!     let provider = KameleoonProvider::new("my-site-code", &config, Arc::new(MyFactory))?;
//!     provider.init(&EvaluationContext::new()).await?;
//!
//!     let context = EvaluationContext::new()
//!         .with_targeting_key("visitor-42")
//!         .with_value("variableKey", "banner_color");
//!
//!     let color = provider.string_evaluation("new_checkout", "blue", &context).await;
//!     if let Some(err) = color.error {
//!         eprintln!("using default: {err}");
//!     }
//!
//!     provider.shutdown();
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod provider;
pub mod resolver;
pub mod translator;

pub use client::{ClientFactory, KameleoonClient, ManagedClient, SharedClient, Variables};
pub use config::ClientConfig;
pub use error::ConfigError;
pub use provider::{KameleoonProvider, PROVIDER_NAME};
pub use resolver::{KameleoonResolver, Resolver, VARIABLE_KEY};
pub use translator::to_kameleoon;

// Re-export core types for convenience
pub use openfeature_kameleoon_core::{
	Conversion, CustomData, ErrorCode, EvaluationContext, FlagValue, KameleoonData, KameleoonError,
	Metadata, ProviderState, Record, Resolution, ResolutionDetail, ResolutionError, Value,
	ValueKind, TARGETING_KEY,
};
