// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Kameleoon OpenFeature provider.
//!
//! This crate provides the types shared between the provider and any backend
//! client implementation (`openfeature-kameleoon`):
//! - Dynamically typed [`Value`]s for context entries and flag variables
//! - The flattened [`EvaluationContext`]
//! - Visitor data records ([`KameleoonData`]) submitted to the backend
//! - Resolution results and the resolution error taxonomy
//! - Backend errors ([`KameleoonError`])
//!
//! # Example
//!
//! ```
//! use openfeature_kameleoon_core::{
//!     ErrorCode, EvaluationContext, ResolutionDetail, ResolutionError, Value,
//! };
//!
//! let ctx = EvaluationContext::new()
//!     .with_targeting_key("visitor-42")
//!     .with_value("variableKey", "banner_color");
//!
//! assert_eq!(ctx.targeting_key(), Some("visitor-42"));
//!
//! let detail = ResolutionDetail::failure(
//!     Value::Bool(false),
//!     ResolutionError::flag_not_found("feature not found: checkout"),
//!     "",
//! );
//! assert_eq!(detail.error_code(), Some(ErrorCode::FlagNotFound));
//! ```

pub mod context;
pub mod data;
pub mod error;
pub mod provider;
pub mod resolution;
pub mod value;

pub use context::{EvaluationContext, TARGETING_KEY};
pub use data::{Conversion, CustomData, KameleoonData};
pub use error::{KameleoonError, Result};
pub use provider::{Metadata, ProviderState};
pub use resolution::{ErrorCode, Resolution, ResolutionDetail, ResolutionError};
pub use value::{FlagValue, Record, Value, ValueKind};
