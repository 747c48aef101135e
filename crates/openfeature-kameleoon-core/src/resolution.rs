// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolution results returned to the OpenFeature evaluation API.

use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// Kind of a failed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
	/// The subject identity is absent or empty.
	TargetingKeyMissing,
	/// The backend rejected data derived from the context.
	InvalidContext,
	/// The flag, its variation, or the selected variable could not be located.
	FlagNotFound,
	/// The resolved value's type differs from the requested type.
	TypeMismatch,
	/// The provider could not be constructed or initialized.
	ProviderNotReady,
	General,
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let code = match self {
			ErrorCode::TargetingKeyMissing => "TARGETING_KEY_MISSING",
			ErrorCode::InvalidContext => "INVALID_CONTEXT",
			ErrorCode::FlagNotFound => "FLAG_NOT_FOUND",
			ErrorCode::TypeMismatch => "TYPE_MISMATCH",
			ErrorCode::ProviderNotReady => "PROVIDER_NOT_READY",
			ErrorCode::General => "GENERAL",
		};
		f.write_str(code)
	}
}

/// A structured resolution error: a kind plus a human-readable message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ResolutionError {
	pub code: ErrorCode,
	pub message: String,
}

impl ResolutionError {
	pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			code,
			message: message.into(),
		}
	}

	pub fn targeting_key_missing(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::TargetingKeyMissing, message)
	}

	pub fn invalid_context(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::InvalidContext, message)
	}

	pub fn flag_not_found(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::FlagNotFound, message)
	}

	pub fn type_mismatch(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::TypeMismatch, message)
	}

	pub fn provider_not_ready(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::ProviderNotReady, message)
	}

	pub fn general(message: impl Into<String>) -> Self {
		Self::new(ErrorCode::General, message)
	}
}

/// Outcome of a single flag evaluation.
///
/// When `error` is set, `value` is the caller's default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionDetail<T> {
	pub value: T,
	pub error: Option<ResolutionError>,
	/// Variation name; empty when resolution failed before a variation was known.
	pub variant: String,
}

/// Untyped outcome produced by the resolver.
pub type Resolution = ResolutionDetail<Value>;

impl<T> ResolutionDetail<T> {
	pub fn success(value: T, variant: impl Into<String>) -> Self {
		Self {
			value,
			error: None,
			variant: variant.into(),
		}
	}

	pub fn failure(default_value: T, error: ResolutionError, variant: impl Into<String>) -> Self {
		Self {
			value: default_value,
			error: Some(error),
			variant: variant.into(),
		}
	}

	pub fn is_error(&self) -> bool {
		self.error.is_some()
	}

	pub fn error_code(&self) -> Option<ErrorCode> {
		self.error.as_ref().map(|e| e.code)
	}

	/// Converts the value, keeping the error and variant.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResolutionDetail<U> {
		ResolutionDetail {
			value: f(self.value),
			error: self.error,
			variant: self.variant,
		}
	}
}
