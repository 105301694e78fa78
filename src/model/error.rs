//! Error types for algoviz.
//!
//! The layout core knows exactly one failure: a caller handed it an argument
//! outside its contract. That is [`InvalidArgument`]. It is a programmer error,
//! rejected at the boundary and never clamped, since silent clamping would
//! hide layout bugs.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the CLI shell
//!   - [`InvalidArgument`] - Contract violation in the layout core or item model
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - [`ActionParseError`] - A CLI action token was malformed
//!   - `serde_json::Error` - JSON report serialization failed
//!
//! Overlapping items at maximum compression are **not** an error. The
//! compressor degrades visually and reports it through
//! [`LayoutPath::Saturated`](crate::view_state::compressor::LayoutPath::Saturated).

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::state::action::ActionParseError;
use thiserror::Error;

/// A value handed to the layout core or item model violates its contract.
///
/// Carries the argument name, the offending value (rendered as text so that
/// both numbers and strings fit), and the requirement that was broken.
///
/// # Examples
///
/// ```
/// use algoviz::model::error::InvalidArgument;
///
/// let err = InvalidArgument::new("budget", -1.0, "must be finite and > 0");
/// assert_eq!(err.argument(), "budget");
/// assert!(err.to_string().contains("budget"));
/// assert!(err.to_string().contains("-1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid argument `{argument}` = {value}: {requirement}")]
pub struct InvalidArgument {
    argument: &'static str,
    value: String,
    requirement: &'static str,
}

impl InvalidArgument {
    /// Create a new contract violation for `argument`.
    pub fn new(
        argument: &'static str,
        value: impl std::fmt::Display,
        requirement: &'static str,
    ) -> Self {
        Self {
            argument,
            value: value.to_string(),
            requirement,
        }
    }

    /// Name of the argument that was rejected.
    pub fn argument(&self) -> &'static str {
        self.argument
    }

    /// The rejected value, as displayed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The requirement the value failed.
    pub fn requirement(&self) -> &'static str {
        self.requirement
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn require_positive(argument: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidArgument::new(argument, value, "must be finite and > 0"))
    }
}

/// Top-level application error.
///
/// Every failure the CLI can hit converts into this type via `From`, so the
/// shell composes with `?` end to end.
#[derive(Debug, Error)]
pub enum AppError {
    /// A layout input or item value broke its contract.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// Configuration file could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// An action token on the command line could not be parsed.
    #[error("Invalid action: {0}")]
    Action(#[from] ActionParseError),

    /// JSON output could not be produced.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
