//! Error types for the fallible edges of itemkit-core.
//!
//! Normalisation, field lookup and truncation never fail; only parsing
//! caller-supplied names can.

use thiserror::Error;

/// A property name that is not one of `name`, `value`, `label`, `group`,
/// `options`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field property {0:?} (expected name, value, label, group or options)")]
pub struct PropertyParseError(pub String);
