//! Error taxonomy for the orbit core

use thiserror::Error;

/// Errors reported by field construction and per-body event routing.
///
/// A configuration error is fatal to the construction call that raised it
/// and never leaves a partially built field behind. An unknown-body error
/// is recoverable: the offending call is a no-op and the other bodies in
/// the field are untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrbitError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("no body with id {0} in this field")]
    UnknownBody(u32),
}
