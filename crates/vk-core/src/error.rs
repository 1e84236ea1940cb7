//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `VkError` as one variant
//! via a `From` impl, so precondition failures propagate with `?`.

use thiserror::Error;

/// Precondition violations detected while validating geometry or parameters.
#[derive(Debug, Error, PartialEq)]
pub enum VkError {
    #[error("invalid domain {width} x {height}: extents must be finite and positive")]
    InvalidDomain { width: f64, height: f64 },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `vk-*` crates.
pub type VkResult<T> = Result<T, VkError>;
