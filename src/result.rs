//! Error handling and result types for pr-policy.
//!
//! All fallible functions return the `Result<T>` defined here so that
//! failures from the forge, the event payload or the configuration file
//! surface with `color-eyre` context and fail the CI step.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::result::Result;
//! use color_eyre::eyre::Context;
//!
//! fn read_event(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err("Failed to read event payload")?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout pr-policy.
///
/// This is a type alias for `color_eyre::eyre::Result<T>`. Use
/// `.wrap_err()` to add context as errors propagate.
pub type Result<T> = EyreResult<T>;
