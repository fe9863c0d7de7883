//! Access to the repository and pull request behind a forge API.
//!
//! Rules only ever talk to a `ForgeManager`, which wraps any `Forge`
//! implementation and handles dry-run mode.

/// Connection settings for the forge.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Wrapper adding logging and dry-run handling around a forge.
pub mod manager;

/// The forge capability trait.
pub mod traits;

/// Request types passed to the forge.
pub mod types;
