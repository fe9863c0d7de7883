//! Common test helper functions shared across test modules.
use secrecy::SecretString;

use crate::forge::{
    config::RemoteConfig, manager::ForgeManager, traits::MockForge,
};

/// Creates a test RemoteConfig with sensible defaults.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        owner: "artsy".to_string(),
        repo: "reaction".to_string(),
        token: SecretString::from("test-token".to_string()),
        ..RemoteConfig::default()
    }
}

/// Wraps a mock forge in a ForgeManager that is not in dry-run mode.
pub fn create_test_forge_manager(mut mock_forge: MockForge) -> ForgeManager {
    mock_forge
        .expect_remote_config()
        .returning(create_test_remote_config);
    ForgeManager::new(Box::new(mock_forge))
}
