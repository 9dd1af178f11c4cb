//! Shared configuration types.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Graph-store connection settings loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GraphConfig {
    /// Neo4j connection URI (e.g. `bolt://localhost:7687`).
    #[validate(length(min = 1))]
    pub uri: String,

    /// Neo4j username.
    pub user: String,

    /// Neo4j password.
    #[validate(length(min = 1))]
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
        }
    }
}

impl GraphConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` first (non-fatal if `.env` is absent),
    /// then reads each variable from the process environment. `NEO4J_PASSWORD`
    /// is required and returns a [`crate::AtlasGraphError::Validation`] error
    /// when absent or empty.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let uri = std::env::var("NEO4J_URI")
            .unwrap_or_else(|_| "bolt://localhost:7687".to_string());

        let user = std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".to_string());

        let password = std::env::var("NEO4J_PASSWORD").map_err(|_| {
            crate::AtlasGraphError::Validation("NEO4J_PASSWORD is required".to_string())
        })?;

        let config = Self {
            uri,
            user,
            password,
        };

        config
            .validate()
            .map_err(|e| crate::AtlasGraphError::Validation(e.to_string()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    /// Serializes env-var-mutating tests, which would otherwise race on the
    /// shared process environment when run in parallel.
    static ENV_GUARD: Mutex<()> = Mutex::new(());

    /// Temporarily sets env vars for a test, restoring originals afterward.
    fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        // Save originals.
        let originals: Vec<(&str, Option<String>)> =
            vars.iter().map(|(k, _)| (*k, env::var(k).ok())).collect();

        // Set test values.
        for (k, v) in vars {
            env::set_var(k, v);
        }

        let result = f();

        // Restore originals.
        for (k, original) in &originals {
            match original {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }

        result
    }

    #[test]
    fn test_config_defaults() {
        with_env(&[("NEO4J_PASSWORD", "secret")], || {
            // Remove optional vars in case they're set in the process env.
            env::remove_var("NEO4J_URI");
            env::remove_var("NEO4J_USER");

            let config = GraphConfig::from_env().expect("config should load");
            assert_eq!(config.uri, "bolt://localhost:7687");
            assert_eq!(config.user, "neo4j");
            assert_eq!(config.password, "secret");
        });
    }

    #[test]
    fn test_config_custom_values() {
        with_env(
            &[
                ("NEO4J_URI", "bolt://db.example.com:7687"),
                ("NEO4J_USER", "admin"),
                ("NEO4J_PASSWORD", "mysecret"),
            ],
            || {
                let config = GraphConfig::from_env().expect("config should load");
                assert_eq!(config.uri, "bolt://db.example.com:7687");
                assert_eq!(config.user, "admin");
                assert_eq!(config.password, "mysecret");
            },
        );
    }

    #[test]
    fn test_config_missing_password() {
        let _guard = ENV_GUARD.lock().unwrap_or_else(|e| e.into_inner());

        let saved = env::var("NEO4J_PASSWORD").ok();
        env::remove_var("NEO4J_PASSWORD");

        let result = GraphConfig::from_env();

        if let Some(v) = saved {
            env::set_var("NEO4J_PASSWORD", v);
        }

        assert!(result.is_err());
        match result.unwrap_err() {
            crate::AtlasGraphError::Validation(msg) => {
                assert!(msg.contains("NEO4J_PASSWORD"));
            }
            e => panic!("expected Validation error, got {:?}", e),
        }
    }

    #[test]
    fn test_config_empty_password_rejected() {
        with_env(&[("NEO4J_PASSWORD", "")], || {
            let result = GraphConfig::from_env();
            assert!(result.is_err());
        });
    }
}
