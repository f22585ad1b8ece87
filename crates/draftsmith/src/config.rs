use std::{env, fmt};

use draftsmith_core::model::Model;

use crate::{error::RunError, profile::Profile};

pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const NOTION_TOKEN: &str = "NOTION_TOKEN";
pub const DATABASE_ID: &str = "DATABASE_ID";
pub const PROFILE: &str = "DRAFTSMITH_PROFILE";
pub const GROQ_BASE_URL: &str = "GROQ_BASE_URL";
pub const GROQ_MODEL: &str = "GROQ_MODEL";
pub const NOTION_BASE_URL: &str = "NOTION_BASE_URL";

/// Run configuration, built once at startup and passed by reference.
#[derive(Clone)]
pub struct Config {
    pub profile: Profile,
    pub generation: GenerationConfig,
    pub store: StoreConfig,
}

#[derive(Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: Model,
}

#[derive(Clone)]
pub struct StoreConfig {
    pub token: String,
    pub database_id: String,
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, RunError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as absent.
    ///
    /// # Errors
    ///
    /// * [`RunError::ConfigMissing`] – a required secret is absent.
    /// * [`RunError::ConfigInvalid`] – the profile name is unknown.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RunError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(RunError::ConfigMissing(key));

        let token = required(NOTION_TOKEN)?;
        let database_id = required(DATABASE_ID)?;
        let api_key = required(GROQ_API_KEY)?;

        let profile = match optional(PROFILE) {
            Some(name) => name
                .parse()
                .map_err(|err: crate::profile::UnknownProfile| {
                    RunError::ConfigInvalid(err.to_string())
                })?,
            None => Profile::default(),
        };

        Ok(Self {
            profile,
            generation: GenerationConfig {
                api_key,
                base_url: optional(GROQ_BASE_URL),
                model: optional(GROQ_MODEL).map(Model::Custom).unwrap_or_default(),
            },
            store: StoreConfig {
                token,
                database_id,
                base_url: optional(NOTION_BASE_URL),
            },
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("profile", &self.profile)
            .field("generation", &self.generation)
            .field("store", &self.store)
            .finish()
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("token", &"<redacted>")
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}
