use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-provider settings consumed by the flow layer.
///
/// `next_url` is the fallback redirect destination used when a callback
/// request carries no explicit `next` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub next_url: Option<String>,
}

/// Read-only map of provider name to settings.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, ProviderSettings>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the `AUTH_PROVIDERS` environment variable,
    /// a JSON object keyed by provider name:
    ///
    /// `AUTH_PROVIDERS={"google":{"next_url":"/dashboard"},"local":{}}`
    ///
    /// An unset variable yields an empty registry; malformed JSON is an error.
    pub fn from_env() -> Result<Self, serde_json::Error> {
        let Ok(raw) = std::env::var("AUTH_PROVIDERS") else {
            return Ok(Self::default());
        };
        let providers: HashMap<String, ProviderSettings> = serde_json::from_str(&raw)?;
        Ok(Self { providers })
    }

    pub fn with_provider(mut self, name: impl Into<String>, settings: ProviderSettings) -> Self {
        self.providers.insert(name.into(), settings);
        self
    }

    /// The configured default next-URL for `provider`, if any.
    pub fn next_url(&self, provider: &str) -> Option<&str> {
        self.providers
            .get(provider)
            .and_then(|settings| settings.next_url.as_deref())
    }
}
