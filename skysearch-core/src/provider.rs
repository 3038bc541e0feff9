use crate::{config::Config, model::CurrentConditions};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Failure modes of a weather lookup.
///
/// The widget folds all of these into the same banner message; the variants
/// exist so diagnostics can tell transport problems from provider rejections
/// and malformed payloads.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to reach the weather provider: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Weather response was malformed: {0}")]
    MalformedPayload(String),
}

/// Capability used by the root controller to fetch current conditions.
///
/// Implementations own their HTTP stack; the controller never builds URLs
/// or touches the network itself.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, ProviderError>;
}

/// Construct the OpenWeatherMap provider from config, if a key is present.
///
/// Returns `None` when no API key is configured; the caller decides how to
/// surface that (the widget shows a permanent error banner).
pub fn provider_from_config(config: &Config) -> Option<Box<dyn WeatherProvider>> {
    config
        .api_key()
        .map(|key| Box::new(OpenWeatherProvider::new(key.to_owned())) as Box<dyn WeatherProvider>)
}
