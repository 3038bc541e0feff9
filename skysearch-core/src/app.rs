use tracing::error;

use crate::{
    config::Config,
    model::{BannerMessage, CurrentConditions, WeatherGroup, WeatherResult},
    provider::{WeatherProvider, provider_from_config},
};

/// Banner shown when the API key is missing at construction time.
const MISSING_KEY_MESSAGE: &str = "Error! API Key needs to be loaded to use openweathermap.org!";

/// Root controller of the weather widget.
///
/// Owns the canonical [`WeatherResult`] and [`BannerMessage`]; every other
/// part of the widget reads immutable snapshots and communicates intent
/// through method calls. The provider is the only collaborator that touches
/// the network.
#[derive(Debug)]
pub struct WeatherApp {
    provider: Option<Box<dyn WeatherProvider>>,
    weather: WeatherResult,
    banner: BannerMessage,
}

impl WeatherApp {
    /// Build the controller from configuration.
    ///
    /// When no API key is configured the controller enters a permanent
    /// error-banner state and never constructs a provider, so no network
    /// activity can occur. This check runs once, here, not per search.
    pub fn from_config(config: &Config) -> Self {
        match provider_from_config(config) {
            Some(provider) => Self::with_provider(provider),
            None => Self {
                provider: None,
                weather: WeatherResult::default(),
                banner: BannerMessage::error(MISSING_KEY_MESSAGE),
            },
        }
    }

    /// Build the controller around an explicit provider.
    pub fn with_provider(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider: Some(provider),
            weather: WeatherResult::default(),
            banner: BannerMessage::default(),
        }
    }

    pub fn weather(&self) -> &WeatherResult {
        &self.weather
    }

    pub fn banner(&self) -> &BannerMessage {
        &self.banner
    }

    /// Whether a valid result is loaded (derived, never stored).
    pub fn has_valid_result(&self) -> bool {
        self.weather.has_valid_result()
    }

    /// Theme class applied to the whole output frame, e.g. `"weather-bg na"`.
    pub fn theme_class(&self) -> String {
        format!("weather-bg {}", self.weather.group)
    }

    /// Look up current conditions for `name` and update the owned state.
    ///
    /// No input validation: a blank or whitespace city still issues a
    /// request (callers guard with [`crate::search::SearchInput`]). On
    /// success the result is overwritten atomically; on failure it is left
    /// untouched, the raw failure reason is logged, and the banner carries a
    /// city-specific error.
    pub async fn search_city(&mut self, name: &str) {
        let Some(provider) = &self.provider else {
            // Missing key: the construction-time banner already explains it.
            return;
        };

        match provider.current_weather(name).await {
            Ok(conditions) => {
                self.weather = weather_result_from(conditions);
            }
            Err(reason) => {
                error!("{reason}");
                self.banner = BannerMessage::error(format!(
                    "ERROR! Unable to retrieve weather data for {name}!"
                ));
            }
        }
    }

    /// Reset the weather result to its empty sentinel. Idempotent.
    pub fn reset_data(&mut self) {
        self.weather = WeatherResult::default();
    }

    /// Clear the banner message. Idempotent.
    pub fn clear_message(&mut self) {
        self.banner = BannerMessage::default();
    }
}

fn weather_result_from(conditions: CurrentConditions) -> WeatherResult {
    WeatherResult {
        city: conditions.city,
        weather_summary: conditions.summary,
        weather_description: conditions.description,
        current_temperature: conditions.temperature,
        low_temperature: conditions.low_temperature,
        high_temperature: conditions.high_temperature,
        group: WeatherGroup::classify(conditions.condition_id),
    }
}
