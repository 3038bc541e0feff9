use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::CurrentConditions;

use super::{ProviderError, WeatherProvider};

const CURRENT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// OpenWeatherMap current-weather client.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Build the request URL for a city.
    ///
    /// The city is interpolated literally, not percent-encoded: the URL is
    /// also the human-readable diagnostic line and must contain the
    /// requested city as a substring. reqwest encodes it on send.
    fn request_url(&self, city: &str) -> String {
        format!(
            "{CURRENT_WEATHER_URL}?q={city}&appid={key}&units=metric",
            key = self.api_key
        )
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    weather: Vec<OwWeather>,
    main: OwMain,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        let url = self.request_url(city);
        debug!(%url, "requesting current weather");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status { status, body: truncate_body(&body) });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

        // The provider reports a list of conditions; the first entry is primary.
        let condition = parsed
            .weather
            .first()
            .ok_or_else(|| {
                ProviderError::MalformedPayload("response contained no weather conditions".into())
            })?;

        Ok(CurrentConditions {
            city: parsed.name,
            condition_id: condition.id,
            summary: condition.main.clone(),
            description: condition.description.clone(),
            temperature: parsed.main.temp,
            low_temperature: parsed.main.temp_min,
            high_temperature: parsed.main.temp_max,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte text cannot split mid-char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_contains_the_literal_city() {
        let provider = OpenWeatherProvider::new("SECRET_KEY".into());

        let url = provider.request_url("Chicago");
        assert!(url.contains("Chicago"));
        assert!(url.contains("appid=SECRET_KEY"));
        assert!(url.contains("units=metric"));

        // Multi-word cities stay readable in the diagnostic URL.
        let url = provider.request_url("San Francisco");
        assert!(url.contains("San Francisco"));
    }

    #[test]
    fn current_response_parses_documented_shape() {
        let body = r#"{
            "name": "Chicago",
            "weather": [
                { "id": 802, "main": "Cloudy", "description": "Cloudy with a chance of rain" }
            ],
            "main": { "temp": 25.3, "temp_min": 24.44, "temp_max": 26.11 }
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(body).expect("shape must parse");
        assert_eq!(parsed.name, "Chicago");
        assert_eq!(parsed.weather[0].id, 802);
        assert_eq!(parsed.weather[0].main, "Cloudy");
        assert_eq!(parsed.main.temp, 25.3);
        assert_eq!(parsed.main.temp_min, 24.44);
        assert_eq!(parsed.main.temp_max, 26.11);
    }

    #[test]
    fn empty_weather_list_would_be_rejected() {
        let body = r#"{ "name": "Chicago", "weather": [], "main": { "temp": 1.0, "temp_min": 0.0, "temp_max": 2.0 } }"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).expect("shape must parse");
        assert!(parsed.weather.first().is_none());
    }

    #[test]
    fn truncate_body_caps_long_payloads() {
        let long = "x".repeat(500);
        let out = truncate_body(&long);
        assert_eq!(out.len(), 203);
        assert!(out.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 'é' is two bytes and straddles the cut-off at byte 200.
        let mut body = "x".repeat(199);
        body.push('é');
        body.push_str(&"y".repeat(100));

        let out = truncate_body(&body);
        assert_eq!(out, format!("{}...", "x".repeat(199)));

        // A body of multi-byte characters only truncates cleanly too.
        let cyrillic = "ж".repeat(150);
        let out = truncate_body(&cyrillic);
        assert!(out.ends_with("..."));
        assert_eq!(out.trim_end_matches("..."), "ж".repeat(100));
    }
}
