use serde::{Deserialize, Serialize};

/// Coarse classification bucket derived from the provider's numeric
/// condition code. Drives both icon selection and the page theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherGroup {
    /// Sentinel: no result loaded (or an unrecognized code).
    #[default]
    Na,
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    Clouds,
}

impl WeatherGroup {
    /// Map an OpenWeatherMap condition code onto its group.
    ///
    /// The decade ranges are inclusive; every integer maps to exactly one
    /// group, with `Na` as the catch-all (codes in the 400s, negatives,
    /// anything above 899).
    pub fn classify(code: i64) -> Self {
        match code {
            200..=299 => WeatherGroup::Thunderstorm,
            300..=399 => WeatherGroup::Drizzle,
            500..=599 => WeatherGroup::Rain,
            600..=699 => WeatherGroup::Snow,
            700..=799 => WeatherGroup::Atmosphere,
            800 => WeatherGroup::Clear,
            801..=899 => WeatherGroup::Clouds,
            _ => WeatherGroup::Na,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherGroup::Na => "na",
            WeatherGroup::Thunderstorm => "thunderstorm",
            WeatherGroup::Drizzle => "drizzle",
            WeatherGroup::Rain => "rain",
            WeatherGroup::Snow => "snow",
            WeatherGroup::Atmosphere => "atmosphere",
            WeatherGroup::Clear => "clear",
            WeatherGroup::Clouds => "clouds",
        }
    }

    pub const fn all() -> &'static [WeatherGroup] {
        &[
            WeatherGroup::Na,
            WeatherGroup::Thunderstorm,
            WeatherGroup::Drizzle,
            WeatherGroup::Rain,
            WeatherGroup::Snow,
            WeatherGroup::Atmosphere,
            WeatherGroup::Clear,
            WeatherGroup::Clouds,
        ]
    }

    /// Icon asset name for this group. Total: every group has one,
    /// including the `na` sentinel.
    pub fn icon_asset(&self) -> String {
        format!("w-{}.png", self.as_str())
    }
}

impl std::fmt::Display for WeatherGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The canonical weather result owned by [`crate::app::WeatherApp`].
///
/// The empty sentinel (all-default value) means "no result loaded"; an empty
/// `city` is the authoritative marker for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub city: String,
    pub weather_summary: String,
    pub weather_description: String,
    pub current_temperature: f64,
    pub low_temperature: f64,
    pub high_temperature: f64,
    pub group: WeatherGroup,
}

impl WeatherResult {
    /// Whether a valid result is loaded. Derived from `city`, never stored
    /// separately.
    pub fn has_valid_result(&self) -> bool {
        !self.city.is_empty()
    }
}

/// Severity of a banner message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    Info,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "Info",
            MessageKind::Error => "Error",
        }
    }
}

/// Transient user-facing status line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl BannerMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }

    pub fn is_set(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Provider-normalized current conditions for one city, before the
/// controller folds them into a [`WeatherResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub condition_id: i64,
    pub summary: String,
    pub description: String,
    pub temperature: f64,
    pub low_temperature: f64,
    pub high_temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_documented_ranges() {
        assert_eq!(WeatherGroup::classify(201), WeatherGroup::Thunderstorm);
        assert_eq!(WeatherGroup::classify(300), WeatherGroup::Drizzle);
        assert_eq!(WeatherGroup::classify(501), WeatherGroup::Rain);
        assert_eq!(WeatherGroup::classify(600), WeatherGroup::Snow);
        assert_eq!(WeatherGroup::classify(702), WeatherGroup::Atmosphere);
        assert_eq!(WeatherGroup::classify(800), WeatherGroup::Clear);
        assert_eq!(WeatherGroup::classify(802), WeatherGroup::Clouds);
    }

    #[test]
    fn classify_range_boundaries_are_inclusive() {
        assert_eq!(WeatherGroup::classify(200), WeatherGroup::Thunderstorm);
        assert_eq!(WeatherGroup::classify(299), WeatherGroup::Thunderstorm);
        assert_eq!(WeatherGroup::classify(399), WeatherGroup::Drizzle);
        assert_eq!(WeatherGroup::classify(500), WeatherGroup::Rain);
        assert_eq!(WeatherGroup::classify(699), WeatherGroup::Snow);
        assert_eq!(WeatherGroup::classify(799), WeatherGroup::Atmosphere);
        assert_eq!(WeatherGroup::classify(801), WeatherGroup::Clouds);
        assert_eq!(WeatherGroup::classify(899), WeatherGroup::Clouds);
    }

    #[test]
    fn classify_defaults_to_na() {
        assert_eq!(WeatherGroup::classify(-1), WeatherGroup::Na);
        assert_eq!(WeatherGroup::classify(0), WeatherGroup::Na);
        // 400s are not an OpenWeather condition decade
        assert_eq!(WeatherGroup::classify(450), WeatherGroup::Na);
        assert_eq!(WeatherGroup::classify(900), WeatherGroup::Na);
    }

    #[test]
    fn icon_lookup_is_total_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for group in WeatherGroup::all() {
            let asset = group.icon_asset();
            assert_eq!(asset, format!("w-{group}.png"));
            assert!(seen.insert(asset), "duplicate icon asset for {group}");
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn empty_sentinel_has_no_valid_result() {
        let result = WeatherResult::default();
        assert_eq!(result.city, "");
        assert_eq!(result.current_temperature, 0.0);
        assert_eq!(result.group, WeatherGroup::Na);
        assert!(!result.has_valid_result());

        let loaded = WeatherResult { city: "Boise".into(), ..Default::default() };
        assert!(loaded.has_valid_result());
    }

    #[test]
    fn default_banner_is_empty_info() {
        let banner = BannerMessage::default();
        assert_eq!(banner.text, "");
        assert_eq!(banner.kind, MessageKind::Info);
        assert!(!banner.is_set());
    }
}
